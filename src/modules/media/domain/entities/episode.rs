use crate::modules::media::domain::value_objects::MetadataId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A loosely-known show identity used to seed a lookup.
///
/// Carries whatever weak signals the caller already has; providers use the
/// name for searching and the external-id map to skip the search when the
/// show was already identified once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialShow {
    pub name: String,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub external_id: HashMap<String, MetadataId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeTranslation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// A canonically-identified episode as returned by a provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub show: PartialShow,
    #[serde(default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub episode_number: Option<u32>,
    /// Continuous numbering across the whole series, season-independent.
    #[serde(default)]
    pub absolute_number: Option<u32>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Backend name -> identity of this episode there.
    #[serde(default)]
    pub external_id: HashMap<String, MetadataId>,
    /// Language -> localized fields.
    #[serde(default)]
    pub translations: HashMap<String, EpisodeTranslation>,
}
