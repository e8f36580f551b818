use crate::modules::media::domain::value_objects::{Genre, MetadataId, Studio};
use crate::shared::utils::{HasImages, ImageKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowStatus {
    #[default]
    Unknown,
    Finished,
    Airing,
    Planned,
}

/// Localized fields of a show, one instance per language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowTranslation {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub posters: Vec<String>,
    #[serde(default)]
    pub logos: Vec<String>,
    #[serde(default)]
    pub thumbnails: Vec<String>,
    #[serde(default)]
    pub trailers: Vec<String>,
}

impl HasImages for ShowTranslation {
    fn images(&self, kind: ImageKind) -> &[String] {
        match kind {
            ImageKind::Posters => &self.posters,
            ImageKind::Thumbnails => &self.thumbnails,
            ImageKind::Logos => &self.logos,
        }
    }
}

/// A canonically-identified show as returned by a provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Show {
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub start_air: Option<NaiveDate>,
    #[serde(default)]
    pub end_air: Option<NaiveDate>,
    #[serde(default)]
    pub status: ShowStatus,
    /// Aggregate rating on a 0-100 scale.
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub studios: Vec<Studio>,
    /// Backend name -> identity of this show there.
    #[serde(default)]
    pub external_id: HashMap<String, MetadataId>,
    /// Language -> localized fields.
    #[serde(default)]
    pub translations: HashMap<String, ShowTranslation>,
}
