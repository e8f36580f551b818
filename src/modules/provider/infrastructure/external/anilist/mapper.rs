use super::dto::{FuzzyDate, Media};
use crate::modules::media::{
    Genre, MetadataId, Movie, MovieStatus, MovieTranslation, Show, ShowStatus, ShowTranslation,
    Studio,
};
use crate::shared::domain::ProviderKind;
use crate::shared::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Maps AniList media documents onto the domain entities.
///
/// AniList serves one localized record per lookup, so the translations map
/// has a single entry keyed `en`; romaji and native titles land in aliases.
pub struct AniListMapper;

impl AniListMapper {
    pub fn new() -> Self {
        Self
    }

    fn provider_key(&self) -> &'static str {
        ProviderKind::AniList.as_str()
    }

    /// AniList genre names with no canonical counterpart (Ecchi, Mecha, ...)
    /// return `None` and are kept as tags.
    fn genre(&self, name: &str) -> Option<Genre> {
        match name {
            "Action" => Some(Genre::Action),
            "Adventure" => Some(Genre::Adventure),
            "Comedy" => Some(Genre::Comedy),
            "Drama" => Some(Genre::Drama),
            "Fantasy" => Some(Genre::Fantasy),
            "Horror" => Some(Genre::Horror),
            "Music" => Some(Genre::Music),
            "Mystery" => Some(Genre::Mystery),
            "Romance" => Some(Genre::Romance),
            "Sci-Fi" => Some(Genre::ScienceFiction),
            "Thriller" => Some(Genre::Thriller),
            _ => None,
        }
    }

    fn date(&self, fuzzy: Option<&FuzzyDate>) -> Option<NaiveDate> {
        let fuzzy = fuzzy?;
        NaiveDate::from_ymd_opt(fuzzy.year?, fuzzy.month.unwrap_or(1), fuzzy.day.unwrap_or(1))
    }

    fn show_status(&self, raw: Option<&str>) -> ShowStatus {
        match raw {
            Some("FINISHED") | Some("CANCELLED") => ShowStatus::Finished,
            Some("RELEASING") => ShowStatus::Airing,
            Some("NOT_YET_RELEASED") => ShowStatus::Planned,
            _ => ShowStatus::Unknown,
        }
    }

    fn movie_status(&self, raw: Option<&str>) -> MovieStatus {
        match raw {
            Some("FINISHED") => MovieStatus::Finished,
            Some("NOT_YET_RELEASED") => MovieStatus::Planned,
            _ => MovieStatus::Unknown,
        }
    }

    /// Non-spoiler tags plus genres that have no canonical mapping.
    fn tags(&self, media: &Media) -> Vec<String> {
        let mut tags: Vec<String> = media
            .tags
            .iter()
            .flatten()
            .filter(|t| !t.is_media_spoiler && !t.is_general_spoiler)
            .map(|t| t.name.to_lowercase())
            .collect();

        tags.extend(
            media
                .genres
                .iter()
                .flatten()
                .filter(|g| self.genre(g).is_none())
                .map(|g| g.to_lowercase()),
        );
        tags
    }

    fn genres(&self, media: &Media) -> Vec<Genre> {
        media
            .genres
            .iter()
            .flatten()
            .filter_map(|g| self.genre(g))
            .collect()
    }

    fn trailers(&self, media: &Media) -> Vec<String> {
        media
            .trailer
            .as_ref()
            .filter(|t| t.site.as_deref() == Some("youtube"))
            .and_then(|t| t.id.as_ref())
            .map(|id| vec![format!("https://youtube.com/watch?v={}", id)])
            .unwrap_or_default()
    }

    fn studios(&self, media: &Media) -> Vec<Studio> {
        media
            .studios
            .iter()
            .flat_map(|connection| connection.nodes.iter().flatten())
            .map(|node| {
                let mut studio = Studio::new(node.name.clone());
                studio.external_id.insert(
                    self.provider_key().to_string(),
                    MetadataId::new(node.id.to_string(), node.site_url.clone()),
                );
                studio
            })
            .collect()
    }

    fn external_id(&self, media: &Media) -> HashMap<String, MetadataId> {
        let mut ids = HashMap::new();
        ids.insert(
            self.provider_key().to_string(),
            MetadataId::new(media.id.to_string(), media.site_url.clone()),
        );
        if let Some(mal_id) = media.id_mal {
            ids.insert(
                "mal".to_string(),
                MetadataId::new(
                    mal_id.to_string(),
                    Some(format!("https://myanimelist.net/anime/{}", mal_id)),
                ),
            );
        }
        ids
    }

    fn display_name(&self, media: &Media) -> AppResult<String> {
        media
            .title
            .as_ref()
            .and_then(|t| t.romaji.clone().or_else(|| t.english.clone()))
            .ok_or_else(|| AppError::MappingError(format!("Media {} has no title", media.id)))
    }

    fn aliases(&self, media: &Media) -> Vec<String> {
        let mut aliases: Vec<String> = media
            .title
            .iter()
            .flat_map(|t| [t.english.clone(), t.native.clone()])
            .flatten()
            .collect();
        aliases.extend(media.synonyms.iter().flatten().cloned());
        aliases
    }

    pub fn map_show(&self, media: &Media) -> AppResult<Show> {
        let name = self.display_name(media)?;

        let mut translations = HashMap::new();
        translations.insert(
            "en".to_string(),
            ShowTranslation {
                name,
                tagline: None,
                overview: media.description.clone(),
                tags: self.tags(media),
                posters: media
                    .cover_image
                    .iter()
                    .filter_map(|c| c.extra_large.clone())
                    .collect(),
                logos: Vec::new(),
                thumbnails: media.banner_image.clone().into_iter().collect(),
                trailers: self.trailers(media),
            },
        );

        Ok(Show {
            original_language: media.country_of_origin.clone(),
            aliases: self.aliases(media),
            start_air: self.date(media.start_date.as_ref()),
            end_air: self.date(media.end_date.as_ref()),
            status: self.show_status(media.status.as_deref()),
            rating: media.average_score,
            genres: self.genres(media),
            studios: self.studios(media),
            external_id: self.external_id(media),
            translations,
        })
    }

    pub fn map_movie(&self, media: &Media) -> AppResult<Movie> {
        let name = self.display_name(media)?;

        let mut translations = HashMap::new();
        translations.insert(
            "en".to_string(),
            MovieTranslation {
                name,
                tagline: None,
                overview: media.description.clone(),
                tags: self.tags(media),
                posters: media
                    .cover_image
                    .iter()
                    .filter_map(|c| c.extra_large.clone())
                    .collect(),
                logos: Vec::new(),
                thumbnails: media.banner_image.clone().into_iter().collect(),
                trailers: self.trailers(media),
            },
        );

        Ok(Movie {
            original_language: media.country_of_origin.clone(),
            aliases: self.aliases(media),
            air_date: self.date(media.start_date.as_ref()),
            status: self.movie_status(media.status.as_deref()),
            rating: media.average_score,
            runtime: media.duration.filter(|d| *d > 0),
            genres: self.genres(media),
            studios: self.studios(media),
            external_id: self.external_id(media),
            translations,
        })
    }
}

impl Default for AniListMapper {
    fn default() -> Self {
        Self::new()
    }
}
