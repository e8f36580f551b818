use super::models::*;
use crate::modules::media::{
    Episode, EpisodeTranslation, Genre, MetadataId, Movie, MovieStatus, MovieTranslation,
    PartialShow, Show, ShowStatus, ShowTranslation, Studio,
};
use crate::shared::domain::ProviderKind;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::parse_date;
use std::collections::HashMap;

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";
const SITE_BASE: &str = "https://www.themoviedb.org";

/// Maps TheMovieDB response documents onto the domain entities.
///
/// One details document per requested language becomes one translation entry;
/// language-independent fields are taken from the first document.
pub struct TmdbMapper;

impl TmdbMapper {
    pub fn new() -> Self {
        Self
    }

    fn provider_key(&self) -> &'static str {
        ProviderKind::TheMovieDatabase.as_str()
    }

    /// TheMovieDB numeric genre ids, movie and TV sets combined. Ids without
    /// a canonical genre return `None` and survive as tags instead.
    fn genre(&self, entry: &GenreEntry) -> Option<Genre> {
        match entry.id {
            28 | 10759 => Some(Genre::Action),
            12 => Some(Genre::Adventure),
            16 => Some(Genre::Animation),
            35 => Some(Genre::Comedy),
            80 => Some(Genre::Crime),
            99 => Some(Genre::Documentary),
            18 | 10766 => Some(Genre::Drama),
            10751 | 10762 => Some(Genre::Family),
            14 => Some(Genre::Fantasy),
            36 => Some(Genre::History),
            27 => Some(Genre::Horror),
            10402 => Some(Genre::Music),
            9648 => Some(Genre::Mystery),
            10749 => Some(Genre::Romance),
            878 | 10765 => Some(Genre::ScienceFiction),
            53 => Some(Genre::Thriller),
            10752 | 10768 => Some(Genre::War),
            37 => Some(Genre::Western),
            _ => None,
        }
    }

    /// Split backend genres into canonical genres and leftover tags.
    fn split_genres(&self, entries: &[GenreEntry]) -> (Vec<Genre>, Vec<String>) {
        let mut genres = Vec::new();
        let mut tags = Vec::new();
        for entry in entries {
            match self.genre(entry) {
                Some(genre) => genres.push(genre),
                None => tags.push(entry.name.to_lowercase()),
            }
        }
        (genres, tags)
    }

    fn movie_status(&self, raw: Option<&str>) -> MovieStatus {
        match raw {
            Some("Released") => MovieStatus::Finished,
            Some("Planned") | Some("In Production") | Some("Post Production") => {
                MovieStatus::Planned
            }
            _ => MovieStatus::Unknown,
        }
    }

    fn show_status(&self, raw: Option<&str>) -> ShowStatus {
        match raw {
            Some("Ended") | Some("Canceled") => ShowStatus::Finished,
            Some("Returning Series") => ShowStatus::Airing,
            Some("Planned") | Some("In Production") => ShowStatus::Planned,
            _ => ShowStatus::Unknown,
        }
    }

    /// TheMovieDB rates 0-10 with decimals; records use 0-100.
    fn rating(&self, vote_average: Option<f32>) -> Option<u32> {
        vote_average.map(|v| ((v * 10.0).round() as u32).min(100))
    }

    fn image_url(&self, path: &str) -> String {
        format!("{}{}", IMAGE_BASE, path)
    }

    fn studios(&self, companies: Option<&Vec<ProductionCompany>>) -> Vec<Studio> {
        companies
            .map(|list| {
                list.iter()
                    .map(|company| {
                        let mut studio = Studio::new(company.name.clone());
                        studio.external_id.insert(
                            self.provider_key().to_string(),
                            MetadataId::new(
                                company.id.to_string(),
                                Some(format!("{}/company/{}", SITE_BASE, company.id)),
                            ),
                        );
                        studio
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Build a movie from per-language details documents.
    pub fn map_movie(&self, details_by_language: &[(String, MovieDetails)]) -> AppResult<Movie> {
        let (_, first) = details_by_language
            .first()
            .ok_or_else(|| AppError::MappingError("No movie details to map".to_string()))?;

        let mut translations = HashMap::new();
        for (language, details) in details_by_language {
            let name = details
                .title
                .clone()
                .or_else(|| details.original_title.clone())
                .ok_or_else(|| {
                    AppError::MappingError(format!("Movie {} has no title", details.id))
                })?;
            let (_, tags) = self.split_genres(details.genres.as_deref().unwrap_or(&[]));

            translations.insert(
                language.clone(),
                MovieTranslation {
                    name,
                    tagline: details.tagline.clone().filter(|t| !t.is_empty()),
                    overview: details.overview.clone().filter(|o| !o.is_empty()),
                    tags,
                    posters: details
                        .poster_path
                        .as_deref()
                        .map(|p| vec![self.image_url(p)])
                        .unwrap_or_default(),
                    logos: Vec::new(),
                    thumbnails: details
                        .backdrop_path
                        .as_deref()
                        .map(|p| vec![self.image_url(p)])
                        .unwrap_or_default(),
                    trailers: Vec::new(),
                },
            );
        }

        let (genres, _) = self.split_genres(first.genres.as_deref().unwrap_or(&[]));
        let mut external_id = HashMap::new();
        external_id.insert(
            self.provider_key().to_string(),
            MetadataId::new(
                first.id.to_string(),
                Some(format!("{}/movie/{}", SITE_BASE, first.id)),
            ),
        );

        Ok(Movie {
            original_language: first.original_language.clone(),
            aliases: first
                .original_title
                .clone()
                .filter(|t| Some(t) != first.title.as_ref())
                .into_iter()
                .collect(),
            air_date: first.release_date.as_deref().and_then(parse_date),
            status: self.movie_status(first.status.as_deref()),
            rating: self.rating(first.vote_average),
            runtime: first.runtime.filter(|r| *r > 0),
            genres,
            studios: self.studios(first.production_companies.as_ref()),
            external_id,
            translations,
        })
    }

    /// Build a show from per-language details documents.
    pub fn map_show(&self, details_by_language: &[(String, TvDetails)]) -> AppResult<Show> {
        let (_, first) = details_by_language
            .first()
            .ok_or_else(|| AppError::MappingError("No show details to map".to_string()))?;

        let mut translations = HashMap::new();
        for (language, details) in details_by_language {
            let name = details
                .name
                .clone()
                .or_else(|| details.original_name.clone())
                .ok_or_else(|| {
                    AppError::MappingError(format!("Show {} has no name", details.id))
                })?;
            let (_, tags) = self.split_genres(details.genres.as_deref().unwrap_or(&[]));

            translations.insert(
                language.clone(),
                ShowTranslation {
                    name,
                    tagline: details.tagline.clone().filter(|t| !t.is_empty()),
                    overview: details.overview.clone().filter(|o| !o.is_empty()),
                    tags,
                    posters: details
                        .poster_path
                        .as_deref()
                        .map(|p| vec![self.image_url(p)])
                        .unwrap_or_default(),
                    logos: Vec::new(),
                    thumbnails: details
                        .backdrop_path
                        .as_deref()
                        .map(|p| vec![self.image_url(p)])
                        .unwrap_or_default(),
                    trailers: Vec::new(),
                },
            );
        }

        let (genres, _) = self.split_genres(first.genres.as_deref().unwrap_or(&[]));
        let mut external_id = HashMap::new();
        external_id.insert(
            self.provider_key().to_string(),
            MetadataId::new(
                first.id.to_string(),
                Some(format!("{}/tv/{}", SITE_BASE, first.id)),
            ),
        );

        Ok(Show {
            original_language: first.original_language.clone(),
            aliases: first
                .original_name
                .clone()
                .filter(|n| Some(n) != first.name.as_ref())
                .into_iter()
                .collect(),
            start_air: first.first_air_date.as_deref().and_then(parse_date),
            end_air: first.last_air_date.as_deref().and_then(parse_date),
            status: self.show_status(first.status.as_deref()),
            rating: self.rating(first.vote_average),
            genres,
            studios: self.studios(first.production_companies.as_ref()),
            external_id,
            translations,
        })
    }

    /// Weak show identity extracted from a details document, used as the
    /// parent reference on identified episodes.
    pub fn partial_show(&self, details: &TvDetails) -> PartialShow {
        let mut external_id = HashMap::new();
        external_id.insert(
            self.provider_key().to_string(),
            MetadataId::new(
                details.id.to_string(),
                Some(format!("{}/tv/{}", SITE_BASE, details.id)),
            ),
        );

        PartialShow {
            name: details
                .name
                .clone()
                .or_else(|| details.original_name.clone())
                .unwrap_or_default(),
            original_language: details.original_language.clone(),
            external_id,
        }
    }

    /// Build an episode from per-language details documents.
    pub fn map_episode(
        &self,
        show: PartialShow,
        show_id: u32,
        details_by_language: &[(String, EpisodeDetails)],
        absolute: Option<u32>,
    ) -> AppResult<Episode> {
        let (_, first) = details_by_language
            .first()
            .ok_or_else(|| AppError::MappingError("No episode details to map".to_string()))?;

        let translations: HashMap<String, EpisodeTranslation> = details_by_language
            .iter()
            .map(|(language, details)| {
                (
                    language.clone(),
                    EpisodeTranslation {
                        name: details.name.clone().filter(|n| !n.is_empty()),
                        overview: details.overview.clone().filter(|o| !o.is_empty()),
                    },
                )
            })
            .collect();

        let mut external_id = HashMap::new();
        external_id.insert(
            self.provider_key().to_string(),
            MetadataId::new(
                first.id.to_string(),
                Some(format!(
                    "{}/tv/{}/season/{}/episode/{}",
                    SITE_BASE, show_id, first.season_number, first.episode_number
                )),
            ),
        );

        Ok(Episode {
            show,
            season_number: Some(first.season_number),
            episode_number: Some(first.episode_number),
            absolute_number: absolute,
            runtime: first.runtime.filter(|r| *r > 0),
            release_date: first.air_date.as_deref().and_then(parse_date),
            thumbnail: first.still_path.as_deref().map(|p| self.image_url(p)),
            external_id,
            translations,
        })
    }
}

impl Default for TmdbMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an absolute episode number onto a (season, episode) pair by walking
/// the per-season episode counts. Specials (season 0) do not participate in
/// absolute numbering.
pub fn absolute_to_relative(seasons: &[TvSeason], absolute: u32) -> Option<(u32, u32)> {
    if absolute == 0 {
        return None;
    }

    let mut ordered: Vec<&TvSeason> = seasons.iter().filter(|s| s.season_number > 0).collect();
    ordered.sort_by_key(|s| s.season_number);

    let mut remaining = absolute;
    for season in ordered {
        let count = season.episode_count.unwrap_or(0);
        if remaining <= count {
            return Some((season.season_number, remaining));
        }
        remaining -= count;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(number: u32, episodes: u32) -> TvSeason {
        TvSeason {
            season_number: number,
            episode_count: Some(episodes),
        }
    }

    #[test]
    fn test_absolute_within_first_season() {
        let seasons = vec![season(0, 3), season(1, 12), season(2, 12)];
        assert_eq!(absolute_to_relative(&seasons, 5), Some((1, 5)));
    }

    #[test]
    fn test_absolute_crosses_season_boundary() {
        let seasons = vec![season(1, 12), season(2, 12)];
        assert_eq!(absolute_to_relative(&seasons, 13), Some((2, 1)));
        assert_eq!(absolute_to_relative(&seasons, 24), Some((2, 12)));
    }

    #[test]
    fn test_absolute_out_of_range() {
        let seasons = vec![season(1, 12)];
        assert_eq!(absolute_to_relative(&seasons, 13), None);
        assert_eq!(absolute_to_relative(&seasons, 0), None);
    }

    #[test]
    fn test_map_movie_from_fixture() {
        let details: MovieDetails = serde_json::from_value(serde_json::json!({
            "id": 603,
            "title": "The Matrix",
            "original_title": "The Matrix",
            "original_language": "en",
            "overview": "A computer hacker learns the truth.",
            "tagline": "Welcome to the Real World.",
            "poster_path": "/matrix.jpg",
            "release_date": "1999-03-30",
            "runtime": 136,
            "status": "Released",
            "vote_average": 8.2,
            "genres": [
                {"id": 28, "name": "Action"},
                {"id": 878, "name": "Science Fiction"},
                {"id": 12345, "name": "Cyberpunk"}
            ]
        }))
        .unwrap();

        let mapper = TmdbMapper::new();
        let movie = mapper
            .map_movie(&[("en-US".to_string(), details)])
            .unwrap();

        assert_eq!(movie.status, MovieStatus::Finished);
        assert_eq!(movie.rating, Some(82));
        assert_eq!(movie.runtime, Some(136));
        assert_eq!(movie.genres, vec![Genre::Action, Genre::ScienceFiction]);
        assert_eq!(
            movie.air_date,
            chrono::NaiveDate::from_ymd_opt(1999, 3, 30)
        );

        let translation = &movie.translations["en-US"];
        assert_eq!(translation.name, "The Matrix");
        assert_eq!(translation.tags, vec!["cyberpunk"]);
        assert_eq!(
            translation.posters,
            vec!["https://image.tmdb.org/t/p/original/matrix.jpg"]
        );

        let id = &movie.external_id["themoviedatabase"];
        assert_eq!(id.data_id, "603");
        assert_eq!(
            id.link.as_deref(),
            Some("https://www.themoviedb.org/movie/603")
        );
    }

    #[test]
    fn test_map_movie_without_details_fails() {
        let mapper = TmdbMapper::new();
        assert!(mapper.map_movie(&[]).is_err());
    }

    #[test]
    fn test_show_status_mapping() {
        let mapper = TmdbMapper::new();
        assert_eq!(mapper.show_status(Some("Ended")), ShowStatus::Finished);
        assert_eq!(
            mapper.show_status(Some("Returning Series")),
            ShowStatus::Airing
        );
        assert_eq!(mapper.show_status(None), ShowStatus::Unknown);
    }

    #[test]
    fn test_rating_is_clamped() {
        let mapper = TmdbMapper::new();
        assert_eq!(mapper.rating(Some(8.25)), Some(83));
        assert_eq!(mapper.rating(Some(11.0)), Some(100));
        assert_eq!(mapper.rating(None), None);
    }
}
