use super::mapper::{absolute_to_relative, TmdbMapper};
use super::models::*;
use crate::modules::media::{Episode, Movie, PartialShow, Show};
use crate::modules::provider::infrastructure::http_client::RateLimitClient;
use crate::modules::provider::traits::MetadataProvider;
use crate::shared::domain::ProviderKind;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::best_match;
use async_trait::async_trait;
use reqwest::Client;

const DEFAULT_LANGUAGE: &str = "en-US";

/// TheMovieDB backend: REST API keyed by a query-string credential.
pub struct TheMovieDatabase {
    http: RateLimitClient,
    base_url: String,
    api_key: String,
    mapper: TmdbMapper,
}

impl TheMovieDatabase {
    pub fn new(client: Client, api_key: String) -> Self {
        Self {
            http: RateLimitClient::for_tmdb(client),
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key,
            mapper: TmdbMapper::new(),
        }
    }

    /// The credential this provider was constructed with.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}?api_key={}", self.base_url, endpoint, self.api_key);
        for (key, value) in params {
            url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
        }
        url
    }

    /// An empty preference list falls back to the backend default language.
    fn languages_or_default(languages: &[String]) -> Vec<String> {
        if languages.is_empty() {
            vec![DEFAULT_LANGUAGE.to_string()]
        } else {
            languages.to_vec()
        }
    }

    async fn movie_details(&self, id: u32, language: &str) -> AppResult<MovieDetails> {
        let url = self.build_url(&format!("/movie/{}", id), &[("language", language)]);
        self.http.get(&url).await
    }

    async fn tv_details(&self, id: u32, language: &str) -> AppResult<TvDetails> {
        let url = self.build_url(&format!("/tv/{}", id), &[("language", language)]);
        self.http.get(&url).await
    }

    async fn episode_details(
        &self,
        show_id: u32,
        season: u32,
        episode: u32,
        language: &str,
    ) -> AppResult<EpisodeDetails> {
        let url = self.build_url(
            &format!("/tv/{}/season/{}/episode/{}", show_id, season, episode),
            &[("language", language)],
        );
        self.http.get(&url).await
    }

    /// Search TV shows and keep the result closest to the query.
    async fn search_show(&self, name: &str, language: &str) -> AppResult<TvResult> {
        let url = self.build_url("/search/tv", &[("query", name), ("language", language)]);

        log::info!("TheMovieDB: searching show '{}'", name);
        let response: SearchResponse<TvResult> = self.http.get(&url).await?;

        best_match(name, &response.results, |r| {
            r.name.as_deref().or(r.original_name.as_deref()).unwrap_or("")
        })
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No show found for '{}'", name)))
    }
}

#[async_trait]
impl MetadataProvider for TheMovieDatabase {
    fn kind(&self) -> ProviderKind {
        ProviderKind::TheMovieDatabase
    }

    async fn identify_movie(
        &self,
        name: &str,
        year: Option<i32>,
        languages: &[String],
    ) -> AppResult<Movie> {
        let languages = Self::languages_or_default(languages);
        let year_param = year.map(|y| y.to_string());

        let mut params = vec![("query", name), ("language", languages[0].as_str())];
        if let Some(ref y) = year_param {
            params.push(("year", y.as_str()));
        }
        let url = self.build_url("/search/movie", &params);

        log::info!("TheMovieDB: searching movie '{}' (year: {:?})", name, year);
        let response: SearchResponse<MovieResult> = self.http.get(&url).await?;

        let result = best_match(name, &response.results, |r| {
            r.title.as_deref().or(r.original_title.as_deref()).unwrap_or("")
        })
        .ok_or_else(|| AppError::NotFound(format!("No movie found for '{}'", name)))?;

        let mut details_by_language = Vec::with_capacity(languages.len());
        for language in &languages {
            let details = self.movie_details(result.id, language).await?;
            details_by_language.push((language.clone(), details));
        }

        log::info!("TheMovieDB: identified movie '{}' as id {}", name, result.id);
        self.mapper.map_movie(&details_by_language)
    }

    async fn identify_show(&self, show: &PartialShow, languages: &[String]) -> AppResult<Show> {
        let languages = Self::languages_or_default(languages);

        // A previous identification may have left our id on the partial show;
        // that skips the search entirely.
        let show_id = match show
            .external_id
            .get(self.name())
            .and_then(|id| id.data_id.parse::<u32>().ok())
        {
            Some(id) => id,
            None => self.search_show(&show.name, &languages[0]).await?.id,
        };

        let mut details_by_language = Vec::with_capacity(languages.len());
        for language in &languages {
            let details = self.tv_details(show_id, language).await?;
            details_by_language.push((language.clone(), details));
        }

        log::info!(
            "TheMovieDB: identified show '{}' as id {}",
            show.name,
            show_id
        );
        self.mapper.map_show(&details_by_language)
    }

    async fn identify_episode(
        &self,
        name: &str,
        season: Option<u32>,
        episode_nbr: Option<u32>,
        absolute: Option<u32>,
        languages: &[String],
    ) -> AppResult<Episode> {
        let languages = Self::languages_or_default(languages);

        let show_id = self.search_show(name, &languages[0]).await?.id;
        let show_details = self.tv_details(show_id, &languages[0]).await?;

        // Use whichever numbering signals are present; their absence alone is
        // never an error.
        let (season_nbr, episode_in_season) = match (season, episode_nbr) {
            (Some(s), Some(e)) => (s, e),
            _ => match absolute {
                Some(abs) => {
                    let seasons = show_details.seasons.as_deref().unwrap_or(&[]);
                    absolute_to_relative(seasons, abs).ok_or_else(|| {
                        AppError::NotFound(format!(
                            "'{}' has no absolute episode {}",
                            name, abs
                        ))
                    })?
                }
                None => (season.unwrap_or(1), episode_nbr.unwrap_or(1)),
            },
        };

        let mut details_by_language = Vec::with_capacity(languages.len());
        for language in &languages {
            let details = self
                .episode_details(show_id, season_nbr, episode_in_season, language)
                .await?;
            details_by_language.push((language.clone(), details));
        }

        log::info!(
            "TheMovieDB: identified '{}' S{:02}E{:02}",
            name,
            season_nbr,
            episode_in_season
        );
        let show = self.mapper.partial_show(&show_details);
        self.mapper
            .map_episode(show, show_id, &details_by_language, absolute)
    }
}
