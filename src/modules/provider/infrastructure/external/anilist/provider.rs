use super::dto::{AniListResponse, Media, MediaData};
use super::mapper::AniListMapper;
use super::queries::AniListQueries;
use crate::modules::media::{Movie, PartialShow, Show};
use crate::modules::provider::infrastructure::http_client::RateLimitClient;
use crate::modules::provider::traits::MetadataProvider;
use crate::shared::domain::ProviderKind;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

/// AniList backend: GraphQL API, anime only.
///
/// The backend has no per-episode endpoint, so `identify_episode` keeps the
/// trait default and signals `NotImplemented`.
pub struct AniList {
    http: RateLimitClient,
    base_url: String,
    api_key: String,
    mapper: AniListMapper,
}

impl AniList {
    pub fn new(client: Client, api_key: String) -> Self {
        Self {
            http: RateLimitClient::for_anilist(client),
            base_url: "https://graphql.anilist.co".to_string(),
            api_key,
            mapper: AniListMapper::new(),
        }
    }

    /// The credential this provider was constructed with.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Run one media lookup and unwrap the GraphQL envelope.
    async fn query_media(&self, query: String, variables: Value, wanted: &str) -> AppResult<Media> {
        let body = json!({ "query": query, "variables": variables });
        let response: AniListResponse<MediaData> =
            self.http.post_json(&self.base_url, &body).await?;

        if let Some(errors) = response.errors {
            // AniList reports an unmatched search as a GraphQL-level 404.
            if errors.iter().any(|e| e.status == Some(404)) {
                return Err(AppError::NotFound(format!(
                    "AniList found no match for {}",
                    wanted
                )));
            }
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(AppError::ApiError(format!(
                "AniList GraphQL errors: {}",
                messages.join(", ")
            )));
        }

        response
            .data
            .and_then(|d| d.media)
            .ok_or_else(|| AppError::NotFound(format!("AniList found no match for {}", wanted)))
    }
}

#[async_trait]
impl MetadataProvider for AniList {
    fn kind(&self) -> ProviderKind {
        ProviderKind::AniList
    }

    async fn identify_movie(
        &self,
        name: &str,
        year: Option<i32>,
        _languages: &[String],
    ) -> AppResult<Movie> {
        log::info!("AniList: searching movie '{}' (year: {:?})", name, year);

        let variables = match year {
            Some(year) => json!({ "search": name, "seasonYear": year }),
            None => json!({ "search": name }),
        };
        let media = self
            .query_media(AniListQueries::search_movie(), variables, name)
            .await?;

        log::info!("AniList: identified movie '{}' as id {}", name, media.id);
        self.mapper.map_movie(&media)
    }

    async fn identify_show(&self, show: &PartialShow, _languages: &[String]) -> AppResult<Show> {
        log::info!("AniList: searching show '{}'", show.name);

        let variables = json!({ "search": show.name });
        let media = self
            .query_media(AniListQueries::search_show(), variables, &show.name)
            .await?;

        log::info!(
            "AniList: identified show '{}' as id {}",
            show.name,
            media.id
        );
        self.mapper.map_show(&media)
    }
}
