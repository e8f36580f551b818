//! Rate-limited JSON client shared by the provider implementations.
//!
//! Wraps the caller-owned `reqwest::Client` (never builds its own) with a
//! local rate limiter and retry handling, so each backend respects its
//! published limits without duplicating the loop in every provider.

use super::retry_policy::{is_retryable_error, RateLimitInfo, RetryPolicy};
use crate::shared::errors::{AppError, AppResult};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::num::NonZeroU32;
use std::time::Duration;
use tokio::time::sleep;

type DirectLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectLimiter,
    retry_policy: RetryPolicy,
    backend: &'static str,
}

impl RateLimitClient {
    /// Client tuned for TheMovieDB (legacy limit: 40 requests per 10s).
    pub fn for_tmdb(client: Client) -> Self {
        Self::new(client, "TheMovieDB", RetryPolicy::tmdb(), 4.0, 10)
    }

    /// Client tuned for AniList (30 requests per minute, degraded state).
    pub fn for_anilist(client: Client) -> Self {
        Self::new(client, "AniList", RetryPolicy::anilist(), 0.5, 2)
    }

    pub fn new(
        client: Client,
        backend: &'static str,
        retry_policy: RetryPolicy,
        requests_per_second: f64,
        burst_size: u32,
    ) -> Self {
        let period = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::MAX
        };
        let burst = NonZeroU32::new(burst_size.max(1)).unwrap();
        let quota = Quota::with_period(period).unwrap().allow_burst(burst);

        Self {
            client,
            rate_limiter: GovernorRateLimiter::direct(quota),
            retry_policy,
            backend,
        }
    }

    /// GET a JSON document.
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.request(Method::GET, url, None).await
    }

    /// POST a JSON body, expecting a JSON document back.
    pub async fn post_json<T>(&self, url: &str, body: &Value) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.request(Method::POST, url, Some(body.clone())).await
    }

    async fn request<T>(&self, method: Method, url: &str, body: Option<Value>) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        for attempt in 0..=self.retry_policy.max_retries {
            self.rate_limiter.until_ready().await;

            let response = match self.send(&method, url, &body).await {
                Ok(response) => response,
                Err(e) => {
                    if is_retryable_error(&e) && attempt < self.retry_policy.max_retries {
                        let delay = self.retry_policy.calculate_delay(attempt, None);
                        log::warn!(
                            "{} request failed (attempt {}/{}): {}. Retrying in {:?}",
                            self.backend,
                            attempt + 1,
                            self.retry_policy.max_retries + 1,
                            e,
                            delay
                        );
                        sleep(delay).await;
                        continue;
                    }
                    return Err(AppError::ExternalServiceError(format!(
                        "{} request failed: {}",
                        self.backend, e
                    )));
                }
            };

            let status = response.status();

            if status == 429 {
                if attempt < self.retry_policy.max_retries {
                    let info = RateLimitInfo::from_headers(response.headers());
                    let delay = self
                        .retry_policy
                        .calculate_delay(attempt, info.recommended_delay());
                    log::warn!(
                        "{} rate limited (attempt {}/{}). Waiting {:?}",
                        self.backend,
                        attempt + 1,
                        self.retry_policy.max_retries + 1,
                        delay
                    );
                    sleep(delay).await;
                    continue;
                }
                return Err(AppError::RateLimitError(format!(
                    "{} rate limit exceeded after {} attempts",
                    self.backend,
                    self.retry_policy.max_retries + 1
                )));
            }

            if status.is_server_error() && attempt < self.retry_policy.max_retries {
                let delay = self.retry_policy.calculate_delay(attempt, None);
                log::warn!(
                    "{} returned {} (attempt {}/{}). Retrying in {:?}",
                    self.backend,
                    status,
                    attempt + 1,
                    self.retry_policy.max_retries + 1,
                    delay
                );
                sleep(delay).await;
                continue;
            }

            if !status.is_success() {
                return Err(match status.as_u16() {
                    404 => AppError::NotFound(format!("{}: resource not found", self.backend)),
                    401 | 403 => AppError::Unauthorized(format!(
                        "{} rejected the configured credential",
                        self.backend
                    )),
                    _ => AppError::ApiError(format!("{} returned {}", self.backend, status)),
                });
            }

            return self.parse(response).await;
        }

        // The loop always returns on the last attempt.
        Err(AppError::ExternalServiceError(format!(
            "{} request exhausted all retries",
            self.backend
        )))
    }

    async fn send(
        &self,
        method: &Method,
        url: &str,
        body: &Option<Value>,
    ) -> Result<Response, reqwest::Error> {
        let mut request = self
            .client
            .request(method.clone(), url)
            .header("Accept", "application/json");

        if let Some(json_body) = body {
            request = request.json(json_body);
        }

        request.send().await
    }

    async fn parse<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!("Failed to read {} response: {}", self.backend, e))
        })?;

        serde_json::from_str(&text).map_err(|e| {
            // get() avoids slicing through a multi-byte character
            let preview = text.get(..200).unwrap_or(&text);
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Body: {}",
                self.backend, e, preview
            ))
        })
    }

    /// Whether the limiter would admit a request right now (for tests and
    /// monitoring; does not consume a slot on failure).
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn backend(&self) -> &'static str {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let tmdb = RateLimitClient::for_tmdb(Client::new());
        assert_eq!(tmdb.backend(), "TheMovieDB");

        let anilist = RateLimitClient::for_anilist(Client::new());
        assert_eq!(anilist.backend(), "AniList");
    }

    #[test]
    fn test_fresh_client_admits_requests() {
        let client = RateLimitClient::for_tmdb(Client::new());
        assert!(client.can_make_request_now());
    }

    #[test]
    fn test_burst_is_bounded() {
        let client = RateLimitClient::new(Client::new(), "Test", RetryPolicy::tmdb(), 1.0, 1);
        assert!(client.can_make_request_now());
    }
}
