//! Retry policies for the metadata backends.
//!
//! Each backend publishes different rate limits; the policy captures how
//! patient we are with it before giving up.

use std::time::Duration;

/// Configuration for HTTP retry behavior
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Base delay between retries
    pub base_delay: Duration,
    /// Upper bound on any single wait
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
}

impl RetryPolicy {
    /// TheMovieDB tolerates bursts; short waits are enough.
    pub fn tmdb() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }

    /// AniList throttles at 30 req/min in its degraded state, so back off
    /// harder and longer.
    pub fn anilist() -> Self {
        Self {
            max_retries: 5,
            base_delay: Duration::from_millis(700),
            max_delay: Duration::from_secs(60),
            backoff_multiplier: 1.5,
        }
    }

    /// Delay before the next attempt. A server-provided `Retry-After` wins
    /// over computed backoff, capped at `max_delay` either way.
    pub fn calculate_delay(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        if let Some(server_delay) = retry_after {
            return server_delay.min(self.max_delay);
        }

        let multiplier = self.backoff_multiplier.powi(attempt as i32);
        let delay = Duration::from_millis((self.base_delay.as_millis() as f64 * multiplier) as u64);
        delay.min(self.max_delay)
    }
}

/// Information extracted from HTTP 429 responses
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// From the Retry-After header
    pub retry_after: Option<Duration>,
    /// From X-RateLimit-Reset (converted to a wait from now)
    pub reset_time: Option<Duration>,
    /// From X-RateLimit-Remaining
    pub remaining: Option<u32>,
}

impl RateLimitInfo {
    pub fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let header_u64 = |name: &str| {
            headers
                .get(name)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
        };

        let retry_after = header_u64("retry-after").map(Duration::from_secs);

        let reset_time = header_u64("x-ratelimit-reset").map(|timestamp| {
            let now = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            Duration::from_secs(timestamp.saturating_sub(now))
        });

        let remaining = header_u64("x-ratelimit-remaining").map(|v| v as u32);

        Self {
            retry_after,
            reset_time,
            remaining,
        }
    }

    /// Best wait recommendation the server gave us, if any.
    pub fn recommended_delay(&self) -> Option<Duration> {
        self.retry_after.or(self.reset_time)
    }
}

/// Whether a transport-level failure is worth another attempt.
pub fn is_retryable_error(error: &reqwest::Error) -> bool {
    if let Some(status) = error.status() {
        matches!(status.as_u16(), 408 | 425 | 429 | 500..=599)
    } else {
        error.is_timeout() || error.is_connect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmdb_policy() {
        let policy = RetryPolicy::tmdb();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.base_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_anilist_policy() {
        let policy = RetryPolicy::anilist();
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.max_delay, Duration::from_secs(60));
    }

    #[test]
    fn test_server_delay_wins() {
        let policy = RetryPolicy::tmdb();
        let delay = policy.calculate_delay(1, Some(Duration::from_secs(10)));
        assert_eq!(delay, Duration::from_secs(10));
    }

    #[test]
    fn test_server_delay_is_capped() {
        let policy = RetryPolicy::tmdb();
        let delay = policy.calculate_delay(0, Some(Duration::from_secs(600)));
        assert_eq!(delay, policy.max_delay);
    }

    #[test]
    fn test_backoff_grows() {
        let policy = RetryPolicy::anilist();
        let first = policy.calculate_delay(1, None);
        let second = policy.calculate_delay(2, None);
        assert!(second > first);
        assert!(second <= policy.max_delay);
    }

    #[test]
    fn test_rate_limit_info_parsing() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("retry-after", "30".parse().unwrap());
        headers.insert("x-ratelimit-remaining", "0".parse().unwrap());

        let info = RateLimitInfo::from_headers(&headers);
        assert_eq!(info.retry_after, Some(Duration::from_secs(30)));
        assert_eq!(info.remaining, Some(0));
        assert_eq!(info.recommended_delay(), Some(Duration::from_secs(30)));
    }
}
