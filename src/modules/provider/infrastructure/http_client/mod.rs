mod rate_limit_client;
mod retry_policy;

pub use rate_limit_client::RateLimitClient;
pub use retry_policy::{is_retryable_error, RateLimitInfo, RetryPolicy};
