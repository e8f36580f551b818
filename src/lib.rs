pub mod modules;
pub mod shared;

// Re-exports for easy external access - only export what callers actually need
pub use modules::media::{Episode, Movie, PartialShow, Show};
pub use modules::provider::{MetadataProvider, ProviderConfig, ProviderRegistry};
pub use shared::errors::{AppError, AppResult};
