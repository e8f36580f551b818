pub mod config;
pub mod infrastructure;
pub mod registry;
pub mod traits;

// Re-exports for easy external access
pub use config::ProviderConfig;
pub use infrastructure::external::{AniList, TheMovieDatabase};
pub use registry::ProviderRegistry;
pub use traits::MetadataProvider;
