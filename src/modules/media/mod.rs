pub mod domain;

// Re-exports for easy external access
pub use domain::entities::{
    Episode, EpisodeTranslation, Movie, MovieStatus, MovieTranslation, PartialShow, Show,
    ShowStatus, ShowTranslation,
};
pub use domain::value_objects::{Genre, MetadataId, Studio};
