mod genre;
mod metadata_id;
mod studio;

pub use genre::Genre;
pub use metadata_id::MetadataId;
pub use studio::Studio;
