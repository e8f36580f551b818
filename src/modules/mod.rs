pub mod media;
pub mod provider;
