mod dto;
mod mapper;
mod provider;
mod queries;

pub use provider::AniList;
