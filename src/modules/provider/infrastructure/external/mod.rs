pub mod anilist;
pub mod tmdb;

pub use anilist::AniList;
pub use tmdb::TheMovieDatabase;
