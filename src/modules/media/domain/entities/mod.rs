mod episode;
mod movie;
mod show;

pub use episode::{Episode, EpisodeTranslation, PartialShow};
pub use movie::{Movie, MovieStatus, MovieTranslation};
pub use show::{Show, ShowStatus, ShowTranslation};
