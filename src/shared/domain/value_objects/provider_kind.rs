use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported metadata backends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// TheMovieDB REST API
    #[serde(rename = "themoviedatabase")]
    TheMovieDatabase,
    /// AniList GraphQL API
    #[serde(rename = "anilist")]
    AniList,
}

impl ProviderKind {
    /// Stable identifier used in external-id maps and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::TheMovieDatabase => "themoviedatabase",
            ProviderKind::AniList => "anilist",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
