use serde::Deserialize;

// Response envelopes

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse<T> {
    pub page: u32,
    #[serde(default)]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_results: u32,
}

// Movie types

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieResult {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub status: Option<String>, // "Released", "Post Production", "Planned"
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub genres: Option<Vec<GenreEntry>>,
    #[serde(default)]
    pub production_companies: Option<Vec<ProductionCompany>>,
}

// TV types

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TvResult {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvDetails {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub last_air_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>, // "Returning Series", "Ended", "Canceled"
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub genres: Option<Vec<GenreEntry>>,
    #[serde(default)]
    pub production_companies: Option<Vec<ProductionCompany>>,
    #[serde(default)]
    pub seasons: Option<Vec<TvSeason>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvSeason {
    pub season_number: u32,
    #[serde(default)]
    pub episode_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeDetails {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    pub season_number: u32,
    pub episode_number: u32,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub still_path: Option<String>,
}

// Supporting types

#[derive(Debug, Clone, Deserialize)]
pub struct GenreEntry {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductionCompany {
    pub id: u32,
    pub name: String,
}
