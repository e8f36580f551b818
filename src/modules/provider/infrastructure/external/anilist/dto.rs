use serde::Deserialize;

// GraphQL envelope

#[derive(Debug, Clone, Deserialize)]
pub struct AniListResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaData {
    #[serde(rename = "Media")]
    pub media: Option<Media>,
}

// Media document

#[derive(Debug, Clone, Deserialize)]
pub struct Media {
    pub id: u64,
    #[serde(rename = "idMal", default)]
    pub id_mal: Option<u64>,
    #[serde(default)]
    pub title: Option<MediaTitle>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>, // "FINISHED", "RELEASING", "NOT_YET_RELEASED", "CANCELLED"
    #[serde(rename = "startDate", default)]
    pub start_date: Option<FuzzyDate>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<FuzzyDate>,
    #[serde(rename = "countryOfOrigin", default)]
    pub country_of_origin: Option<String>,
    /// Episode or movie runtime, in minutes.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub trailer: Option<MediaTrailer>,
    #[serde(rename = "coverImage", default)]
    pub cover_image: Option<CoverImage>,
    #[serde(rename = "bannerImage", default)]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,
    #[serde(rename = "averageScore", default)]
    pub average_score: Option<u32>,
    #[serde(default)]
    pub tags: Option<Vec<MediaTag>>,
    #[serde(default)]
    pub studios: Option<StudioConnection>,
    #[serde(rename = "siteUrl", default)]
    pub site_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaTitle {
    #[serde(default)]
    pub romaji: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub native: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FuzzyDate {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub day: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaTrailer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub site: Option<String>, // "youtube" or "dailymotion"
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoverImage {
    #[serde(rename = "extraLarge", default)]
    pub extra_large: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaTag {
    pub name: String,
    #[serde(rename = "isMediaSpoiler", default)]
    pub is_media_spoiler: bool,
    #[serde(rename = "isGeneralSpoiler", default)]
    pub is_general_spoiler: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudioConnection {
    #[serde(default)]
    pub nodes: Option<Vec<StudioNode>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudioNode {
    pub id: u64,
    pub name: String,
    #[serde(rename = "siteUrl", default)]
    pub site_url: Option<String>,
}
