//! GraphQL documents for the AniList API.

/// Fields shared by every media lookup.
const MEDIA_FIELDS: &str = r#"
    id
    idMal
    title {
      romaji
      english
      native
    }
    description(asHtml: false)
    status
    startDate {
      year
      month
      day
    }
    endDate {
      year
      month
      day
    }
    countryOfOrigin
    duration
    trailer {
      id
      site
    }
    coverImage {
      extraLarge
    }
    bannerImage
    genres
    synonyms
    averageScore
    tags {
      name
      isMediaSpoiler
      isGeneralSpoiler
    }
    studios(isMain: true) {
      nodes {
        id
        name
        siteUrl
      }
    }
    siteUrl
"#;

pub struct AniListQueries;

impl AniListQueries {
    /// Look up an anime movie by title (and optionally its release year).
    pub fn search_movie() -> String {
        format!(
            r#"query ($search: String, $seasonYear: Int) {{
  Media(search: $search, seasonYear: $seasonYear, type: ANIME, format: MOVIE) {{{}}}
}}"#,
            MEDIA_FIELDS
        )
    }

    /// Look up a series (anything that is not a movie) by title.
    pub fn search_show() -> String {
        format!(
            r#"query ($search: String) {{
  Media(search: $search, type: ANIME, format_not: MOVIE) {{{}}}
}}"#,
            MEDIA_FIELDS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_request_the_shared_fields() {
        for query in [AniListQueries::search_movie(), AniListQueries::search_show()] {
            assert!(query.contains("siteUrl"));
            assert!(query.contains("averageScore"));
            assert!(query.contains("type: ANIME"));
        }
        assert!(AniListQueries::search_movie().contains("format: MOVIE"));
        assert!(AniListQueries::search_show().contains("format_not: MOVIE"));
    }
}
