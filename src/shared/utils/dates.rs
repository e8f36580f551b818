use chrono::NaiveDate;

/// Format a date as ISO 8601 for external-facing records.
///
/// Records keep `NaiveDate` internally; the catalog layer serializing them
/// for its API goes through this.
pub fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

/// Parse a date as reported by metadata backends.
///
/// Backends are inconsistent: some return a full `YYYY-MM-DD`, some only a
/// year. A bare year is pinned to January 1st so it still orders correctly.
/// Empty or unparsable values yield `None` rather than an error, since a
/// missing air date is normal for unreleased or obscure titles.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    raw.parse::<i32>()
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_date() {
        assert_eq!(
            parse_date("2016-04-03"),
            NaiveDate::from_ymd_opt(2016, 4, 3)
        );
    }

    #[test]
    fn test_parse_year_only() {
        assert_eq!(parse_date("2016"), NaiveDate::from_ymd_opt(2016, 1, 1));
    }

    #[test]
    fn test_parse_empty_and_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_format_roundtrip() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31);
        assert_eq!(format_date(date), Some("1999-12-31".to_string()));
        assert_eq!(format_date(None), None);
    }
}
