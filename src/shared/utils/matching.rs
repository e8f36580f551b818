use strsim::jaro_winkler;

/// Normalize a title before similarity comparison.
///
/// Lowercases, strips punctuation and collapses whitespace so that
/// "Cowboy Bebop: The Movie" and "cowboy bebop the movie" compare equal.
pub fn normalize_title(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_space = true;

    for c in raw.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
            last_was_space = false;
        } else if !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }

    out.trim_end().to_string()
}

/// Pick the search result whose title is closest to the query.
///
/// Jaro-Winkler works well on short name-like strings and favors matching
/// prefixes, which suits series titles. Ties keep the backend's own ranking
/// (first occurrence wins). Returns `None` only for an empty candidate list.
pub fn best_match<'a, T>(
    query: &str,
    candidates: &'a [T],
    title_of: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    let normalized_query = normalize_title(query);
    let mut best: Option<(&T, f64)> = None;

    for candidate in candidates {
        let score = jaro_winkler(&normalized_query, &normalize_title(title_of(candidate)));
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title() {
        assert_eq!(
            normalize_title("Cowboy Bebop: The Movie!"),
            "cowboy bebop the movie"
        );
        assert_eq!(normalize_title("  Steins;Gate  "), "steins gate");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn test_best_match_prefers_exact() {
        let candidates = vec![
            "Cowboy Bebop: The Movie".to_string(),
            "Cowboy Bebop".to_string(),
        ];
        let found = best_match("cowboy bebop", &candidates, |c| c.as_str());
        assert_eq!(found, Some(&"Cowboy Bebop".to_string()));
    }

    #[test]
    fn test_best_match_empty() {
        let candidates: Vec<String> = vec![];
        assert_eq!(best_match("anything", &candidates, |c| c.as_str()), None);
    }

    #[test]
    fn test_best_match_keeps_backend_order_on_tie() {
        let candidates = vec!["Same Title".to_string(), "Same Title".to_string()];
        let found = best_match("Same Title", &candidates, |c| c.as_str()).unwrap();
        assert!(std::ptr::eq(found, &candidates[0]));
    }
}
