use std::collections::HashMap;

/// Image categories carried by a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Posters,
    Thumbnails,
    Logos,
}

/// Implemented by translation types that carry localized artwork.
pub trait HasImages {
    fn images(&self, kind: ImageKind) -> &[String];
}

/// Pick the best image of a given kind across a translations map.
///
/// Providers return every localized image they know; the catalog layer uses
/// this to settle on the single poster or thumbnail it stores per record.
///
/// Preference order: the record's original language, then the caller's
/// language preferences (most-preferred first), then any translation at all.
pub fn select_image<'a, T: HasImages>(
    original_language: Option<&str>,
    preferences: &[String],
    translations: &'a HashMap<String, T>,
    kind: ImageKind,
) -> Option<&'a String> {
    let from = |lang: &str| {
        translations
            .get(lang)
            .and_then(|t| t.images(kind).first())
    };

    if let Some(image) = original_language.and_then(from) {
        return Some(image);
    }

    for lang in preferences {
        if let Some(image) = from(lang) {
            return Some(image);
        }
    }

    translations.values().find_map(|t| t.images(kind).first())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Translation {
        posters: Vec<String>,
    }

    impl HasImages for Translation {
        fn images(&self, kind: ImageKind) -> &[String] {
            match kind {
                ImageKind::Posters => &self.posters,
                _ => &[],
            }
        }
    }

    fn translations(entries: &[(&str, &[&str])]) -> HashMap<String, Translation> {
        entries
            .iter()
            .map(|(lang, posters)| {
                (
                    lang.to_string(),
                    Translation {
                        posters: posters.iter().map(|p| p.to_string()).collect(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_original_language_wins() {
        let map = translations(&[("en", &["en.jpg"]), ("ja", &["ja.jpg"])]);
        let image = select_image(
            Some("ja"),
            &["en".to_string()],
            &map,
            ImageKind::Posters,
        );
        assert_eq!(image, Some(&"ja.jpg".to_string()));
    }

    #[test]
    fn test_preference_order() {
        let map = translations(&[("en", &["en.jpg"]), ("fr", &["fr.jpg"])]);
        let image = select_image(
            None,
            &["fr".to_string(), "en".to_string()],
            &map,
            ImageKind::Posters,
        );
        assert_eq!(image, Some(&"fr.jpg".to_string()));
    }

    #[test]
    fn test_falls_back_to_any_translation() {
        let map = translations(&[("de", &["de.jpg"])]);
        let image = select_image(None, &["en".to_string()], &map, ImageKind::Posters);
        assert_eq!(image, Some(&"de.jpg".to_string()));
    }

    #[test]
    fn test_empty_map() {
        let map: HashMap<String, Translation> = HashMap::new();
        assert_eq!(
            select_image(Some("en"), &[], &map, ImageKind::Posters),
            None
        );
    }
}
