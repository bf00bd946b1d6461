//! Card identity matching.
//!
//! The host page does not always render a stable identifier next to a card,
//! so matching runs in strict priority order: numbering code first, then
//! display names per locale, exact before whitespace-insensitive. No fuzzy
//! matching; visually similar card names must never cross-match.

use crate::core::{Card, Locale};
use crate::store::CardStore;

/// Identifying text extracted from a rendered card element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFragment {
    /// Numbering code, when the page renders one
    pub numbering: Option<String>,
    /// Display name, when a title element is present
    pub name: Option<String>,
}

impl CardFragment {
    pub fn from_numbering(numbering: impl Into<String>) -> Self {
        Self {
            numbering: Some(numbering.into()),
            name: None,
        }
    }

    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            numbering: None,
            name: Some(name.into()),
        }
    }
}

/// Name-matching locale priority: the native locale of the dataset first,
/// then the secondary, then the rest
const NAME_LOCALE_ORDER: [Locale; 3] = [Locale::Zh, Locale::En, Locale::Jp];

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Find the unique store record for a page fragment.
///
/// First rule that matches wins; later rules are not consulted. Returns `None`
/// when no rule matches; that is a normal outcome, not an error.
pub fn find_card<'a>(store: &'a CardStore, fragment: &CardFragment) -> Option<&'a Card> {
    if let Some(numbering) = fragment.numbering.as_deref() {
        if !numbering.trim().is_empty() {
            if let Some(card) = store.by_id(numbering) {
                return Some(card);
            }
        }
    }

    let name = fragment.name.as_deref()?;
    if name.trim().is_empty() {
        return None;
    }

    for locale in NAME_LOCALE_ORDER {
        // Exact equality first
        if let Some(card) = store
            .iter()
            .find(|c| c.names.get(&locale).is_some_and(|n| n.as_str() == name))
        {
            return Some(card);
        }

        // Then whitespace-insensitive equality, for localized rendering
        // differences (full-width spaces, spacing around punctuation)
        let normalized = strip_whitespace(name);
        if let Some(card) = store.iter().find(|c| {
            c.names
                .get(&locale)
                .is_some_and(|n| strip_whitespace(n) == normalized)
        }) {
            return Some(card);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CardStore {
        CardStore::from_json_str(
            r#"[
                {
                    "no": "A1",
                    "defaultLang": "en",
                    "localeNames": {"en": "Clay Pit", "zh": "黏 土 坑"},
                    "localeDescs": {"en": ""}
                },
                {
                    "no": "A2",
                    "defaultLang": "en",
                    "localeNames": {"en": "Clay Pit II", "zh": "黏土坑二号"},
                    "localeDescs": {"en": ""}
                },
                {
                    "no": "",
                    "defaultLang": "en",
                    "localeNames": {"en": "Nameless Numbering"},
                    "localeDescs": {"en": ""}
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_numbering_wins() {
        let store = store();
        let fragment = CardFragment {
            numbering: Some("A2".to_string()),
            name: Some("Clay Pit".to_string()),
        };
        // Numbering matched, so the (different) name is never consulted
        assert_eq!(find_card(&store, &fragment).unwrap().id, "A2");
    }

    #[test]
    fn test_numbering_is_case_sensitive_and_exact() {
        let store = store();
        assert!(find_card(&store, &CardFragment::from_numbering("a1")).is_none());
        assert!(find_card(&store, &CardFragment::from_numbering("A1 ")).is_none());
    }

    #[test]
    fn test_blank_numbering_falls_through_to_name() {
        let store = store();
        let fragment = CardFragment {
            numbering: Some("  ".to_string()),
            name: Some("Clay Pit".to_string()),
        };
        assert_eq!(find_card(&store, &fragment).unwrap().id, "A1");
    }

    #[test]
    fn test_exact_name_match_each_locale() {
        let store = store();
        assert_eq!(
            find_card(&store, &CardFragment::from_name("黏 土 坑")).unwrap().id,
            "A1"
        );
        assert_eq!(
            find_card(&store, &CardFragment::from_name("Clay Pit II")).unwrap().id,
            "A2"
        );
    }

    #[test]
    fn test_whitespace_insensitive_name_match() {
        let store = store();
        // Query without the spaces the dataset has
        assert_eq!(
            find_card(&store, &CardFragment::from_name("黏土坑")).unwrap().id,
            "A1"
        );
        // Query with extra spaces the dataset lacks
        assert_eq!(
            find_card(&store, &CardFragment::from_name("Clay  Pit II")).unwrap().id,
            "A2"
        );
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let store = store();
        assert!(find_card(&store, &CardFragment::from_name("Clay Pot")).is_none());
        assert!(find_card(&store, &CardFragment::from_name("Clay")).is_none());
    }

    #[test]
    fn test_empty_fragment_is_not_found() {
        let store = store();
        assert!(find_card(&store, &CardFragment::default()).is_none());
        assert!(find_card(&store, &CardFragment::from_name("   ")).is_none());
    }

    #[test]
    fn test_deterministic() {
        let store = store();
        let fragment = CardFragment::from_name("Clay Pit");
        let first = find_card(&store, &fragment).unwrap().id.clone();
        for _ in 0..10 {
            assert_eq!(find_card(&store, &fragment).unwrap().id, first);
        }
    }
}
