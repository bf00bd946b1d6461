use serde::{Deserialize, Serialize};

/// Language variants the card dataset provides text for.
///
/// The ordering (`en` < `zh` < `jp`) is the natural key order used when a
/// description has to fall back to "any available locale".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Zh,
    Jp,
}

impl Locale {
    /// All supported locales, in natural key order
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Zh, Locale::Jp];

    /// Locale code as it appears in the dataset
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Jp => "jp",
        }
    }

    /// Human-readable language name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
            Locale::Jp => "日本語",
        }
    }

    /// Normalize a host-environment language tag to a supported locale.
    ///
    /// This is the single place where tags like `zh-CN` or `ja-JP` collapse to
    /// a dataset locale. Unknown tags map to the default language.
    pub fn from_tag(tag: &str) -> Locale {
        let tag = tag.trim().to_ascii_lowercase();
        if tag == "zh" || tag.starts_with("zh-") {
            Locale::Zh
        } else if tag == "jp" || tag == "ja" || tag.starts_with("ja-") {
            Locale::Jp
        } else {
            DEFAULT_LOCALE
        }
    }

    /// UI fallback language, for display-language negotiation in frontends.
    ///
    /// Distinct from the resolver's per-card default-locale fallback: this only
    /// decides which UI language to offer when a locale has no translation of
    /// its own (jp UI strings fall back to en).
    pub fn ui_fallback(&self) -> Option<Locale> {
        match self {
            Locale::Jp => Some(Locale::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Default language when the host tag is unknown
pub const DEFAULT_LOCALE: Locale = Locale::En;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_normalization() {
        assert_eq!(Locale::from_tag("zh"), Locale::Zh);
        assert_eq!(Locale::from_tag("zh-CN"), Locale::Zh);
        assert_eq!(Locale::from_tag("zh-TW"), Locale::Zh);
        assert_eq!(Locale::from_tag("ja"), Locale::Jp);
        assert_eq!(Locale::from_tag("ja-JP"), Locale::Jp);
        assert_eq!(Locale::from_tag("jp"), Locale::Jp);
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag("fr"), DEFAULT_LOCALE);
        assert_eq!(Locale::from_tag(""), DEFAULT_LOCALE);
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&Locale::Zh).unwrap();
        assert_eq!(json, "\"zh\"");
        let back: Locale = serde_json::from_str("\"jp\"").unwrap();
        assert_eq!(back, Locale::Jp);
    }

    #[test]
    fn test_natural_key_order() {
        let mut locales = vec![Locale::Jp, Locale::En, Locale::Zh];
        locales.sort();
        assert_eq!(locales, vec![Locale::En, Locale::Zh, Locale::Jp]);
    }

    #[test]
    fn test_ui_fallback() {
        assert_eq!(Locale::Jp.ui_fallback(), Some(Locale::En));
        assert_eq!(Locale::En.ui_fallback(), None);
        assert_eq!(Locale::Zh.ui_fallback(), None);
    }
}
