use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::locale::Locale;

/// Deserialize a rating score from a number or a numeric string (legacy
/// datasets stored jpwiki scores as strings)
fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScoreValue {
        Num(f64),
        String(String),
        Null,
    }

    match Option::<ScoreValue>::deserialize(deserializer)? {
        Some(ScoreValue::Num(n)) => Ok(Some(n)),
        Some(ScoreValue::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| Error::custom(format!("Invalid score string: {}", s)))
            }
        }
        Some(ScoreValue::Null) | None => Ok(None),
    }
}

/// One author's verdict on a card: a categorical tier and/or a numeric score,
/// plus comment text in one or more locales
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Author identifier (`baitu`, `mark`, `chen`, `jpwiki`, ...)
    #[serde(default)]
    pub author: String,

    /// Categorical verdict in the author's own scheme (`T2`, `B`, ...);
    /// empty when the author only supplies a score
    #[serde(rename = "tier", default)]
    pub tier_label: String,

    /// Numeric rating, author-scheme-specific (e.g. 0-10)
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: Option<f64>,

    /// Legacy single-locale comment; when non-blank it wins over the locale
    /// map regardless of the requested locale
    #[serde(rename = "desc", default)]
    pub default_desc: String,

    /// Locale-specific comments
    #[serde(rename = "localeDescs", default)]
    pub locale_descs: BTreeMap<Locale, String>,
}

impl Rating {
    /// True if this rating carries any renderable content at all
    pub fn has_content(&self) -> bool {
        !self.tier_label.trim().is_empty()
            || self.score.is_some()
            || self.has_comment()
    }

    /// True if this rating carries comment text in any locale
    pub fn has_comment(&self) -> bool {
        !self.default_desc.trim().is_empty()
            || self.locale_descs.values().any(|d| !d.trim().is_empty())
    }
}

/// Play statistics block: up to four numeric fields, all optional
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct StatBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pwr: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adp: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apr: Option<f64>,

    #[serde(rename = "drawPlayRate", default, skip_serializing_if = "Option::is_none")]
    pub draw_play_rate: Option<f64>,
}

/// Card statistics from two alternative datasets; `primary` wins when both
/// are present
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct CardStats {
    #[serde(rename = "default", alias = "primary", default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<StatBlock>,

    #[serde(rename = "nb", alias = "fallback", default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<StatBlock>,
}

impl CardStats {
    /// The block resolution always reads from: `primary` over `fallback`
    pub fn resolved(&self) -> Option<&StatBlock> {
        self.primary.as_ref().or(self.fallback.as_ref())
    }
}

/// A static reference-data record describing one game card's identity, text
/// and community ratings. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    /// Stable external numbering code; unique when non-blank, may be blank
    #[serde(rename = "no", default)]
    pub id: String,

    /// Ultimate fallback locale for this card's text
    #[serde(rename = "defaultLang")]
    pub default_locale: Locale,

    /// Display name per locale
    #[serde(rename = "localeNames", default)]
    pub names: BTreeMap<Locale, String>,

    /// Rules text per locale
    #[serde(rename = "localeDescs", default)]
    pub effect_text: BTreeMap<Locale, String>,

    /// Ratings, at most one per author
    #[serde(rename = "tiers", default)]
    pub ratings: Vec<Rating>,

    /// Play statistics, when a stats provider covers this card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<CardStats>,
}

impl Card {
    /// Look up this card's rating by author id; legacy aliases match their
    /// canonical author on both sides
    pub fn rating(&self, author: &str) -> Option<&Rating> {
        let wanted = crate::authors::canonical_author(author);
        self.ratings
            .iter()
            .find(|r| crate::authors::canonical_author(&r.author) == wanted)
    }

    /// Display name in the card's own default locale (for logging)
    pub fn display_name(&self) -> &str {
        self.names
            .get(&self.default_locale)
            .map(String::as_str)
            .unwrap_or(self.id.as_str())
    }

    /// True if any known author rated this card
    pub fn is_rated(&self) -> bool {
        self.ratings.iter().any(|r| r.has_content())
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
