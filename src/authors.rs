//! Static author catalog.
//!
//! Every rating author is one table entry: display label, tier-color scheme,
//! default-visibility flag. New authors are added here, never as branches in
//! the resolver.

/// Canonical author ids
pub const AUTHOR_BAITU: &str = "baitu";
pub const AUTHOR_MARK: &str = "mark";
pub const AUTHOR_CHEN: &str = "chen";
pub const AUTHOR_JPWIKI: &str = "jpwiki";

/// Badge colors shared by every scheme
pub const COLOR_GREEN: &str = "#4caf50";
pub const COLOR_LIGHT_GREEN: &str = "#8bc34a";
pub const COLOR_LIME: &str = "#cddc39";
pub const COLOR_GOLD: &str = "#d4af37";
pub const COLOR_DARK_YELLOW: &str = "#f9a825";
pub const COLOR_ORANGE: &str = "#ff9800";
pub const COLOR_RED: &str = "#f44336";
pub const COLOR_GRAY: &str = "#9e9e9e";

/// How an author expresses verdicts, and how those map to badge colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierScheme {
    /// `T0`..`T4` tier codes
    TierCode,
    /// `A`..`F` letter grades
    LetterGrade,
    /// Numeric score on a 0-10 scale
    NumericScore,
}

impl TierScheme {
    /// Map a tier label to its badge color. Total: empty, `N/A` and
    /// unrecognized labels all resolve to gray.
    pub fn color(&self, tier: &str) -> &'static str {
        let trimmed = tier.trim();
        if trimmed.is_empty() || trimmed == "N/A" {
            return COLOR_GRAY;
        }

        match self {
            TierScheme::TierCode => match trimmed {
                "T0" | "T1" => COLOR_GREEN,
                "T2" => COLOR_GOLD,
                "T3" => COLOR_ORANGE,
                "T4" => COLOR_RED,
                _ => COLOR_GRAY,
            },
            TierScheme::LetterGrade => match trimmed.to_ascii_uppercase().as_str() {
                "A" => COLOR_GREEN,
                "B" => COLOR_LIGHT_GREEN,
                "C" => COLOR_LIME,
                "D" => COLOR_DARK_YELLOW,
                "E" => COLOR_ORANGE,
                "F" => COLOR_RED,
                _ => COLOR_GRAY,
            },
            TierScheme::NumericScore => match trimmed.parse::<f64>() {
                Ok(score) => score_color(score),
                Err(_) => COLOR_GRAY,
            },
        }
    }
}

/// One rating author: label, scheme, and whether the presentation layer
/// surfaces the rating without a "show more" disclosure
#[derive(Debug, Clone, Copy)]
pub struct AuthorConfig {
    pub id: &'static str,
    pub label: &'static str,
    pub scheme: TierScheme,
    pub shown_by_default: bool,
}

/// Known authors, in fixed display order. The order decides badge layout and
/// which author supplies the primary accent color.
pub const AUTHOR_CATALOG: &[AuthorConfig] = &[
    AuthorConfig {
        id: AUTHOR_BAITU,
        label: "白兔",
        scheme: TierScheme::TierCode,
        shown_by_default: true,
    },
    AuthorConfig {
        id: AUTHOR_MARK,
        label: "Mark Hartnady",
        scheme: TierScheme::LetterGrade,
        shown_by_default: true,
    },
    AuthorConfig {
        id: AUTHOR_CHEN,
        label: "Chen233",
        scheme: TierScheme::LetterGrade,
        shown_by_default: true,
    },
    AuthorConfig {
        id: AUTHOR_JPWIKI,
        label: "JP",
        scheme: TierScheme::NumericScore,
        shown_by_default: false,
    },
];

/// Resolve dataset author ids to catalog ids. Legacy datasets labelled Mark's
/// ratings `en`.
pub fn canonical_author(id: &str) -> &str {
    match id.trim() {
        "en" => AUTHOR_MARK,
        other => other,
    }
}

/// Catalog entry for an author id (accepts legacy aliases)
pub fn author_config(id: &str) -> Option<&'static AuthorConfig> {
    let canonical = canonical_author(id);
    AUTHOR_CATALOG.iter().find(|a| a.id == canonical)
}

/// Display label for an author id; unknown authors fall back to the id itself
pub fn author_label(id: &str) -> &str {
    match author_config(id) {
        Some(config) => config.label,
        None => canonical_author(id),
    }
}

/// Badge color for a `(tier, author)` pair. Pure and total: unknown authors
/// and unrecognized labels resolve to gray, never an error.
pub fn tier_color(tier: &str, author: &str) -> &'static str {
    match author_config(author) {
        Some(config) => config.scheme.color(tier),
        None => COLOR_GRAY,
    }
}

/// Color for a numeric score on the 0-10 scale
pub fn score_color(score: f64) -> &'static str {
    if score >= 8.0 {
        COLOR_GREEN
    } else if score >= 5.0 {
        COLOR_DARK_YELLOW
    } else {
        COLOR_RED
    }
}

/// Color for an average draft position value
pub fn adp_color(adp: f64) -> &'static str {
    if adp < 2.3 {
        COLOR_GREEN
    } else if adp <= 4.5 {
        COLOR_DARK_YELLOW
    } else {
        COLOR_RED
    }
}

/// Color for a draw/play rate value
pub fn draw_play_rate_color(rate: f64) -> &'static str {
    if rate > 0.9 {
        COLOR_GREEN
    } else if rate > 0.7 {
        COLOR_DARK_YELLOW
    } else {
        COLOR_RED
    }
}
