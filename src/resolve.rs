//! Rating and text resolution.
//!
//! Everything here is a pure read over an already-loaded card. Absence is
//! represented as an empty string or `None`, never a placeholder and never an
//! error; the presentation layer decides what to render for "nothing".

use crate::authors::{self, AUTHOR_CATALOG, COLOR_GRAY};
use crate::core::{Card, Locale, StatBlock};

fn non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

/// The author's tier label for a card, or `""` when the author has no tier
pub fn resolve_tier<'a>(card: &'a Card, author: &str) -> &'a str {
    match card.rating(author) {
        Some(rating) if non_blank(&rating.tier_label) => &rating.tier_label,
        _ => "",
    }
}

/// The author's numeric score for a card, when one exists
pub fn resolve_score(card: &Card, author: &str) -> Option<f64> {
    card.rating(author).and_then(|r| r.score)
}

/// The author's comment for a card in the best available locale.
///
/// Precedence, first non-blank wins:
/// 1. the legacy locale-agnostic comment (wins regardless of requested locale)
/// 2. the requested locale
/// 3. the card's default locale
/// 4. any locale, in natural key order
/// 5. empty string
pub fn resolve_desc<'a>(card: &'a Card, author: &str, locale: Locale) -> &'a str {
    let Some(rating) = card.rating(author) else {
        return "";
    };

    if non_blank(&rating.default_desc) {
        return &rating.default_desc;
    }

    if let Some(desc) = rating.locale_descs.get(&locale) {
        if non_blank(desc) {
            return desc;
        }
    }

    if let Some(desc) = rating.locale_descs.get(&card.default_locale) {
        if non_blank(desc) {
            return desc;
        }
    }

    rating
        .locale_descs
        .values()
        .find(|desc| non_blank(desc))
        .map(String::as_str)
        .unwrap_or("")
}

/// Card-level locale text: requested locale, else the card's default locale,
/// else empty. No author override applies here.
fn locale_text(map: &std::collections::BTreeMap<Locale, String>, locale: Locale, default_locale: Locale) -> &str {
    if let Some(text) = map.get(&locale) {
        if non_blank(text) {
            return text;
        }
    }
    match map.get(&default_locale) {
        Some(text) if non_blank(text) => text,
        _ => "",
    }
}

/// The card's display name for a locale
pub fn card_name(card: &Card, locale: Locale) -> &str {
    locale_text(&card.names, locale, card.default_locale)
}

/// The card's rules text for a locale
pub fn card_text(card: &Card, locale: Locale) -> &str {
    locale_text(&card.effect_text, locale, card.default_locale)
}

/// The single accent color summarizing a card's rating status.
///
/// Authors are consulted in catalog display order; the first one with a
/// non-blank tier label supplies the color through its own scheme. Cards no
/// author has tiered get the neutral gray.
pub fn primary_accent_color(card: &Card) -> &'static str {
    for config in AUTHOR_CATALOG {
        let tier = resolve_tier(card, config.id);
        if non_blank(tier) {
            return config.scheme.color(tier);
        }
    }
    COLOR_GRAY
}

/// The stats block to render, preferring the primary dataset
pub fn stats_block(card: &Card) -> Option<&StatBlock> {
    card.stats.as_ref().and_then(|s| s.resolved())
}

/// Badge color for one author's rating of a card: tier label when present,
/// else the numeric score, else gray
pub fn rating_color(card: &Card, author: &str) -> &'static str {
    let tier = resolve_tier(card, author);
    if non_blank(tier) {
        return authors::tier_color(tier, author);
    }
    match resolve_score(card, author) {
        Some(score) => authors::score_color(score),
        None => COLOR_GRAY,
    }
}
