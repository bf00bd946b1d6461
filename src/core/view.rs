//! Fully-resolved card views for frontends.
//!
//! A view is the engine's output contract: every fallback chain already
//! applied, colors already resolved, so the presentation layer only renders.

use serde::Serialize;

use crate::authors::AUTHOR_CATALOG;
use crate::core::card::Card;
use crate::core::locale::Locale;
use crate::resolve;
use crate::stats::{format_stat, stat_color, StatKind};

/// One author's resolved rating of a card
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RatingView {
    pub author: String,
    pub author_label: String,
    /// Tier label, empty when the author only scores
    pub tier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub color: String,
    /// Comment in the requested locale (empty when the author left none)
    pub comment: String,
    /// False for authors collapsed behind a "show more" disclosure
    pub shown_by_default: bool,
}

/// One resolved stat field
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatView {
    pub label: String,
    pub value: f64,
    pub formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A card with all resolution applied for one locale
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub effect: String,
    pub accent_color: String,
    pub ratings: Vec<RatingView>,
    pub stats: Vec<StatView>,
}

impl CardView {
    /// Resolve a card for a locale. Authors appear in catalog display order;
    /// authors with no content for this card are omitted entirely.
    pub fn build(card: &Card, locale: Locale) -> Self {
        let ratings = AUTHOR_CATALOG
            .iter()
            .filter_map(|config| {
                let rating = card.rating(config.id)?;
                if !rating.has_content() {
                    return None;
                }
                Some(RatingView {
                    author: config.id.to_string(),
                    author_label: config.label.to_string(),
                    tier: resolve::resolve_tier(card, config.id).to_string(),
                    score: resolve::resolve_score(card, config.id),
                    color: resolve::rating_color(card, config.id).to_string(),
                    comment: resolve::resolve_desc(card, config.id, locale).to_string(),
                    shown_by_default: config.shown_by_default,
                })
            })
            .collect();

        let stats = resolve::stats_block(card)
            .map(|block| {
                StatKind::ALL
                    .iter()
                    .filter_map(|kind| {
                        let value = kind.value(block)?;
                        Some(StatView {
                            label: kind.config().label.to_string(),
                            value,
                            formatted: format_stat(*kind, value),
                            color: stat_color(*kind, value).map(str::to_string),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        CardView {
            id: card.id.clone(),
            name: resolve::card_name(card, locale).to_string(),
            effect: resolve::card_text(card, locale).to_string(),
            accent_color: resolve::primary_accent_color(card).to_string(),
            ratings,
            stats,
        }
    }

    /// Ratings the presentation layer surfaces without a disclosure
    pub fn default_visible_ratings(&self) -> impl Iterator<Item = &RatingView> {
        self.ratings.iter().filter(|r| r.shown_by_default)
    }
}
