//! Input adapter for the legacy flat card shape.
//!
//! Early datasets stored one column per author (`baituTier`, `enDesc`, ...)
//! instead of the normalized `tiers` array. The adapter maps that shape onto
//! [`Card`] at load time so the resolver only ever sees normalized records.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::authors::{AUTHOR_BAITU, AUTHOR_CHEN, AUTHOR_JPWIKI, AUTHOR_MARK};
use crate::core::card::{Card, CardStats, Rating};
use crate::core::locale::Locale;

/// Flat per-author card record, as found in first-generation datasets
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LegacyCard {
    #[serde(default)]
    pub no: String,

    #[serde(rename = "cnName", default)]
    pub cn_name: String,

    #[serde(rename = "enName", default)]
    pub en_name: String,

    #[serde(rename = "jpName", default)]
    pub jp_name: String,

    /// Card rules text; some revisions called this `effect`
    #[serde(default, alias = "effect")]
    pub desc: String,

    #[serde(rename = "baituTier", default)]
    pub baitu_tier: String,

    #[serde(rename = "baituDesc", default)]
    pub baitu_desc: String,

    #[serde(rename = "enTier", default)]
    pub en_tier: String,

    #[serde(rename = "enDesc", default)]
    pub en_desc: String,

    #[serde(rename = "enDesc_trans2zh", default)]
    pub en_desc_trans2zh: String,

    #[serde(rename = "chenTier", default)]
    pub chen_tier: String,

    #[serde(rename = "chenDesc", default)]
    pub chen_desc: String,

    #[serde(rename = "jpwiki_score", default)]
    pub jpwiki_score: String,

    #[serde(rename = "comment_jpwiki_cn", default)]
    pub comment_jpwiki_cn: String,

    #[serde(default)]
    pub stats: Option<CardStats>,
}

/// Letter tiers carry an implied 0-5 score: A->5 ... E->1, F and unknown->0
fn letter_tier_score(tier: &str) -> Option<f64> {
    let score = match tier.trim().to_ascii_uppercase().as_str() {
        "A" => 5.0,
        "B" => 4.0,
        "C" => 3.0,
        "D" => 2.0,
        "E" => 1.0,
        _ => 0.0,
    };
    (score > 0.0).then_some(score)
}

impl From<LegacyCard> for Card {
    fn from(v1: LegacyCard) -> Self {
        let mut names = BTreeMap::new();
        if !v1.en_name.trim().is_empty() {
            names.insert(Locale::En, v1.en_name);
        }
        if !v1.cn_name.trim().is_empty() {
            names.insert(Locale::Zh, v1.cn_name);
        }
        if !v1.jp_name.trim().is_empty() {
            names.insert(Locale::Jp, v1.jp_name);
        }

        let mut effect_text = BTreeMap::new();
        if !v1.desc.trim().is_empty() {
            effect_text.insert(Locale::En, v1.desc);
        }

        let mut ratings = Vec::new();

        let baitu_tier = v1.baitu_tier.trim();
        let baitu_desc = v1.baitu_desc.trim();
        if !baitu_tier.is_empty() || !baitu_desc.is_empty() {
            let mut locale_descs = BTreeMap::new();
            if !baitu_desc.is_empty() {
                locale_descs.insert(Locale::Zh, baitu_desc.to_string());
            }
            ratings.push(Rating {
                author: AUTHOR_BAITU.to_string(),
                tier_label: baitu_tier.to_string(),
                score: None,
                default_desc: baitu_desc.to_string(),
                locale_descs,
            });
        }

        let en_tier = v1.en_tier.trim();
        let en_desc = v1.en_desc.trim();
        let en_desc_zh = v1.en_desc_trans2zh.trim();
        if !en_tier.is_empty() || !en_desc.is_empty() {
            let mut locale_descs = BTreeMap::new();
            if !en_desc.is_empty() {
                locale_descs.insert(Locale::En, en_desc.to_string());
                let zh = if en_desc_zh.is_empty() { en_desc } else { en_desc_zh };
                locale_descs.insert(Locale::Zh, zh.to_string());
            }
            ratings.push(Rating {
                author: AUTHOR_MARK.to_string(),
                tier_label: en_tier.to_string(),
                score: letter_tier_score(en_tier),
                default_desc: en_desc.to_string(),
                locale_descs,
            });
        }

        let chen_tier = v1.chen_tier.trim();
        let chen_desc = v1.chen_desc.trim();
        if !chen_tier.is_empty() || !chen_desc.is_empty() {
            let mut locale_descs = BTreeMap::new();
            if !chen_desc.is_empty() {
                locale_descs.insert(Locale::Zh, chen_desc.to_string());
            }
            ratings.push(Rating {
                author: AUTHOR_CHEN.to_string(),
                tier_label: chen_tier.to_string(),
                score: None,
                default_desc: chen_desc.to_string(),
                locale_descs,
            });
        }

        let jpwiki_score = v1.jpwiki_score.trim();
        let jpwiki_comment = v1.comment_jpwiki_cn.trim();
        if !jpwiki_score.is_empty() || !jpwiki_comment.is_empty() {
            let mut locale_descs = BTreeMap::new();
            if !jpwiki_comment.is_empty() {
                locale_descs.insert(Locale::Zh, jpwiki_comment.to_string());
            }
            ratings.push(Rating {
                author: AUTHOR_JPWIKI.to_string(),
                // jpwiki carries a score only, never a tier label
                tier_label: String::new(),
                score: jpwiki_score.parse::<f64>().ok(),
                default_desc: jpwiki_comment.to_string(),
                locale_descs,
            });
        }

        Card {
            id: v1.no,
            default_locale: Locale::En,
            names,
            effect_text,
            ratings,
            stats: v1.stats,
        }
    }
}
