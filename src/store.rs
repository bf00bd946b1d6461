use std::collections::HashSet;

use serde::Deserialize;

use crate::core::{Card, LegacyCard};
use crate::error::{EngineError, Result};

/// A dataset record in either supported shape. Normalized records are tried
/// first; anything else falls back to the legacy flat adapter.
#[derive(Deserialize)]
#[serde(untagged)]
enum CardRecord {
    Normalized(Card),
    Legacy(LegacyCard),
}

/// Immutable, ordered collection of cards, loaded once from a JSON array.
///
/// The store never mutates records after load; matching and search scan it in
/// load order, so results are deterministic for a fixed dataset.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    /// Decode a JSON array of card records (normalized or legacy shape)
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let records: Vec<CardRecord> = serde_json::from_slice(bytes)?;

        let cards = records
            .into_iter()
            .map(|record| match record {
                CardRecord::Normalized(card) => card,
                CardRecord::Legacy(legacy) => legacy.into(),
            })
            .collect();

        Self::from_cards(cards)
    }

    /// Decode from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Build a store from already-decoded cards, checking shape invariants
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        let mut seen_ids = HashSet::new();

        for (index, card) in cards.iter().enumerate() {
            let has_name = card.names.values().any(|n| !n.trim().is_empty());
            if card.id.trim().is_empty() && !has_name {
                return Err(EngineError::InvalidData(format!(
                    "card at index {} has neither a numbering code nor a name",
                    index
                )));
            }

            // Non-blank ids are unique per the dataset contract. A duplicate is
            // tolerated (first occurrence wins everywhere) but worth flagging.
            if !card.id.trim().is_empty() && !seen_ids.insert(card.id.clone()) {
                tracing::warn!("duplicate card id '{}' at index {}", card.id, index);
            }
        }

        tracing::debug!("card store built with {} cards", cards.len());

        Ok(Self { cards })
    }

    /// Cards in load order
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Cards in load order, as a slice
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// First card whose numbering code equals `id` exactly
    pub fn by_id(&self, id: &str) -> Option<&Card> {
        if id.trim().is_empty() {
            return None;
        }
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a CardStore {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Locale;

    const MIXED_DATASET: &str = r#"[
        {
            "no": "A1",
            "defaultLang": "en",
            "localeNames": {"en": "Clay", "zh": "黏土"},
            "localeDescs": {"en": "Take 1 clay."},
            "tiers": [{"author": "chen", "tier": "B"}]
        },
        {
            "no": "A2",
            "cnName": "伐木工",
            "enName": "Wood Cutter",
            "effect": "Gain 1 wood per round.",
            "baituTier": "T2",
            "baituDesc": "前期强"
        }
    ]"#;

    #[test]
    fn test_loads_mixed_shapes() {
        let store = CardStore::from_json_str(MIXED_DATASET).unwrap();
        assert_eq!(store.len(), 2);

        // Normalized record survives untouched
        let clay = store.by_id("A1").unwrap();
        assert_eq!(clay.names[&Locale::Zh], "黏土");

        // Legacy record is adapted to the normalized shape
        let cutter = store.by_id("A2").unwrap();
        assert_eq!(cutter.names[&Locale::Zh], "伐木工");
        assert_eq!(cutter.rating("baitu").unwrap().tier_label, "T2");
    }

    #[test]
    fn test_preserves_load_order() {
        let store = CardStore::from_json_str(MIXED_DATASET).unwrap();
        let ids: Vec<&str> = store.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "A2"]);
    }

    #[test]
    fn test_rejects_non_array_payload() {
        assert!(CardStore::from_json_str(r#"{"no": "A1"}"#).is_err());
        assert!(CardStore::from_json_str("not json").is_err());
    }

    #[test]
    fn test_rejects_identityless_record() {
        let err = CardStore::from_json_str(r#"[{"desc": "orphan text"}]"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidData(_)));
    }

    #[test]
    fn test_by_id_ignores_blank() {
        let store = CardStore::from_json_str(MIXED_DATASET).unwrap();
        assert!(store.by_id("").is_none());
        assert!(store.by_id("  ").is_none());
    }

    #[test]
    fn test_empty_array_is_valid() {
        let store = CardStore::from_json_str("[]").unwrap();
        assert!(store.is_empty());
    }
}
