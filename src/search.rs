//! Substring search over the card store.
//!
//! Deliberately simple for a dataset of a few hundred records: lower-cased
//! substring containment, store order, early exit at the caller's limit. No
//! stemming, no fuzzy matching, no relevance ranking. Results are always a
//! prefix of the full match set in store order.

use crate::core::Card;
use crate::store::CardStore;

/// Cards whose numbering code or any locale name contains `query`
/// (case-insensitive), capped at `max_results`
pub fn search_cards<'a>(store: &'a CardStore, query: &str, max_results: usize) -> Vec<&'a Card> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();

    for card in store {
        if results.len() >= max_results {
            break;
        }

        if !card.id.trim().is_empty() && card.id.to_lowercase().contains(&query) {
            results.push(card);
            continue;
        }

        if card
            .names
            .values()
            .any(|name| name.to_lowercase().contains(&query))
        {
            results.push(card);
        }
    }

    results
}
