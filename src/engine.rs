use chrono::{DateTime, Utc};

use crate::core::{Card, CardView, Locale};
use crate::error::Result;
use crate::matcher::{self, CardFragment};
use crate::recommend;
use crate::search;
use crate::source::CardSource;
use crate::store::CardStore;

/// Main card resolution engine.
///
/// Owns the immutable store and exposes the synchronous core operations.
/// Loading is explicit: an engine only exists once its dataset decoded, so
/// there is no half-loaded state to guard against (the module-level "loaded"
/// flag of earlier revisions is gone).
pub struct TutorEngine {
    store: CardStore,
    loaded_at: DateTime<Utc>,
}

/// Engine metadata for health/stats endpoints
#[derive(Debug, Clone)]
pub struct EngineStats {
    pub cards: usize,
    pub rated_cards: usize,
    pub loaded_at: DateTime<Utc>,
}

impl TutorEngine {
    /// Load the dataset from a source and build the engine
    pub async fn load(source: &dyn CardSource) -> Result<Self> {
        let bytes = source.fetch().await?;
        let store = CardStore::from_slice(&bytes)?;

        tracing::info!(
            "loaded {} cards from {} source {}",
            store.len(),
            source.name(),
            source.location()
        );

        Ok(Self::from_store(store))
    }

    /// Build the engine around an already-decoded store
    pub fn from_store(store: CardStore) -> Self {
        Self {
            store,
            loaded_at: Utc::now(),
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// Identity-match a page fragment against the store
    pub fn find_card(&self, fragment: &CardFragment) -> Option<&Card> {
        matcher::find_card(&self.store, fragment)
    }

    /// Identity-match and resolve for a locale in one step
    pub fn lookup(&self, fragment: &CardFragment, locale: Locale) -> Option<CardView> {
        self.find_card(fragment)
            .map(|card| CardView::build(card, locale))
    }

    /// Substring search in store order, capped at `max_results`
    pub fn search(&self, query: &str, max_results: usize) -> Vec<&Card> {
        search::search_cards(&self.store, query, max_results)
    }

    /// Search and resolve each hit for a locale
    pub fn search_views(&self, query: &str, max_results: usize, locale: Locale) -> Vec<CardView> {
        self.search(query, max_results)
            .into_iter()
            .map(|card| CardView::build(card, locale))
            .collect()
    }

    /// Random showcase cards for the search panel's empty state
    pub fn recommend(&self, count: usize) -> Vec<&Card> {
        recommend::recommend_cards(&self.store, count)
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            cards: self.store.len(),
            rated_cards: self.store.iter().filter(|c| c.is_rated()).count(),
            loaded_at: self.loaded_at,
        }
    }
}
