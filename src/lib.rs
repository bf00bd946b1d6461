//! # Agricola Tutor Engine
//!
//! Card tier resolution and search engine for the Agricola Tutor overlay:
//! - Immutable card store loaded from the bundled/published JSON dataset
//!   (normalized and legacy flat shapes)
//! - Deterministic card-identity matching (numbering code, then exact and
//!   whitespace-insensitive names)
//! - Multi-author, multi-locale tier/score/comment resolution with table-driven
//!   badge colors
//! - Substring search in store order with early exit
//! - Multiple interfaces: Rust library, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use agricola_tutor_engine::{CardFragment, FileSource, Locale, TutorEngine};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let source = FileSource::new("cards.json");
//!     let engine = TutorEngine::load(&source).await?;
//!
//!     let fragment = CardFragment::from_name("黏土坑");
//!     if let Some(view) = engine.lookup(&fragment, Locale::Zh) {
//!         println!("{} -> {}", view.name, view.accent_color);
//!     }
//!     Ok(())
//! }
//! ```

pub mod authors;
pub mod core;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod recommend;
pub mod resolve;
pub mod search;
pub mod source;
pub mod stats;
pub mod store;

// Re-export primary types
pub use authors::{AuthorConfig, TierScheme, AUTHOR_CATALOG};
pub use crate::core::{Card, CardStats, CardView, Locale, Rating, RatingView, StatBlock, StatView};
pub use engine::{EngineStats, TutorEngine};
pub use error::{EngineError, Result};
pub use matcher::CardFragment;
pub use source::{CardSource, FileSource, HttpSource};
pub use store::CardStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
