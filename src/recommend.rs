//! Random card recommendations for the search panel's empty state.
//!
//! Cards that Chen233 both tiered and commented on make the best showcases,
//! so those are drawn first, then cards with only a tier, then anything else.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::authors::AUTHOR_CHEN;
use crate::core::Card;
use crate::store::CardStore;

fn has_chen_tier(card: &Card) -> bool {
    card.rating(AUTHOR_CHEN)
        .is_some_and(|r| !r.tier_label.trim().is_empty())
}

fn has_chen_comment(card: &Card) -> bool {
    card.rating(AUTHOR_CHEN).is_some_and(|r| r.has_comment())
}

/// Pick up to `count` random cards, preferring commented-and-tiered ones
pub fn recommend_cards<'a>(store: &'a CardStore, count: usize) -> Vec<&'a Card> {
    recommend_cards_with_rng(store, count, &mut rand::thread_rng())
}

/// Deterministic variant for callers that supply their own rng
pub fn recommend_cards_with_rng<'a, R: Rng + ?Sized>(
    store: &'a CardStore,
    count: usize,
    rng: &mut R,
) -> Vec<&'a Card> {
    if store.is_empty() || count == 0 {
        return Vec::new();
    }

    let mut with_comment: Vec<&Card> = Vec::new();
    let mut with_tier: Vec<&Card> = Vec::new();
    let mut rest: Vec<&Card> = Vec::new();

    for card in store {
        if has_chen_tier(card) && has_chen_comment(card) {
            with_comment.push(card);
        } else if has_chen_tier(card) {
            with_tier.push(card);
        } else {
            rest.push(card);
        }
    }

    let mut result = Vec::with_capacity(count.min(store.len()));
    for bucket in [&mut with_comment, &mut with_tier, &mut rest] {
        if result.len() >= count {
            break;
        }
        bucket.shuffle(rng);
        result.extend(bucket.iter().take(count - result.len()).copied());
    }

    result
}
