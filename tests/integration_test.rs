use agricola_tutor_engine::{
    authors, resolve, search, CardFragment, CardStore, Locale, TutorEngine,
};

const DATASET: &str = r#"[
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
        "baituTier": "T1",
        "baituDesc": "前期强",
        "jpwiki_score": "8.5",
        "comment_jpwiki_cn": "很强"
    }
]"#;

#[test]
fn test_end_to_end_scenario() {
    // The canonical walk-through: match by zh name, resolve the tier, map the
    // color, then find the same card by search
    let store = CardStore::from_json_str(DATASET).unwrap();

    let card = agricola_tutor_engine::matcher::find_card(
        &store,
        &CardFragment::from_name("黏土"),
    )
    .unwrap();
    assert_eq!(card.id, "A1");

    assert_eq!(resolve::resolve_tier(card, "chen"), "B");
    assert_eq!(authors::tier_color("B", "chen"), authors::COLOR_LIGHT_GREEN);

    let results = search::search_cards(&store, "clay", 5);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "A1");

    // Case-insensitive
    let upper = search::search_cards(&store, "CLAY", 5);
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].id, "A1");
}

#[test]
fn test_numbering_round_trip_for_all_cards() {
    let store = CardStore::from_json_str(DATASET).unwrap();

    for card in &store {
        if card.id.trim().is_empty() {
            continue;
        }
        let matched =
            agricola_tutor_engine::matcher::find_card(&store, &CardFragment::from_numbering(card.id.clone()))
                .unwrap();
        assert_eq!(matched.id, card.id);
    }
}

#[test]
fn test_name_round_trip_with_whitespace_noise() {
    let store = CardStore::from_json_str(DATASET).unwrap();

    for card in &store {
        for name in card.names.values() {
            let exact = agricola_tutor_engine::matcher::find_card(
                &store,
                &CardFragment::from_name(name.clone()),
            );
            assert!(exact.is_some(), "exact match failed for {}", name);

            // Inject a space; whitespace-insensitive matching must still hit
            let mut chars = name.chars();
            let first = chars.next().unwrap();
            let noisy = format!("{} {}", first, chars.as_str());
            let fuzzy = agricola_tutor_engine::matcher::find_card(
                &store,
                &CardFragment::from_name(noisy.clone()),
            );
            assert!(fuzzy.is_some(), "whitespace-normalized match failed for {}", noisy);
        }
    }
}

#[test]
fn test_legacy_record_resolves_like_normalized() {
    let store = CardStore::from_json_str(DATASET).unwrap();
    let card = store.by_id("A2").unwrap();

    // Legacy flat columns arrived as normalized ratings
    assert_eq!(resolve::resolve_tier(card, "baitu"), "T1");
    assert_eq!(resolve::resolve_desc(card, "baitu", Locale::Zh), "前期强");
    assert_eq!(resolve::resolve_score(card, "jpwiki"), Some(8.5));
    assert_eq!(resolve::resolve_tier(card, "jpwiki"), "");

    // Accent comes from baitu (first in catalog order with a tier)
    assert_eq!(resolve::primary_accent_color(card), authors::COLOR_GREEN);
}

#[tokio::test]
async fn test_engine_over_file_source() {
    let dir = std::env::temp_dir();
    let path = dir.join("tutor-engine-integration-cards.json");
    tokio::fs::write(&path, DATASET).await.unwrap();

    let source = agricola_tutor_engine::FileSource::new(&path);
    let engine = TutorEngine::load(&source).await.unwrap();

    assert_eq!(engine.stats().cards, 2);
    assert_eq!(engine.stats().rated_cards, 2);

    let view = engine
        .lookup(&CardFragment::from_numbering("A2"), Locale::Zh)
        .unwrap();
    assert_eq!(view.name, "伐木工");
    let baitu = view.ratings.iter().find(|r| r.author == "baitu").unwrap();
    assert_eq!(baitu.comment, "前期强");

    tokio::fs::remove_file(&path).await.ok();
}

#[test]
fn test_search_empty_query_and_limits() {
    let store = CardStore::from_json_str(DATASET).unwrap();

    for n in [0, 1, 5, 100] {
        assert!(search::search_cards(&store, "", n).is_empty());
    }

    // Limit is a prefix of the full result set in store order
    let full = search::search_cards(&store, "a", store.len());
    let capped = search::search_cards(&store, "a", 1);
    assert_eq!(capped.len(), 1);
    assert_eq!(capped[0].id, full[0].id);
}
