//! Fuzzy search tests against the fixture catalog.
//!
//! These tests verify the pool precedence of `SearchEngine::search`:
//! - Name substring matches beat everything else
//! - Fuzzy name matches catch typos
//! - Queries close to nothing return nothing

mod common;

use squadron_codex::search::partial_token_sort_ratio;
use squadron_codex::{SearchConfig, SearchEngine};

fn engine() -> SearchEngine {
    SearchEngine::new(common::index())
}

fn names(engine: &SearchEngine, query: &str) -> Vec<String> {
    engine
        .search_cards(query)
        .into_iter()
        .map(|card| card.name().to_string())
        .collect()
}

/// Test that a name substring match is the whole result.
#[test]
fn test_name_substring_wins() {
    let engine = engine();
    let hits = engine.search("wedge");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score, 100);
    assert_eq!(names(&engine, "wedge"), ["Wedge Antilles"]);
}

/// Test that composite-only perfect matches lose to name matches.
///
/// R2-D2's ability mentions Luke Skywalker, so its composite text scores
/// 100 for "luke"; only the pilot's name contains the query.
#[test]
fn test_name_match_beats_composite_match() {
    let index = common::index();
    let r2d2 = index.upgrade("r2d2").unwrap();
    let composite = &index.search_text(index_of(&index, r2d2.base.key.as_str())).unwrap().composite;
    assert_eq!(partial_token_sort_ratio("luke", composite), 100);

    let engine = SearchEngine::new(index.clone());
    let hits = engine.search("luke");
    assert_eq!(hits.len(), 1);
    assert_eq!(names(&engine, "luke"), ["Luke Skywalker"]);
}

fn index_of(index: &squadron_codex::CardIndex, key: &str) -> squadron_codex::CardId {
    index
        .iter()
        .find(|(_, card)| card.key() == key)
        .map(|(id, _)| id)
        .unwrap()
}

/// Test that hits tied on score keep search order: upgrades before pilots.
#[test]
fn test_ties_keep_search_order() {
    let engine = engine();
    assert_eq!(names(&engine, "r2"), ["R2-D2", "R2 Astromech"]);
}

/// Test that the result cap truncates the winning pool.
#[test]
fn test_result_cap() {
    let engine = engine().with_config(SearchConfig::default().with_max_results(1));
    assert_eq!(names(&engine, "r2"), ["R2-D2"]);
}

/// Test that a misspelled name still finds the card.
#[test]
fn test_typo_matches_by_name() {
    let engine = engine();
    let found = names(&engine, "outmanuver");
    assert_eq!(found.first().map(String::as_str), Some("Outmaneuver"));
    assert!(engine.search("outmanuver").iter().all(|hit| hit.score < 100));
}

/// Test that nonsense and empty queries find nothing.
#[test]
fn test_no_match_is_empty() {
    let engine = engine();
    assert!(engine.search("qqqqqqqq zzzzzzzz").is_empty());
    assert!(engine.search("").is_empty());
    assert!(engine.search("   ").is_empty());
}

/// Test that a stricter threshold drops fuzzy hits but keeps substring hits.
#[test]
fn test_threshold_only_gates_fuzzy_pools() {
    let engine = engine().with_config(SearchConfig::default().with_threshold(95));
    assert!(engine.search("outmanuver").is_empty());
    assert_eq!(names(&engine, "antilles"), ["Wedge Antilles"]);
}

/// Test that searching twice returns the same ranking.
#[test]
fn test_search_is_repeatable() {
    let engine = engine();
    for query in ["wedge", "r2", "x-wing", "hunted", "direct hit"] {
        assert_eq!(engine.search(query), engine.search(query));
    }
}
