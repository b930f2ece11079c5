//! Tiered fuzzy search over a `CardIndex`.
//!
//! Every card is scored twice: against its composite search text and
//! against its name. Hits are pooled by how they matched and the first
//! non-empty pool wins:
//!
//! 1. the query is a substring of the card's name text (score 100)
//! 2. the composite ratio is exactly 100
//! 3. the name ratio reaches the threshold
//! 4. the composite ratio reaches the threshold
//!
//! Within the winning pool hits are ordered by score, ties keeping
//! catalog search order.

use std::sync::Arc;

use super::fuzzy::{partial_ratio, token_sort};
use crate::cards::{Card, CardId, CardIndex};
use crate::core::config::SearchConfig;

/// One search result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub id: CardId,
    pub score: u8,
}

/// Token-sorted forms of one card's search text.
#[derive(Clone, Debug)]
struct Prepared {
    id: CardId,
    composite: String,
    display_name: String,
    name_text: String,
}

/// Fuzzy search over one catalog snapshot.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    index: Arc<CardIndex>,
    config: SearchConfig,
    prepared: Vec<Prepared>,
}

impl SearchEngine {
    /// Prepare search text for every card in the index.
    #[must_use]
    pub fn new(index: Arc<CardIndex>) -> Self {
        let prepared = index
            .search_entries()
            .map(|(id, card, text)| Prepared {
                id,
                composite: token_sort(&text.composite),
                display_name: token_sort(card.name()),
                name_text: text.name.clone(),
            })
            .collect();
        Self {
            index,
            config: SearchConfig::default(),
            prepared,
        }
    }

    /// Override threshold and result cap (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn index(&self) -> &Arc<CardIndex> {
        &self.index
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Rank cards against `query`. Empty queries match nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let sorted_query = token_sort(&query);
        let threshold = self.config.threshold;

        let mut name_exact = Vec::new();
        let mut composite_exact = Vec::new();
        let mut name_fuzzy = Vec::new();
        let mut composite_fuzzy = Vec::new();

        for entry in &self.prepared {
            let ratio = partial_ratio(&sorted_query, &entry.composite);
            if ratio >= threshold {
                let hit = SearchHit {
                    id: entry.id,
                    score: ratio,
                };
                if ratio == 100 {
                    composite_exact.push(hit);
                }
                composite_fuzzy.push(hit);
            }

            if entry.name_text.contains(&query) {
                name_exact.push(SearchHit {
                    id: entry.id,
                    score: 100,
                });
            } else {
                let ratio = partial_ratio(&sorted_query, &entry.display_name);
                if ratio >= threshold {
                    name_fuzzy.push(SearchHit {
                        id: entry.id,
                        score: ratio,
                    });
                }
            }
        }

        let mut hits = [name_exact, composite_exact, name_fuzzy, composite_fuzzy]
            .into_iter()
            .find(|pool| !pool.is_empty())
            .unwrap_or_default();
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(self.config.max_results);
        hits
    }

    /// `search`, resolved to cards.
    #[must_use]
    pub fn search_cards(&self, query: &str) -> Vec<&Card> {
        self.search(query)
            .into_iter()
            .filter_map(|hit| self.index.get(hit.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::manifest::{RawCatalog, RawCondition};

    fn engine_with(names: &[(&str, &str)]) -> SearchEngine {
        let raw = RawCatalog {
            conditions: names
                .iter()
                .map(|(xws, name)| RawCondition {
                    xws: (*xws).into(),
                    name: (*name).into(),
                    ..RawCondition::default()
                })
                .collect(),
            ..RawCatalog::default()
        };
        SearchEngine::new(Arc::new(CardIndex::build(raw).unwrap()))
    }

    #[test]
    fn test_empty_query() {
        let engine = engine_with(&[("hunted", "Hunted")]);
        assert!(engine.search("").is_empty());
        assert!(engine.search("   ").is_empty());
    }

    #[test]
    fn test_substring_match() {
        let engine = engine_with(&[("hunted", "Hunted"), ("rattled", "Rattled")]);
        let hits = engine.search("HUNT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 100);
        assert_eq!(engine.search_cards("hunt")[0].name(), "Hunted");
    }

    #[test]
    fn test_cap_applies() {
        let names: Vec<(String, String)> = (0..15)
            .map(|i| (format!("mark{i}"), format!("Mark {i}")))
            .collect();
        let refs: Vec<(&str, &str)> = names.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
        let searcher = engine_with(&refs);
        assert_eq!(searcher.search("mark").len(), 10);
        let searcher = searcher.with_config(SearchConfig::default().with_max_results(3));
        assert_eq!(searcher.search("mark").len(), 3);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let engine = engine_with(&[("a", "Focus Lock"), ("b", "Focus Fire")]);
        let names: Vec<&str> = engine.search_cards("focus").iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Focus Lock", "Focus Fire"]);
    }

    #[test]
    fn test_fuzzy_name_match() {
        let engine = engine_with(&[("hunted", "Hunted"), ("rattled", "Rattled")]);
        let hits = engine.search("huntd");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].score >= 68 && hits[0].score < 100);
    }
}
