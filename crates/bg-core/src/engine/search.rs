//! Fuzzy name search
//!
//! Approximate matching over game names. Matching is case-insensitive and
//! location-independent; a non-blank query produces a relevance order that
//! takes precedence over any configured sort downstream.

use std::cmp::Reverse;
use std::sync::Arc;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::records::GameRecord;

/// Reusable fuzzy matcher over the catalog
pub struct SearchEngine {
    matcher: Matcher,
    utf32_buf: Vec<char>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            utf32_buf: Vec::new(),
        }
    }

    /// Rank `records` by fuzzy match of `query` against their names.
    ///
    /// A blank or whitespace-only query is a no-op: every record comes back
    /// in input order and no relevance ordering applies. Otherwise records
    /// that do not match are dropped and the rest are ordered by descending
    /// match score, input order on ties.
    pub fn search(&mut self, query: &str, records: &[Arc<GameRecord>]) -> Vec<Arc<GameRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return records.to_vec();
        }

        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut scored: Vec<(u32, Arc<GameRecord>)> = Vec::new();
        for record in records {
            let haystack = Utf32Str::new(&record.name, &mut self.utf32_buf);
            if let Some(score) = pattern.score(haystack, &mut self.matcher) {
                scored.push((score, Arc::clone(record)));
            }
        }

        // Stable sort keeps input order among equal scores.
        scored.sort_by_key(|(score, _)| Reverse(*score));

        tracing::debug!(query, matches = scored.len(), total = records.len(), "fuzzy search");
        scored.into_iter().map(|(_, record)| record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::test_record;

    fn names(results: &[Arc<GameRecord>]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<Arc<GameRecord>> {
        vec![
            Arc::new(test_record(1, "Carcassonne", 7.4, 1.9, 3)),
            Arc::new(test_record(2, "Azul", 7.8, 1.8, 1)),
            Arc::new(test_record(3, "Azul: Summer Pavilion", 7.7, 2.0, 4)),
            Arc::new(test_record(4, "Brass: Birmingham", 8.4, 3.9, 2)),
        ]
    }

    #[test]
    fn test_blank_query_preserves_input_order() {
        let records = sample();
        let mut engine = SearchEngine::new();
        assert_eq!(
            names(&engine.search("", &records)),
            vec!["Carcassonne", "Azul", "Azul: Summer Pavilion", "Brass: Birmingham"]
        );
        assert_eq!(engine.search("   ", &records).len(), 4);
    }

    #[test]
    fn test_query_drops_non_matches() {
        let records = sample();
        let mut engine = SearchEngine::new();
        let results = engine.search("azul", &records);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.name.starts_with("Azul")));
    }

    #[test]
    fn test_exact_name_ranks_above_longer_match() {
        let records = sample();
        let mut engine = SearchEngine::new();
        let results = engine.search("azul", &records);
        assert_eq!(results[0].name, "Azul");
    }

    #[test]
    fn test_case_insensitive() {
        let records = sample();
        let mut engine = SearchEngine::new();
        assert_eq!(names(&engine.search("BRASS", &records)), vec!["Brass: Birmingham"]);
    }
}
