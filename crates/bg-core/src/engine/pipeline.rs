//! The filter-and-sort pipeline
//!
//! Composes fuzzy search, the rank band, range predicates and tag filters
//! into a single `apply` over the immutable catalog. Total over its input:
//! an empty catalog or degenerate filter set yields an empty (or unchanged)
//! result, never an error.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::engine::{range, SearchEngine};
use crate::filters::{BandFilter, Filters, SortKey, SortOrder};
use crate::records::GameRecord;

/// Band ceiling used when the working set is empty.
///
/// Documented fallback, not derived: an arbitrary non-zero value so band
/// filters stay well-defined over no data.
pub const EMPTY_BAND_CEILING: u32 = 10;

/// Upper rank bound of the near-optimal band for a working set.
///
/// Ranks run from 1 (best) up to a maximum that represents the worst or
/// unranked tier; everything strictly better than that tier is "near".
pub fn near_band_ceiling(records: &[Arc<GameRecord>]) -> u32 {
    records
        .iter()
        .map(|record| record.rank)
        .max()
        .map(|worst| worst.saturating_sub(1))
        .unwrap_or(EMPTY_BAND_CEILING)
}

/// The discovery pipeline: `apply(records, filters)` -> ordered results
pub struct FilterPipeline {
    search: SearchEngine,
    last_ceiling: u32,
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self {
            search: SearchEngine::new(),
            last_ceiling: EMPTY_BAND_CEILING,
        }
    }

    /// Band ceiling derived by the most recent `apply`, for tier coloring
    /// in the views.
    pub fn band_ceiling(&self) -> u32 {
        self.last_ceiling
    }

    /// Filter and order the catalog according to `filters`.
    ///
    /// When a search is active its relevance order is preserved and the
    /// configured sort is skipped; otherwise the result is sorted by the
    /// requested key and direction.
    pub fn apply(
        &mut self,
        records: &[Arc<GameRecord>],
        filters: &Filters,
    ) -> Vec<Arc<GameRecord>> {
        let searching = filters.has_search();
        let mut working = if searching {
            self.search.search(&filters.search, records)
        } else {
            records.to_vec()
        };

        // Data-dependent threshold: derived from the post-search working
        // set, so the band tracks whatever slice the user is looking at.
        let ceiling = near_band_ceiling(&working);
        self.last_ceiling = ceiling;

        working.retain(|game| {
            let band_ok = match filters.band {
                BandFilter::All => true,
                BandFilter::OptimalAndNear => game.rank <= ceiling,
                BandFilter::OptimalOnly => game.rank == 1,
            };
            band_ok
                && range::in_range(game.complexity, filters.complexity_range)
                && range::in_range(game.quality, filters.quality_range)
                && range::matches_player_count(&game.recommended_with, filters.player_count)
                && range::matches_any_tag(&game.categories, &filters.categories)
                && range::matches_any_tag(&game.mechanics, &filters.mechanics)
        });

        if !searching {
            sort_records(&mut working, filters.sort_by, filters.sort_order);
        }

        tracing::debug!(
            results = working.len(),
            total = records.len(),
            band_ceiling = ceiling,
            searching,
            "pipeline applied"
        );
        working
    }
}

fn sort_records(records: &mut [Arc<GameRecord>], key: SortKey, order: SortOrder) {
    records.sort_by(|a, b| {
        let ordering = match key {
            // Composite comparator: lower rank is better and "descending"
            // means best-first, with quality breaking ties among equal ranks.
            SortKey::Rank => a
                .rank
                .cmp(&b.rank)
                .then_with(|| b.quality.total_cmp(&a.quality)),
            SortKey::Quality => b.quality.total_cmp(&a.quality),
            SortKey::Complexity => b.complexity.total_cmp(&a.complexity),
        };
        match order {
            SortOrder::Descending => ordering,
            SortOrder::Ascending => ordering.reverse(),
        }
    });
}
