//! Filter state
//!
//! A single `Filters` value owns every user-adjustable criterion. The owning
//! view replaces it wholesale on each edit, so the pipeline never observes a
//! partially updated filter set.

use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::records::GameRecord;

/// Valid complexity weight domain
pub const COMPLEXITY_DOMAIN: [f64; 2] = [1.0, 5.0];

/// Quality score domain used when the catalog is empty
pub const QUALITY_DOMAIN_FALLBACK: [f64; 2] = [6.0, 10.0];

/// Three-way selector over the precomputed rank band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandFilter {
    /// No rank constraint
    All,
    /// Rank within the near-optimal band (everything better than the worst tier)
    OptimalAndNear,
    /// Rank 1 only
    OptimalOnly,
}

impl BandFilter {
    pub fn label(self) -> &'static str {
        match self {
            BandFilter::All => "All games",
            BandFilter::OptimalAndNear => "Optimal & near",
            BandFilter::OptimalOnly => "Optimal only",
        }
    }
}

/// Primary sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Rank,
    Quality,
    Complexity,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// The complete, replace-on-edit filter state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    /// Free-text fuzzy query against game names
    pub search: String,

    /// Rank band selector
    pub band: BandFilter,

    /// Inclusive complexity range [lo, hi]
    pub complexity_range: [f64; 2],

    /// Inclusive quality score range [lo, hi]
    pub quality_range: [f64; 2],

    /// Exact recommended player count, None = any
    pub player_count: Option<u32>,

    /// Selected category tags, empty = no constraint
    pub categories: AHashSet<String>,

    /// Selected mechanic tags, empty = no constraint
    pub mechanics: AHashSet<String>,

    /// Sort key applied when no search is active
    pub sort_by: SortKey,

    /// Sort direction
    pub sort_order: SortOrder,
}

impl Filters {
    /// Defaults derived from the loaded catalog.
    ///
    /// The quality range opens up to the observed score bounds, floored and
    /// ceiled to one decimal; the rank band starts on the near-optimal view
    /// sorted best-first, matching the discovery intent of the app.
    pub fn default_for(records: &[Arc<GameRecord>]) -> Self {
        Self {
            search: String::new(),
            band: BandFilter::OptimalAndNear,
            complexity_range: COMPLEXITY_DOMAIN,
            quality_range: quality_domain(records),
            player_count: None,
            categories: AHashSet::new(),
            mechanics: AHashSet::new(),
            sort_by: SortKey::Rank,
            sort_order: SortOrder::Descending,
        }
    }

    /// Whether a fuzzy search is active (blank queries are a no-op)
    pub fn has_search(&self) -> bool {
        !self.search.trim().is_empty()
    }
}

/// Observed quality score bounds, floored/ceiled to one decimal.
pub fn quality_domain(records: &[Arc<GameRecord>]) -> [f64; 2] {
    if records.is_empty() {
        return QUALITY_DOMAIN_FALLBACK;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        min = min.min(record.quality);
        max = max.max(record.quality);
    }
    [(min * 10.0).floor() / 10.0, (max * 10.0).ceil() / 10.0]
}

/// Clamp a [lo, hi] pair into a domain, keeping lo <= hi.
pub fn clamp_range(range: [f64; 2], domain: [f64; 2]) -> [f64; 2] {
    let lo = range[0].clamp(domain[0], domain[1]);
    let hi = range[1].clamp(domain[0], domain[1]);
    if lo <= hi {
        [lo, hi]
    } else {
        [hi, lo]
    }
}
