//! The discovery engine: fuzzy search, range predicates and the
//! filter-and-sort pipeline that combines them.

pub mod pipeline;
pub mod range;
pub mod search;

pub use pipeline::{near_band_ceiling, FilterPipeline, EMPTY_BAND_CEILING};
pub use search::SearchEngine;
