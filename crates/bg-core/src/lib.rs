//! Core functionality for the board game discovery engine
//!
//! This crate provides the record model, the multi-criteria filter pipeline,
//! the drag-to-zoom controller and the cross-view selection coordinator.

pub mod engine;
pub mod filters;
pub mod records;
pub mod selection;
pub mod timer;
pub mod zoom;

// Re-export commonly used types
pub use engine::{FilterPipeline, SearchEngine};
pub use filters::{BandFilter, Filters, SortKey, SortOrder};
pub use records::{Catalog, GameId, GameRecord, UNRANKED};
pub use selection::{RowHandle, RowLocator, SelectionCoordinator, SelectionSnapshot};
pub use timer::Debouncer;
pub use zoom::{Bounds, ChartMargins, DataPoint, ZoomController};
