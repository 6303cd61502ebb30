//! Catalog loading for the board game discovery engine

pub mod sources;

use thiserror::Error;

// Re-exports
pub use sources::{load_catalog, CsvCatalogSource, JsonCatalogSource};

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("catalog contains no games")]
    EmptyCatalog,
}
