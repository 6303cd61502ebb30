//! Catalog sources
//!
//! The catalog arrives either as the JSON export consumed by the web
//! frontend or as the data pipeline's enriched CSV. Both produce the same
//! repaired, immutable `Catalog`.

pub mod csv_source;
pub mod json_source;

use std::path::Path;

use bg_core::Catalog;

use crate::DataError;

pub use csv_source::CsvCatalogSource;
pub use json_source::JsonCatalogSource;

/// Load a catalog, picking the source from the file extension.
pub fn load_catalog(path: &Path) -> Result<Catalog, DataError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => JsonCatalogSource::load(path),
        Some("csv") => CsvCatalogSource::load(path),
        other => Err(DataError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}
