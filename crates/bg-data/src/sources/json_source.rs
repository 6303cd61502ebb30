//! JSON catalog source
//!
//! Reads the `boardgames.json` export: a flat array of game objects. Field
//! name differences between export generations are absorbed by the record's
//! serde aliases, and malformed rank/score fields degrade to sentinels
//! instead of failing the load.

use std::fs;
use std::path::Path;

use bg_core::{Catalog, GameRecord};
use tracing::info;

use crate::DataError;

/// Catalog source for the JSON export format
pub struct JsonCatalogSource;

impl JsonCatalogSource {
    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Catalog, DataError> {
        info!(path = %path.display(), "loading JSON catalog");
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse a catalog from JSON text.
    pub fn parse(text: &str) -> Result<Catalog, DataError> {
        let records: Vec<GameRecord> = serde_json::from_str(text)?;
        if records.is_empty() {
            return Err(DataError::EmptyCatalog);
        }
        Ok(Catalog::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bg_core::UNRANKED;

    #[test]
    fn test_parse_export_shape() {
        let catalog = JsonCatalogSource::parse(
            r#"[
                {
                    "id": 342942,
                    "name": "Ark Nova",
                    "bayesaverage": 8.3,
                    "complexity": 3.8,
                    "goldilocks_score": 2,
                    "min_players": 1,
                    "max_players": 4,
                    "recommendedwith": [1, 2, 3],
                    "bestwith": [2],
                    "categories": ["Animals", "Economic"],
                    "mechanics": ["Hand Management"],
                    "yearpublished": 2021,
                    "link": "https://boardgamegeek.com/boardgame/342942",
                    "thumbnail": ""
                },
                {"id": 1406, "name": "Monopoly", "bayesaverage": 4.4, "complexity": 1.7}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let ark_nova = catalog.get(342942).unwrap();
        assert_eq!(ark_nova.rank, 2);
        assert_eq!(ark_nova.quality, 8.3);
        assert_eq!(ark_nova.recommended_with, vec![1, 2, 3]);
        // No rank in the export -> worst sentinel, record still loads.
        assert_eq!(catalog.get(1406).unwrap().rank, UNRANKED);
    }

    #[test]
    fn test_empty_array_is_an_error() {
        assert!(matches!(
            JsonCatalogSource::parse("[]"),
            Err(DataError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            JsonCatalogSource::parse("{not json"),
            Err(DataError::Json(_))
        ));
    }
}
