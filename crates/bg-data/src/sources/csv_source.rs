//! CSV catalog source
//!
//! Reads the data pipeline's enriched CSV. List columns (tags, player
//! counts) are `;`-separated within a cell. Header names follow the
//! pipeline's output, with the same aliases the JSON export uses.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bg_core::{Catalog, GameId, GameRecord, UNRANKED};
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::info;

use crate::DataError;

/// Catalog source for the enriched CSV format
pub struct CsvCatalogSource;

/// One CSV row before list-column expansion
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: GameId,
    name: String,
    #[serde(alias = "bayesaverage", default)]
    quality: Option<f64>,
    #[serde(default)]
    complexity: Option<f64>,
    #[serde(alias = "goldilocks_score", alias = "pareto_rank", default)]
    rank: Option<f64>,
    #[serde(default)]
    min_players: Option<u32>,
    #[serde(default)]
    max_players: Option<u32>,
    #[serde(alias = "recommendedwith", default)]
    recommended_with: Option<String>,
    #[serde(alias = "bestwith", default)]
    best_with: Option<String>,
    #[serde(default)]
    categories: Option<String>,
    #[serde(default)]
    mechanics: Option<String>,
    #[serde(default)]
    types: Option<String>,
    #[serde(alias = "yearpublished", default)]
    year_published: Option<i32>,
    #[serde(alias = "usersrated", default)]
    users_rated: Option<u64>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
}

fn split_list(cell: Option<String>) -> Vec<String> {
    cell.map(|s| {
        s.split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn split_counts(cell: Option<String>) -> Vec<u32> {
    cell.map(|s| {
        s.split(';')
            .filter_map(|part| part.trim().parse().ok())
            .collect()
    })
    .unwrap_or_default()
}

impl From<CsvRow> for GameRecord {
    fn from(row: CsvRow) -> Self {
        GameRecord {
            id: row.id,
            name: row.name,
            quality: row.quality.filter(|v| v.is_finite()).unwrap_or(0.0),
            complexity: row.complexity.filter(|v| v.is_finite()).unwrap_or(0.0),
            rank: match row.rank {
                Some(r) if r.is_finite() && r >= 1.0 => r as u32,
                _ => UNRANKED,
            },
            min_players: row.min_players.unwrap_or(0),
            max_players: row.max_players.unwrap_or(0),
            recommended_with: split_counts(row.recommended_with),
            best_with: split_counts(row.best_with),
            categories: split_list(row.categories),
            mechanics: split_list(row.mechanics),
            types: split_list(row.types),
            year_published: row.year_published,
            users_rated: row.users_rated,
            description: row.description.unwrap_or_default(),
            link: row.link.unwrap_or_default(),
            thumbnail: row.thumbnail.unwrap_or_default(),
        }
    }
}

impl CsvCatalogSource {
    /// Load a catalog from a CSV file.
    pub fn load(path: &Path) -> Result<Catalog, DataError> {
        info!(path = %path.display(), "loading CSV catalog");
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Parse a catalog from any CSV reader.
    pub fn read<R: Read>(reader: R) -> Result<Catalog, DataError> {
        let mut csv_reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut records = Vec::new();
        for row in csv_reader.deserialize::<CsvRow>() {
            records.push(GameRecord::from(row?));
        }
        if records.is_empty() {
            return Err(DataError::EmptyCatalog);
        }
        Ok(Catalog::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enriched_csv() {
        let csv = "\
id,name,bayesaverage,complexity,goldilocks_score,min_players,max_players,recommendedwith,categories,mechanics
174430,Gloomhaven,8.3,3.9,3,1,4,2;3,Adventure;Fantasy,Hand Management
2651,Power Grid,7.7,3.3,,2,6,4;5,Economic,Auction
";
        let catalog = CsvCatalogSource::read(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);

        let gloomhaven = catalog.get(174430).unwrap();
        assert_eq!(gloomhaven.rank, 3);
        assert_eq!(gloomhaven.recommended_with, vec![2, 3]);
        assert_eq!(gloomhaven.categories, vec!["Adventure", "Fantasy"]);

        // Blank rank cell -> sentinel.
        assert_eq!(catalog.get(2651).unwrap().rank, UNRANKED);
    }

    #[test]
    fn test_empty_csv_is_an_error() {
        let csv = "id,name,bayesaverage,complexity\n";
        assert!(matches!(
            CsvCatalogSource::read(csv.as_bytes()),
            Err(DataError::EmptyCatalog)
        ));
    }
}
