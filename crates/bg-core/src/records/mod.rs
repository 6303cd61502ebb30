//! Game record model
//!
//! The immutable catalog of games the discovery engine operates on. Records
//! are loaded once, repaired into a valid state and shared by reference
//! everywhere; nothing in the engine mutates them.

use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Unique game identifier (the catalog's external id, e.g. a BGG id)
pub type GameId = u64;

/// Sentinel rank for games without a usable precomputed rank.
///
/// Malformed or missing ranks are treated as "worst" rather than rejected,
/// so filtering and sorting stay total over the whole catalog.
pub const UNRANKED: u32 = 999;

/// A single game in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier
    pub id: GameId,

    /// Display name
    pub name: String,

    /// Quality score (community rating), higher is better
    #[serde(alias = "bayesaverage", default, deserialize_with = "de_score")]
    pub quality: f64,

    /// Complexity weight on the 1..5 scale
    #[serde(default, deserialize_with = "de_score")]
    pub complexity: f64,

    /// Precomputed quality-for-complexity rank, 1 = best, larger = worse
    #[serde(
        alias = "goldilocks_score",
        alias = "pareto_rank",
        default = "unranked",
        deserialize_with = "de_rank"
    )]
    pub rank: u32,

    /// Minimum supported player count
    #[serde(default)]
    pub min_players: u32,

    /// Maximum supported player count
    #[serde(default)]
    pub max_players: u32,

    /// Player counts the community recommends
    #[serde(alias = "recommendedwith", default)]
    pub recommended_with: Vec<u32>,

    /// Player counts the community rates as best
    #[serde(alias = "bestwith", default)]
    pub best_with: Vec<u32>,

    /// Category tags
    #[serde(default)]
    pub categories: Vec<String>,

    /// Mechanic tags
    #[serde(default)]
    pub mechanics: Vec<String>,

    /// Type tags (strategy, family, ...)
    #[serde(default)]
    pub types: Vec<String>,

    /// Year of first publication
    #[serde(alias = "yearpublished", default)]
    pub year_published: Option<i32>,

    /// Number of user ratings behind the quality score
    #[serde(alias = "usersrated", default)]
    pub users_rated: Option<u64>,

    /// Descriptive text
    #[serde(default)]
    pub description: String,

    /// External detail page
    #[serde(default)]
    pub link: String,

    /// Thumbnail image reference
    #[serde(default)]
    pub thumbnail: String,
}

fn unranked() -> u32 {
    UNRANKED
}

/// Missing or null rank becomes the sentinel instead of failing the record.
fn de_rank<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
    let value: Option<f64> = Option::deserialize(de)?;
    Ok(match value {
        Some(v) if v.is_finite() && v >= 1.0 => v as u32,
        _ => UNRANKED,
    })
}

/// Missing or null scores become 0.0 ("worst") so comparisons stay total.
fn de_score<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    let value: Option<f64> = Option::deserialize(de)?;
    Ok(value.filter(|v| v.is_finite()).unwrap_or(0.0))
}

impl GameRecord {
    /// Whether the game sits on the optimal tier
    pub fn is_optimal(&self) -> bool {
        self.rank == 1
    }

    /// Restore the record invariants after deserialization.
    ///
    /// rank >= 1 and min_players <= max_players must hold for the rest of
    /// the engine; out-of-line values are repaired with a warning rather
    /// than dropping the record.
    pub fn repair(&mut self) {
        if self.rank == 0 {
            tracing::warn!(id = self.id, name = %self.name, "rank 0 treated as unranked");
            self.rank = UNRANKED;
        }
        if self.min_players > self.max_players {
            tracing::warn!(
                id = self.id,
                name = %self.name,
                min = self.min_players,
                max = self.max_players,
                "swapping inverted player count bounds"
            );
            std::mem::swap(&mut self.min_players, &mut self.max_players);
        }
    }
}

/// The loaded catalog: shared records plus derived lookup structures
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All games in load order
    games: Vec<Arc<GameRecord>>,

    /// id -> position in `games`
    index: AHashMap<GameId, usize>,

    /// Distinct category tags, sorted
    categories: Vec<String>,

    /// Distinct mechanic tags, sorted
    mechanics: Vec<String>,
}

impl Catalog {
    /// Build a catalog from freshly loaded records, repairing invariants.
    pub fn new(mut records: Vec<GameRecord>) -> Self {
        for record in &mut records {
            record.repair();
        }

        let mut categories: Vec<String> = Vec::new();
        let mut mechanics: Vec<String> = Vec::new();
        for record in &records {
            categories.extend(record.categories.iter().cloned());
            mechanics.extend(record.mechanics.iter().cloned());
        }
        categories.sort();
        categories.dedup();
        mechanics.sort();
        mechanics.dedup();

        let games: Vec<Arc<GameRecord>> = records.into_iter().map(Arc::new).collect();
        let index = games
            .iter()
            .enumerate()
            .map(|(i, g)| (g.id, i))
            .collect::<AHashMap<_, _>>();

        tracing::info!(
            games = games.len(),
            categories = categories.len(),
            mechanics = mechanics.len(),
            "catalog built"
        );

        Self {
            games,
            index,
            categories,
            mechanics,
        }
    }

    /// All games in load order
    pub fn games(&self) -> &[Arc<GameRecord>] {
        &self.games
    }

    /// Look up a game by id
    pub fn get(&self, id: GameId) -> Option<&Arc<GameRecord>> {
        self.index.get(&id).map(|&i| &self.games[i])
    }

    /// Distinct category tags, sorted
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Distinct mechanic tags, sorted
    pub fn mechanics(&self) -> &[String] {
        &self.mechanics
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Bare test record with sensible defaults, shared by the engine tests.
#[cfg(test)]
pub(crate) fn test_record(id: GameId, name: &str, quality: f64, complexity: f64, rank: u32) -> GameRecord {
    GameRecord {
        id,
        name: name.to_string(),
        quality,
        complexity,
        rank,
        min_players: 2,
        max_players: 4,
        recommended_with: vec![2, 3, 4],
        best_with: vec![3],
        categories: Vec::new(),
        mechanics: Vec::new(),
        types: Vec::new(),
        year_published: None,
        users_rated: None,
        description: String::new(),
        link: String::new(),
        thumbnail: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: GameId, name: &str, quality: f64, complexity: f64, rank: u32) -> GameRecord {
        test_record(id, name, quality, complexity, rank)
    }

    #[test]
    fn test_missing_rank_uses_sentinel() {
        let game: GameRecord =
            serde_json::from_str(r#"{"id": 1, "name": "Azul", "bayesaverage": 7.8, "complexity": 1.8}"#)
                .unwrap();
        assert_eq!(game.rank, UNRANKED);
        assert_eq!(game.quality, 7.8);
    }

    #[test]
    fn test_null_rank_and_score_use_sentinels() {
        let game: GameRecord = serde_json::from_str(
            r#"{"id": 2, "name": "Mystery", "goldilocks_score": null, "bayesaverage": null, "complexity": 2.0}"#,
        )
        .unwrap();
        assert_eq!(game.rank, UNRANKED);
        assert_eq!(game.quality, 0.0);
    }

    #[test]
    fn test_original_export_aliases() {
        let game: GameRecord = serde_json::from_str(
            r#"{
                "id": 363622,
                "name": "Heat",
                "bayesaverage": 7.9,
                "complexity": 2.2,
                "pareto_rank": 1,
                "yearpublished": 2022,
                "recommendedwith": [2, 3, 4, 5],
                "bestwith": [4]
            }"#,
        )
        .unwrap();
        assert_eq!(game.rank, 1);
        assert_eq!(game.year_published, Some(2022));
        assert_eq!(game.recommended_with, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_repair_swaps_inverted_player_bounds() {
        let mut game = record(1, "Oddity", 7.0, 2.0, 3);
        game.min_players = 5;
        game.max_players = 2;
        game.repair();
        assert_eq!((game.min_players, game.max_players), (2, 5));
    }

    #[test]
    fn test_catalog_lookup_and_tag_lists() {
        let mut a = record(1, "Alpha", 7.0, 2.0, 1);
        a.categories = vec!["Economic".into(), "Animals".into()];
        a.mechanics = vec!["Drafting".into()];
        let mut b = record(2, "Beta", 6.5, 3.0, 2);
        b.categories = vec!["Economic".into()];
        b.mechanics = vec!["Auction".into(), "Drafting".into()];

        let catalog = Catalog::new(vec![a, b]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(2).unwrap().name, "Beta");
        assert!(catalog.get(99).is_none());
        assert_eq!(catalog.categories(), &["Animals", "Economic"]);
        assert_eq!(catalog.mechanics(), &["Auction", "Drafting"]);
    }
}
