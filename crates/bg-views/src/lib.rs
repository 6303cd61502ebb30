//! Rendering collaborators for the discovery engine
//!
//! Table, scatter plot, card list and detail card. Each view consumes the
//! filtered record sequence plus the shared selection snapshot and reports
//! interactions back through the coordinator; none of them owns filter or
//! selection state.

pub mod cards;
pub mod detail;
pub mod scatter;
pub mod table;

use bg_core::GameRecord;
use egui::Color32;

pub use cards::CardListView;
pub use detail::DetailCard;
pub use scatter::{ScatterConfig, ScatterView};
pub use table::{TableConfig, TableView};

/// Which band a game falls into, relative to the derived band ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandTier {
    Optimal,
    Near,
    Rest,
}

impl BandTier {
    pub fn of(record: &GameRecord, band_ceiling: u32) -> Self {
        if record.rank == 1 {
            BandTier::Optimal
        } else if record.rank <= band_ceiling {
            BandTier::Near
        } else {
            BandTier::Rest
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BandTier::Optimal => "Optimal",
            BandTier::Near => "Near optimal",
            BandTier::Rest => "Rest",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            BandTier::Optimal => Color32::from_rgb(236, 72, 153), // pink
            BandTier::Near => Color32::from_rgb(45, 212, 191),    // teal
            BandTier::Rest => Color32::from_rgb(167, 139, 250),   // soft purple
        }
    }
}

/// Player range label, e.g. "2-4" or "3"
pub fn format_players(min: u32, max: u32) -> String {
    if min == max {
        format!("{min}")
    } else {
        format!("{min}-{max}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_tier_respects_ceiling() {
        let mut record: GameRecord =
            serde_json::from_str(r#"{"id": 1, "name": "A", "quality": 7.0, "complexity": 2.0, "rank": 1}"#)
                .unwrap();
        assert_eq!(BandTier::of(&record, 4), BandTier::Optimal);
        record.rank = 3;
        assert_eq!(BandTier::of(&record, 4), BandTier::Near);
        record.rank = 5;
        assert_eq!(BandTier::of(&record, 4), BandTier::Rest);
    }

    #[test]
    fn test_format_players() {
        assert_eq!(format_players(2, 4), "2-4");
        assert_eq!(format_players(3, 3), "3");
    }
}
