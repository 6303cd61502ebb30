//! Detail card
//!
//! Shows the last-selected game next to the chart. Selection is pinned by
//! hover, so the card keeps its content when the pointer moves away.

use std::sync::Arc;

use bg_core::GameRecord;
use egui::{RichText, ScrollArea, Ui};

use crate::{format_players, BandTier};

/// Side panel card for the pinned game
#[derive(Default)]
pub struct DetailCard;

impl DetailCard {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&self, ui: &mut Ui, game: Option<&Arc<GameRecord>>, band_ceiling: u32) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            let Some(game) = game else {
                ui.weak("Hover a game to see its details.");
                return;
            };

            ui.horizontal(|ui| {
                ui.heading(&game.name);
                let tier = BandTier::of(game, band_ceiling);
                ui.label(RichText::new(tier.label()).color(tier.color()));
            });
            if let Some(year) = game.year_published {
                ui.weak(year.to_string());
            }

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(format!("Rating {:.2}", game.quality));
                ui.label(format!("Complexity {:.1}", game.complexity));
                ui.label(format!(
                    "{} players",
                    format_players(game.min_players, game.max_players)
                ));
            });
            if !game.best_with.is_empty() {
                let counts: Vec<String> = game.best_with.iter().map(u32::to_string).collect();
                ui.label(format!("Best with {}", counts.join(", ")));
            }

            if !game.categories.is_empty() {
                ui.label(RichText::new(game.categories.join(" · ")).small());
            }
            if !game.mechanics.is_empty() {
                ui.label(RichText::new(game.mechanics.join(" · ")).small().weak());
            }

            if !game.description.is_empty() {
                ui.separator();
                ScrollArea::vertical()
                    .id_source("detail_description")
                    .max_height(120.0)
                    .show(ui, |ui| {
                        ui.label(&game.description);
                    });
            }

            if !game.link.is_empty() {
                ui.hyperlink_to("View on BGG", &game.link);
            }
        });
    }
}
