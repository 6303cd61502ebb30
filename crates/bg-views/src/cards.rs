//! Card list view
//!
//! Narrow-layout replacement for the table: one card per game, tapping a
//! card expands it (collapsing whichever other card was open) to reveal the
//! description, tags and link.

use std::sync::Arc;

use bg_core::{GameRecord, SelectionCoordinator};
use egui::{RichText, ScrollArea, Ui};

use crate::{format_players, BandTier};

/// Expandable card list over the filtered games
#[derive(Default)]
pub struct CardListView;

impl CardListView {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        games: &[Arc<GameRecord>],
        band_ceiling: u32,
        selection: &mut SelectionCoordinator,
    ) {
        ScrollArea::vertical()
            .id_source("game_cards")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for game in games {
                    let expanded = selection.is_expanded(game.id);
                    let frame = egui::Frame::group(ui.style())
                        .fill(ui.visuals().faint_bg_color)
                        .show(ui, |ui| {
                            self.card_header(ui, game, band_ceiling, expanded);
                            if expanded {
                                ui.separator();
                                self.card_body(ui, game);
                            }
                        });

                    let response = frame.response.interact(egui::Sense::click());
                    if response.clicked() {
                        selection.mobile_click(game.id);
                    }
                }
            });
    }

    fn card_header(&self, ui: &mut Ui, game: &GameRecord, band_ceiling: u32, expanded: bool) {
        ui.horizontal(|ui| {
            ui.strong(&game.name);
            if game.is_optimal() {
                let tier = BandTier::of(game, band_ceiling);
                ui.label(RichText::new(tier.label()).color(tier.color()).small());
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(if expanded { "\u{2303}" } else { "\u{2304}" });
            });
        });
        ui.horizontal(|ui| {
            if let Some(year) = game.year_published {
                ui.weak(year.to_string());
            }
            ui.label(format!("Rating {:.2}", game.quality));
            ui.label(format!("Complexity {:.1}", game.complexity));
            ui.label(format!(
                "{} players",
                format_players(game.min_players, game.max_players)
            ));
        });
    }

    fn card_body(&self, ui: &mut Ui, game: &GameRecord) {
        if !game.recommended_with.is_empty() {
            let counts: Vec<String> = game.recommended_with.iter().map(u32::to_string).collect();
            ui.label(format!("Recommended with: {}", counts.join(", ")));
        }
        if !game.categories.is_empty() {
            ui.label(format!("Categories: {}", game.categories.join(", ")));
        }
        if !game.mechanics.is_empty() {
            ui.label(format!("Mechanics: {}", game.mechanics.join(", ")));
        }
        if !game.description.is_empty() {
            ui.add_space(4.0);
            ui.label(RichText::new(truncated(&game.description, 280)).weak());
        }
        if !game.link.is_empty() {
            ui.hyperlink_to("View on BGG", &game.link);
        }
    }
}

fn truncated(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}\u{2026}")
    }
}
