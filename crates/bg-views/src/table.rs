//! Table view
//!
//! Tabular listing of the filtered games. Hovering a row drives the shared
//! selection coordinator; the view keeps an id-to-row-rect map so scatter
//! clicks can scroll the matching row into view.

use std::sync::Arc;

use ahash::AHashMap;
use bg_core::{GameId, GameRecord, RowHandle, RowLocator, SelectionCoordinator};
use egui::{Align, Color32, Rect, RichText, ScrollArea, Ui};

use crate::{format_players, BandTier};

/// Configuration for the table view
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub striped_rows: bool,
    pub show_link_column: bool,
    pub highlight_fill: Color32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            striped_rows: true,
            show_link_column: true,
            highlight_fill: Color32::from_rgb(55, 70, 100),
        }
    }
}

/// Table of filtered games
pub struct TableView {
    pub config: TableConfig,

    // id -> row rect from the last drawn frame
    row_rects: AHashMap<GameId, Rect>,

    // Scroll request applied on the next show
    pending_scroll: Option<Rect>,

    // Row under the pointer last frame, so hover fires on transitions only
    hovered_last: Option<GameId>,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

impl TableView {
    pub fn new() -> Self {
        Self {
            config: TableConfig::default(),
            row_rects: AHashMap::new(),
            pending_scroll: None,
            hovered_last: None,
        }
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        games: &[Arc<GameRecord>],
        band_ceiling: u32,
        selection: &mut SelectionCoordinator,
    ) {
        self.header(ui);
        ui.separator();

        let mut next_rects = AHashMap::with_capacity(games.len());
        let mut hovered_row: Option<GameId> = None;

        ScrollArea::vertical()
            .id_source("game_table")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if let Some(rect) = self.pending_scroll.take() {
                    ui.scroll_to_rect(rect, Some(Align::Center));
                }

                for (row_index, game) in games.iter().enumerate() {
                    let fill = if selection.is_highlighted(game.id) {
                        self.config.highlight_fill
                    } else if self.config.striped_rows && row_index % 2 == 1 {
                        ui.visuals().faint_bg_color
                    } else {
                        Color32::TRANSPARENT
                    };

                    let frame = egui::Frame::none()
                        .fill(fill)
                        .inner_margin(egui::Margin::symmetric(6.0, 4.0))
                        .show(ui, |ui| {
                            self.row_contents(ui, game, band_ceiling);
                        });

                    let rect = frame.response.rect;
                    next_rects.insert(game.id, rect);

                    let response = ui.interact(
                        rect,
                        ui.id().with(("game_row", game.id)),
                        egui::Sense::hover(),
                    );
                    if response.hovered() {
                        hovered_row = Some(game.id);
                    }
                }
            });

        self.row_rects = next_rects;

        // Enter/leave semantics: report only transitions, so an idle pointer
        // never supersedes a scatter-click highlight pulse.
        if hovered_row != self.hovered_last {
            selection.hover(hovered_row);
            self.hovered_last = hovered_row;
        }
    }

    fn header(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.add_sized([70.0, 18.0], egui::Label::new(RichText::new("Band").strong()));
            ui.add_sized([220.0, 18.0], egui::Label::new(RichText::new("Name").strong()));
            ui.add_sized([60.0, 18.0], egui::Label::new(RichText::new("Rating").strong()));
            ui.add_sized([70.0, 18.0], egui::Label::new(RichText::new("Weight").strong()));
            ui.add_sized([70.0, 18.0], egui::Label::new(RichText::new("Players").strong()));
        });
    }

    fn row_contents(&self, ui: &mut Ui, game: &GameRecord, band_ceiling: u32) {
        ui.horizontal(|ui| {
            let tier = BandTier::of(game, band_ceiling);
            ui.add_sized(
                [70.0, 18.0],
                egui::Label::new(RichText::new(tier.label()).color(tier.color()).small()),
            );

            let mut name = RichText::new(&game.name);
            if let Some(year) = game.year_published {
                name = RichText::new(format!("{} ({})", game.name, year));
            }
            ui.add_sized([220.0, 18.0], egui::Label::new(name).truncate(true));
            ui.add_sized(
                [60.0, 18.0],
                egui::Label::new(RichText::new(format!("{:.2}", game.quality)).monospace()),
            );
            ui.add_sized(
                [70.0, 18.0],
                egui::Label::new(RichText::new(format!("{:.1}", game.complexity)).monospace()),
            );
            ui.add_sized(
                [70.0, 18.0],
                egui::Label::new(format_players(game.min_players, game.max_players)),
            );
            if self.config.show_link_column && !game.link.is_empty() {
                ui.hyperlink_to("BGG", &game.link);
            }
        });
    }
}

impl RowLocator for TableView {
    fn locate(&self, id: GameId) -> Option<RowHandle> {
        self.row_rects.get(&id).copied().map(RowHandle)
    }

    fn scroll_into_view(&mut self, handle: RowHandle) {
        self.pending_scroll = Some(handle.0);
    }
}
