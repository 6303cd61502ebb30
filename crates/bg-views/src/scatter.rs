//! Scatter plot view
//!
//! Quality on the x axis, complexity on the y axis, colored by band tier.
//! Plot interactions are owned by the core `ZoomController`; the built-in
//! egui_plot gestures are disabled so a drag always means a zoom selection.

use std::sync::Arc;
use std::time::Instant;

use bg_core::{
    Bounds, DataPoint, GameId, GameRecord, RowLocator, SelectionCoordinator, ZoomController,
};
use egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotBounds, PlotPoints, Points, Polygon};

use crate::BandTier;

/// Configuration for the scatter view
#[derive(Debug, Clone)]
pub struct ScatterConfig {
    pub point_radius: f32,
    pub highlight_radius: f32,
    /// Hover pick distance as a fraction of the visible bounds
    pub pick_radius: f64,
    pub show_legend: bool,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            point_radius: 3.0,
            highlight_radius: 6.0,
            pick_radius: 0.03,
            show_legend: true,
        }
    }
}

/// Scatter plot over the filtered games
pub struct ScatterView {
    pub config: ScatterConfig,
    hovered_last: Option<GameId>,
}

impl Default for ScatterView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatterView {
    pub fn new() -> Self {
        Self {
            config: ScatterConfig::default(),
            hovered_last: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn show(
        &mut self,
        ui: &mut Ui,
        games: &[Arc<GameRecord>],
        band_ceiling: u32,
        natural: Bounds,
        zoom: &mut ZoomController,
        selection: &mut SelectionCoordinator,
        locator: &mut dyn RowLocator,
    ) {
        ui.horizontal(|ui| {
            ui.label("Rating vs. complexity");
            if zoom.is_zoomed() {
                if ui.small_button("Reset zoom").clicked() {
                    zoom.reset();
                }
            }
        });

        let bounds = zoom.current_bounds(natural);
        let mut hovered: Option<GameId> = None;
        let mut pointer_data: Option<DataPoint> = None;

        let plot = Plot::new("quality_complexity")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_grid(true);
        let plot = if self.config.show_legend {
            plot.legend(Legend::default())
        } else {
            plot
        };

        let response = plot
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [bounds.left, bounds.bottom],
                    [bounds.right, bounds.top],
                ));

                for tier in [BandTier::Rest, BandTier::Near, BandTier::Optimal] {
                    let coords: Vec<[f64; 2]> = games
                        .iter()
                        .filter(|g| BandTier::of(g, band_ceiling) == tier)
                        .map(|g| [g.quality, g.complexity])
                        .collect();
                    if coords.is_empty() {
                        continue;
                    }
                    plot_ui.points(
                        Points::new(PlotPoints::new(coords))
                            .name(tier.label())
                            .color(tier.color())
                            .shape(MarkerShape::Circle)
                            .radius(self.config.point_radius),
                    );
                }

                if let Some(id) = selection.highlighted() {
                    if let Some(game) = games.iter().find(|g| g.id == id) {
                        plot_ui.points(
                            Points::new(PlotPoints::new(vec![[game.quality, game.complexity]]))
                                .color(Color32::WHITE)
                                .shape(MarkerShape::Circle)
                                .radius(self.config.highlight_radius),
                        );
                    }
                }

                // Live drag rectangle overlay.
                if let Some(sel) = zoom.selection() {
                    let corners = vec![
                        [sel.left, sel.bottom],
                        [sel.right, sel.bottom],
                        [sel.right, sel.top],
                        [sel.left, sel.top],
                    ];
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(corners))
                            .fill_color(Color32::from_rgba_unmultiplied(100, 150, 250, 40))
                            .stroke(Stroke::new(1.0, Color32::from_rgb(100, 150, 250))),
                    );
                }

                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    pointer_data = Some(DataPoint {
                        quality: pointer.x,
                        complexity: pointer.y,
                    });
                }
            })
            .response;

        if let Some(pointer) = pointer_data {
            hovered = nearest_game(games, pointer, bounds, self.config.pick_radius);
        }

        // Drag gestures feed the zoom state machine against the outer frame.
        let frame = response.rect;
        let pointer_pos = ui.ctx().pointer_latest_pos();
        if response.drag_started() {
            if let Some(pos) = pointer_pos {
                zoom.pointer_down(pos, frame, natural);
            }
        } else if response.dragged() {
            match pointer_pos {
                Some(pos) if frame.contains(pos) => zoom.pointer_moved(pos, frame, natural),
                _ => zoom.pointer_left(),
            }
        } else if response.drag_released() {
            zoom.pointer_up();
        }

        if response.clicked() {
            if let Some(id) = hovered {
                selection.scatter_click(id, locator, Instant::now());
            }
        }

        if let Some(id) = hovered {
            if let Some(game) = games.iter().find(|g| g.id == id) {
                egui::show_tooltip_at_pointer(ui.ctx(), egui::Id::new("scatter_tooltip"), |ui| {
                    ui.strong(&game.name);
                    ui.label(format!(
                        "Rating {:.2} · Complexity {:.1}",
                        game.quality, game.complexity
                    ));
                    let tier = BandTier::of(game, band_ceiling);
                    ui.colored_label(tier.color(), tier.label());
                });
            }
        }

        if hovered != self.hovered_last {
            selection.hover(hovered);
            self.hovered_last = hovered;
        }
    }
}

/// Closest game to the pointer within the pick radius, normalized by the
/// visible bounds so picking behaves the same at any zoom level.
fn nearest_game(
    games: &[Arc<GameRecord>],
    pointer: DataPoint,
    bounds: Bounds,
    pick_radius: f64,
) -> Option<GameId> {
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return None;
    }
    let mut best: Option<(f64, GameId)> = None;
    for game in games {
        let dx = (game.quality - pointer.quality) / bounds.width();
        let dy = (game.complexity - pointer.complexity) / bounds.height();
        let dist = (dx * dx + dy * dy).sqrt();
        if dist <= pick_radius && best.map_or(true, |(d, _)| dist < d) {
            best = Some((dist, game.id));
        }
    }
    best.map(|(_, id)| id)
}
