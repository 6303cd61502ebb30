//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context as _, Result};
use eframe::egui::{self, Context};
use tracing::info;

use bg_core::filters::quality_domain;
use bg_core::{
    Bounds, Catalog, FilterPipeline, Filters, GameRecord, SelectionCoordinator, ZoomController,
};
use bg_data::{load_catalog, JsonCatalogSource};
use bg_ui::{apply_theme, menu_bar, FilterPanel, Theme};
use bg_views::{CardListView, DetailCard, ScatterView, TableView};

/// Below this window width the table is replaced by the card list
const NARROW_LAYOUT_WIDTH: f32 = 600.0;

/// Bundled catalog used when no path is given on the command line
const SAMPLE_CATALOG: &str = include_str!("../data/sample_games.json");

/// Main application state
struct FinderApp {
    /// The loaded catalog, immutable for the lifetime of the app
    catalog: Catalog,

    /// Committed filter state
    filters: Filters,

    /// The discovery pipeline
    pipeline: FilterPipeline,

    /// Pipeline output for the committed filters
    results: Vec<Arc<GameRecord>>,

    /// Band ceiling the pipeline derived for `results`
    band_ceiling: u32,

    /// Unzoomed chart bounds for `results`
    natural_bounds: Bounds,

    /// Drag-to-zoom state for the scatter plot
    zoom: ZoomController,

    /// Shared hover/highlight/expand state
    selection: SelectionCoordinator,

    /// Filter strip
    panel: FilterPanel,

    /// Views
    table: TableView,
    scatter: ScatterView,
    cards: CardListView,
    detail: DetailCard,
}

impl FinderApp {
    fn new(cc: &eframe::CreationContext<'_>, catalog: Catalog) -> Self {
        apply_theme(&cc.egui_ctx, &Theme::default());

        let filters = Filters::default_for(catalog.games());
        let panel = FilterPanel::new(filters.clone(), quality_domain(catalog.games()));
        let mut pipeline = FilterPipeline::new();
        let results = pipeline.apply(catalog.games(), &filters);
        let band_ceiling = pipeline.band_ceiling();
        let natural_bounds = Bounds::natural(&results);

        Self {
            catalog,
            filters,
            pipeline,
            results,
            band_ceiling,
            natural_bounds,
            zoom: ZoomController::new(),
            selection: SelectionCoordinator::new(),
            panel,
            table: TableView::new(),
            scatter: ScatterView::new(),
            cards: CardListView::new(),
            detail: DetailCard::new(),
        }
    }

    /// Replace the committed filters and re-run the pipeline.
    fn apply_filters(&mut self, filters: Filters) {
        self.filters = filters;
        self.results = self.pipeline.apply(self.catalog.games(), &self.filters);
        self.band_ceiling = self.pipeline.band_ceiling();
        self.natural_bounds = Bounds::natural(&self.results);
    }

    fn reset_filters(&mut self) {
        let defaults = Filters::default_for(self.catalog.games());
        self.panel.sync(&defaults);
        self.apply_filters(defaults);
    }
}

impl eframe::App for FinderApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.selection.tick(now);

        let action = menu_bar(ctx, self.zoom.is_zoomed());
        if action.reset_filters {
            self.reset_filters();
        }
        if action.reset_zoom {
            self.zoom.reset();
        }

        egui::TopBottomPanel::top("filter_strip").show(ctx, |ui| {
            if let Some(filters) = self.panel.show(ui, &self.catalog, self.results.len()) {
                self.apply_filters(filters);
            }
        });

        if ctx.screen_rect().width() < NARROW_LAYOUT_WIDTH {
            egui::CentralPanel::default().show(ctx, |ui| {
                self.cards
                    .show(ui, &self.results, self.band_ceiling, &mut self.selection);
            });
        } else {
            egui::SidePanel::right("chart_panel")
                .default_width(430.0)
                .show(ctx, |ui| {
                    self.scatter.show(
                        ui,
                        &self.results,
                        self.band_ceiling,
                        self.natural_bounds,
                        &mut self.zoom,
                        &mut self.selection,
                        &mut self.table,
                    );
                    ui.separator();
                    let selected = self
                        .selection
                        .selected()
                        .and_then(|id| self.catalog.get(id));
                    self.detail.show(ui, selected, self.band_ceiling);
                });

            egui::CentralPanel::default().show(ctx, |ui| {
                self.table
                    .show(ui, &self.results, self.band_ceiling, &mut self.selection);
            });
        }

        // Wake up for the earliest pending timer instead of repainting
        // continuously.
        let mut deadline = self.selection.next_deadline();
        if let Some(panel_deadline) = self.panel.next_deadline() {
            deadline = Some(deadline.map_or(panel_deadline, |d| d.min(panel_deadline)));
        }
        if let Some(deadline) = deadline {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

fn load_app_catalog() -> Result<Catalog> {
    match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            load_catalog(&path)
                .with_context(|| format!("loading catalog from {}", path.display()))
        }
        None => {
            info!("no catalog path given, using the bundled sample");
            JsonCatalogSource::parse(SAMPLE_CATALOG).context("parsing the bundled sample catalog")
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let catalog = load_app_catalog()?;
    info!(games = catalog.len(), "catalog loaded");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([700.0, 500.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Board Game Finder",
        options,
        Box::new(move |cc| Box::new(FinderApp::new(cc, catalog))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run app: {e}"))?;

    Ok(())
}
