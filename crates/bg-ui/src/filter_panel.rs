//! Filter panel
//!
//! All filter widgets in one horizontal, wrapping strip. Text, selector and
//! checkbox edits commit a replacement `Filters` immediately; slider drags
//! are staged and committed through a 300 ms debounce so the pipeline only
//! re-runs once the user settles.

use std::time::{Duration, Instant};

use bg_core::filters::{clamp_range, BandFilter, COMPLEXITY_DOMAIN};
use bg_core::{Catalog, Debouncer, Filters, SortKey, SortOrder};
use egui::{ComboBox, ScrollArea, Slider, TextEdit, Ui};

/// Quiet period between the last slider movement and the committed filter change
pub const SLIDER_DEBOUNCE: Duration = Duration::from_millis(300);

const SORT_OPTIONS: [(SortKey, SortOrder, &str); 5] = [
    (SortKey::Rank, SortOrder::Descending, "Goldilocks (best first)"),
    (SortKey::Quality, SortOrder::Descending, "Rating (high to low)"),
    (SortKey::Quality, SortOrder::Ascending, "Rating (low to high)"),
    (SortKey::Complexity, SortOrder::Ascending, "Complexity (low to high)"),
    (SortKey::Complexity, SortOrder::Descending, "Complexity (high to low)"),
];

/// The filter strip above the result views
pub struct FilterPanel {
    /// Live widget values; equal to the committed filters except while a
    /// slider drag is being debounced
    staged: Filters,

    /// Pending slider commit
    debounce: Debouncer<Filters>,

    /// Valid quality score bounds for the loaded catalog
    quality_domain: [f64; 2],
}

impl FilterPanel {
    pub fn new(filters: Filters, quality_domain: [f64; 2]) -> Self {
        Self {
            staged: filters,
            debounce: Debouncer::new(SLIDER_DEBOUNCE),
            quality_domain,
        }
    }

    /// Adopt externally replaced filters (e.g. a menu reset), dropping any
    /// staged slider value.
    pub fn sync(&mut self, filters: &Filters) {
        self.staged = filters.clone();
        self.debounce.cancel();
    }

    /// Deadline of the pending slider commit, for repaint scheduling
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.next_deadline()
    }

    /// Draw the panel. Returns a replacement `Filters` when an edit (or an
    /// elapsed slider debounce) commits this frame.
    pub fn show(&mut self, ui: &mut Ui, catalog: &Catalog, shown: usize) -> Option<Filters> {
        let now = Instant::now();
        let mut committed = self.debounce.poll(now);

        let mut immediate = false;
        let mut slider_moved = false;

        ui.horizontal_wrapped(|ui| {
            // Search
            let search_response = ui.add(
                TextEdit::singleline(&mut self.staged.search)
                    .hint_text("Search games...")
                    .desired_width(160.0),
            );
            immediate |= search_response.changed();

            // Band selector
            ui.label("Show:");
            ComboBox::from_id_source("band_filter")
                .selected_text(self.staged.band.label())
                .show_ui(ui, |ui| {
                    for band in [BandFilter::All, BandFilter::OptimalAndNear, BandFilter::OptimalOnly] {
                        immediate |= ui
                            .selectable_value(&mut self.staged.band, band, band.label())
                            .changed();
                    }
                });

            // Complexity range
            ui.label("Complexity:");
            slider_moved |= self.range_sliders(ui, COMPLEXITY_DOMAIN, |filters| {
                &mut filters.complexity_range
            });

            // Quality range
            ui.label("Rating:");
            let quality_domain = self.quality_domain;
            slider_moved |= self.range_sliders(ui, quality_domain, |filters| {
                &mut filters.quality_range
            });

            // Player count
            ui.label("Players:");
            ComboBox::from_id_source("player_count")
                .selected_text(match self.staged.player_count {
                    None => "Any".to_string(),
                    Some(n) => format!("{n}"),
                })
                .show_ui(ui, |ui| {
                    immediate |= ui
                        .selectable_value(&mut self.staged.player_count, None, "Any")
                        .changed();
                    for n in 1..=6 {
                        immediate |= ui
                            .selectable_value(&mut self.staged.player_count, Some(n), format!("{n}"))
                            .changed();
                    }
                });

            // Tag multi-selects
            immediate |= tag_menu(ui, "Categories", catalog.categories(), &mut self.staged.categories);
            immediate |= tag_menu(ui, "Mechanics", catalog.mechanics(), &mut self.staged.mechanics);

            // Sort
            ui.label("Sort:");
            let sort_label = SORT_OPTIONS
                .iter()
                .find(|(key, order, _)| {
                    *key == self.staged.sort_by && *order == self.staged.sort_order
                })
                .map(|(_, _, label)| *label)
                .unwrap_or("Custom");
            ComboBox::from_id_source("sort_by")
                .selected_text(sort_label)
                .show_ui(ui, |ui| {
                    for (key, order, label) in SORT_OPTIONS {
                        let selected =
                            self.staged.sort_by == key && self.staged.sort_order == order;
                        if ui.selectable_label(selected, label).clicked() && !selected {
                            self.staged.sort_by = key;
                            self.staged.sort_order = order;
                            immediate = true;
                        }
                    }
                });

            ui.label(format!("Showing {} of {} games", shown, catalog.len()));
        });

        if immediate {
            // An immediate edit also flushes any staged slider value.
            self.debounce.cancel();
            committed = Some(self.staged.clone());
        } else if slider_moved {
            self.debounce.schedule(self.staged.clone(), now);
        }

        if let Some(filters) = &committed {
            tracing::debug!(?filters.band, search = %filters.search, "filters committed");
        }
        committed
    }

    /// Paired lo/hi sliders over one range field. Keeps lo <= hi by pushing
    /// the other end along and clamps to the domain.
    fn range_sliders(
        &mut self,
        ui: &mut Ui,
        domain: [f64; 2],
        field: impl Fn(&mut Filters) -> &mut [f64; 2],
    ) -> bool {
        let range = field(&mut self.staged);
        let mut lo = range[0];
        let mut hi = range[1];

        let lo_response = ui.add(Slider::new(&mut lo, domain[0]..=domain[1]).fixed_decimals(1));
        let hi_response = ui.add(Slider::new(&mut hi, domain[0]..=domain[1]).fixed_decimals(1));

        if lo_response.changed() {
            hi = hi.max(lo);
        }
        if hi_response.changed() {
            lo = lo.min(hi);
        }
        *range = clamp_range([lo, hi], domain);

        lo_response.changed() || hi_response.changed()
    }
}

/// Checkbox menu over a tag list with a clear button. Returns true when the
/// selection changed.
fn tag_menu(
    ui: &mut Ui,
    label: &str,
    options: &[String],
    selected: &mut ahash::AHashSet<String>,
) -> bool {
    let mut changed = false;
    let title = if selected.is_empty() {
        label.to_string()
    } else {
        format!("{} ({})", label, selected.len())
    };
    ui.menu_button(title, |ui| {
        if !selected.is_empty() && ui.button("Clear selection").clicked() {
            selected.clear();
            changed = true;
            ui.close_menu();
        }
        ScrollArea::vertical()
            .id_source((label, "tag_menu"))
            .max_height(220.0)
            .show(ui, |ui| {
                for option in options {
                    let mut on = selected.contains(option);
                    if ui.checkbox(&mut on, option).changed() {
                        if on {
                            selected.insert(option.clone());
                        } else {
                            selected.remove(option);
                        }
                        changed = true;
                    }
                }
            });
    });
    changed
}
