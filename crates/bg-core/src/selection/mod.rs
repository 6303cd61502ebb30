//! Cross-view selection coordinator
//!
//! One owner for the hover/highlight/expand state shared by the table, the
//! scatter plot and the card list. Views report interactions through the
//! entry points here and read back a snapshot; none of them keeps its own
//! copy of the comparison logic.

use std::time::{Duration, Instant};

use crate::records::GameId;
use crate::timer::Debouncer;

/// How long a scatter-click highlight pulse lasts before clearing itself
pub const HIGHLIGHT_PULSE: Duration = Duration::from_millis(2000);

/// Opaque handle to a located table row, produced and consumed by the
/// rendering side
#[derive(Debug, Clone, Copy)]
pub struct RowHandle(pub egui::Rect);

/// Injected capability for finding and scrolling to a table row.
///
/// The table renderer owns the id-to-row mapping; the coordinator only asks
/// it to locate a row and bring it into view.
pub trait RowLocator {
    fn locate(&self, id: GameId) -> Option<RowHandle>;
    fn scroll_into_view(&mut self, handle: RowHandle);
}

/// Read-only copy of the selection state for renderers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionSnapshot {
    /// Pointer hover or a transient post-click pulse
    pub highlighted: Option<GameId>,
    /// Last hovered game, persists after the pointer moves away
    pub selected: Option<GameId>,
    /// The one expanded card in the narrow layout, if any
    pub mobile_expanded: Option<GameId>,
}

/// Owns and mutates the shared selection state
#[derive(Debug)]
pub struct SelectionCoordinator {
    highlighted: Option<GameId>,
    selected: Option<GameId>,
    mobile_expanded: Option<GameId>,
    pulse: Debouncer<GameId>,
}

impl Default for SelectionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self {
            highlighted: None,
            selected: None,
            mobile_expanded: None,
            pulse: Debouncer::new(HIGHLIGHT_PULSE),
        }
    }

    /// Pointer hover over a row or point. Highlights it and, for a real id,
    /// pins it as the selected game for the detail card. Supersedes any
    /// pending highlight pulse.
    pub fn hover(&mut self, id: Option<GameId>) {
        self.pulse.cancel();
        self.highlighted = id;
        if id.is_some() {
            self.selected = id;
        }
    }

    /// Tap on a card in the narrow layout: toggle it, collapsing whichever
    /// other card was open. At most one card is expanded at a time.
    pub fn mobile_click(&mut self, id: GameId) {
        self.mobile_expanded = if self.mobile_expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Click on a scatter point: scroll the matching table row into view
    /// and pulse its highlight for a fixed duration. A game without a
    /// locatable row is a no-op.
    pub fn scatter_click(&mut self, id: GameId, locator: &mut dyn RowLocator, now: Instant) {
        let Some(handle) = locator.locate(id) else {
            tracing::debug!(id, "scatter click on game without a table row");
            return;
        };
        locator.scroll_into_view(handle);
        self.highlighted = Some(id);
        self.pulse.schedule(id, now);
    }

    /// Advance the pulse timer; called once per frame.
    pub fn tick(&mut self, now: Instant) {
        if self.pulse.poll(now).is_some() {
            self.highlighted = None;
        }
    }

    /// Deadline of the pending pulse, for frame-repaint scheduling
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pulse.next_deadline()
    }

    pub fn is_highlighted(&self, id: GameId) -> bool {
        self.highlighted == Some(id)
    }

    pub fn is_expanded(&self, id: GameId) -> bool {
        self.mobile_expanded == Some(id)
    }

    pub fn highlighted(&self) -> Option<GameId> {
        self.highlighted
    }

    pub fn selected(&self) -> Option<GameId> {
        self.selected
    }

    pub fn mobile_expanded(&self) -> Option<GameId> {
        self.mobile_expanded
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            highlighted: self.highlighted,
            selected: self.selected,
            mobile_expanded: self.mobile_expanded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;
    use egui::{pos2, vec2, Rect};

    /// Locator over a fixed id set, recording scroll requests.
    struct FakeLocator {
        rows: AHashMap<GameId, RowHandle>,
        scrolls: Vec<Rect>,
    }

    impl FakeLocator {
        fn with_rows(ids: &[GameId]) -> Self {
            let rows = ids
                .iter()
                .map(|&id| {
                    let rect = Rect::from_min_size(pos2(0.0, id as f32 * 20.0), vec2(100.0, 18.0));
                    (id, RowHandle(rect))
                })
                .collect();
            Self {
                rows,
                scrolls: Vec::new(),
            }
        }
    }

    impl RowLocator for FakeLocator {
        fn locate(&self, id: GameId) -> Option<RowHandle> {
            self.rows.get(&id).copied()
        }

        fn scroll_into_view(&mut self, handle: RowHandle) {
            self.scrolls.push(handle.0);
        }
    }

    #[test]
    fn test_selected_persists_after_hover_ends() {
        let mut coordinator = SelectionCoordinator::new();
        coordinator.hover(Some(5));
        assert_eq!(coordinator.highlighted(), Some(5));
        assert_eq!(coordinator.selected(), Some(5));

        coordinator.hover(None);
        assert_eq!(coordinator.highlighted(), None);
        assert_eq!(coordinator.selected(), Some(5));
    }

    #[test]
    fn test_at_most_one_card_expanded() {
        let mut coordinator = SelectionCoordinator::new();
        coordinator.mobile_click(1);
        assert!(coordinator.is_expanded(1));
        coordinator.mobile_click(2);
        assert!(coordinator.is_expanded(2));
        assert!(!coordinator.is_expanded(1));
        coordinator.mobile_click(2);
        assert_eq!(coordinator.mobile_expanded(), None);
    }

    #[test]
    fn test_scatter_click_scrolls_and_pulses() {
        let start = Instant::now();
        let mut coordinator = SelectionCoordinator::new();
        let mut locator = FakeLocator::with_rows(&[7]);

        coordinator.scatter_click(7, &mut locator, start);
        assert_eq!(locator.scrolls.len(), 1);
        assert!(coordinator.is_highlighted(7));

        coordinator.tick(start + Duration::from_millis(1999));
        assert!(coordinator.is_highlighted(7));
        coordinator.tick(start + Duration::from_millis(2000));
        assert_eq!(coordinator.highlighted(), None);
    }

    #[test]
    fn test_hover_supersedes_pending_pulse() {
        let start = Instant::now();
        let mut coordinator = SelectionCoordinator::new();
        let mut locator = FakeLocator::with_rows(&[7]);

        coordinator.scatter_click(7, &mut locator, start);
        coordinator.hover(Some(9));

        // The stale pulse must not clear the new highlight.
        coordinator.tick(start + Duration::from_secs(10));
        assert_eq!(coordinator.highlighted(), Some(9));
    }

    #[test]
    fn test_new_scatter_click_supersedes_pulse() {
        let start = Instant::now();
        let mut coordinator = SelectionCoordinator::new();
        let mut locator = FakeLocator::with_rows(&[1, 2]);

        coordinator.scatter_click(1, &mut locator, start);
        coordinator.scatter_click(2, &mut locator, start + Duration::from_millis(1500));

        // Only the second deadline applies.
        coordinator.tick(start + Duration::from_millis(2000));
        assert!(coordinator.is_highlighted(2));
        coordinator.tick(start + Duration::from_millis(3500));
        assert_eq!(coordinator.highlighted(), None);
    }

    #[test]
    fn test_scatter_click_without_row_is_noop() {
        let start = Instant::now();
        let mut coordinator = SelectionCoordinator::new();
        let mut locator = FakeLocator::with_rows(&[]);

        coordinator.hover(Some(3));
        coordinator.hover(None);
        coordinator.scatter_click(99, &mut locator, start);

        assert!(locator.scrolls.is_empty());
        assert_eq!(coordinator.highlighted(), None);
        assert!(coordinator.next_deadline().is_none());
    }
}
