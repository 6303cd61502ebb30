//! Drag-to-zoom controller
//!
//! Maps pointer gestures over the chart surface to a rectangle in
//! quality x complexity data space. The controller owns the active zoom
//! rectangle and the in-flight drag; the chart renderer supplies pixel
//! positions and its screen rect, and consumes whatever bounds come back.

use std::sync::Arc;

use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::records::GameRecord;

/// Minimum committed width along the quality axis, in score units.
/// Anything smaller is a click or a slip, not a zoom.
pub const MIN_COMMIT_WIDTH: f64 = 0.02;

/// Minimum committed height along the complexity axis, in weight units.
pub const MIN_COMMIT_HEIGHT: f64 = 0.05;

const QUALITY_PADDING: f64 = 0.1;
const COMPLEXITY_PADDING: f64 = 0.2;

/// A position in data space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub quality: f64,
    pub complexity: f64,
}

/// Fixed pixel margins between the chart frame and the plotted area
#[derive(Debug, Clone, Copy)]
pub struct ChartMargins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            left: 40.0,
            right: 10.0,
            top: 10.0,
            bottom: 30.0,
        }
    }
}

/// A rectangle over quality (left/right) x complexity (bottom/top) space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Bounds {
    /// Documented fallback view for an empty filtered set, not derived.
    pub const FALLBACK: Bounds = Bounds {
        left: 6.0,
        right: 9.0,
        bottom: 1.0,
        top: 5.0,
    };

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Normalized rectangle between two drag endpoints (left <= right,
    /// bottom <= top regardless of drag direction).
    pub fn from_corners(a: DataPoint, b: DataPoint) -> Self {
        Self {
            left: a.quality.min(b.quality),
            right: a.quality.max(b.quality),
            bottom: a.complexity.min(b.complexity),
            top: a.complexity.max(b.complexity),
        }
    }

    /// Natural view of the currently filtered data: quality padded by 0.1
    /// and rounded outward to one decimal, complexity padded by 0.2 and
    /// clamped to the valid [1, 5] weight range.
    pub fn natural(records: &[Arc<GameRecord>]) -> Self {
        if records.is_empty() {
            return Self::FALLBACK;
        }
        let mut q_min = f64::INFINITY;
        let mut q_max = f64::NEG_INFINITY;
        let mut c_min = f64::INFINITY;
        let mut c_max = f64::NEG_INFINITY;
        for record in records {
            q_min = q_min.min(record.quality);
            q_max = q_max.max(record.quality);
            c_min = c_min.min(record.complexity);
            c_max = c_max.max(record.complexity);
        }
        Self {
            left: ((q_min - QUALITY_PADDING) * 10.0).floor() / 10.0,
            right: ((q_max + QUALITY_PADDING) * 10.0).ceil() / 10.0,
            bottom: (((c_min - COMPLEXITY_PADDING) * 10.0).floor() / 10.0).max(1.0),
            top: (((c_max + COMPLEXITY_PADDING) * 10.0).ceil() / 10.0).min(5.0),
        }
    }
}

/// An in-flight drag, in data space
#[derive(Debug, Clone, Copy)]
struct Drag {
    origin: DataPoint,
    current: Option<DataPoint>,
}

/// The drag-to-zoom state machine
#[derive(Debug, Default)]
pub struct ZoomController {
    margins: ChartMargins,
    zoom: Option<Bounds>,
    drag: Option<Drag>,
}

impl ZoomController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inverse-map a pixel position through the plotted area into data
    /// coordinates against the current bounds. Positions outside the
    /// plotted area (within the axis margins or outside the frame) are None.
    pub fn data_coords(&self, pos: Pos2, frame: Rect, natural: Bounds) -> Option<DataPoint> {
        let plot_width = frame.width() - self.margins.left - self.margins.right;
        let plot_height = frame.height() - self.margins.top - self.margins.bottom;
        if plot_width <= 0.0 || plot_height <= 0.0 {
            return None;
        }

        let x = pos.x - frame.left() - self.margins.left;
        let y = pos.y - frame.top() - self.margins.top;
        if x < 0.0 || x > plot_width || y < 0.0 || y > plot_height {
            return None;
        }

        let x_ratio = (x / plot_width) as f64;
        let y_ratio = 1.0 - (y / plot_height) as f64;
        let bounds = self.current_bounds(natural);
        Some(DataPoint {
            quality: bounds.left + x_ratio * bounds.width(),
            complexity: bounds.bottom + y_ratio * bounds.height(),
        })
    }

    /// Start a drag at the data coordinate under the pointer. Positions
    /// outside the plotted area do not start a drag.
    pub fn pointer_down(&mut self, pos: Pos2, frame: Rect, natural: Bounds) {
        if let Some(origin) = self.data_coords(pos, frame, natural) {
            self.drag = Some(Drag {
                origin,
                current: None,
            });
        }
    }

    /// Extend the in-flight drag. Ignored while idle; positions outside the
    /// plotted area leave the previous endpoint in place.
    pub fn pointer_moved(&mut self, pos: Pos2, frame: Rect, natural: Bounds) {
        if self.drag.is_none() {
            return;
        }
        if let Some(point) = self.data_coords(pos, frame, natural) {
            if let Some(drag) = self.drag.as_mut() {
                drag.current = Some(point);
            }
        }
    }

    /// Finish the drag. A rectangle smaller than the commit thresholds on
    /// either axis is discarded; otherwise it becomes the active zoom.
    /// Returns true when a zoom was committed.
    pub fn pointer_up(&mut self) -> bool {
        let committed = match self.drag.take() {
            Some(Drag {
                origin,
                current: Some(end),
            }) => {
                let rect = Bounds::from_corners(origin, end);
                if rect.width() > MIN_COMMIT_WIDTH && rect.height() > MIN_COMMIT_HEIGHT {
                    tracing::debug!(?rect, "zoom committed");
                    self.zoom = Some(rect);
                    true
                } else {
                    false
                }
            }
            _ => false,
        };
        committed
    }

    /// Abort the drag without committing, e.g. when the pointer leaves the
    /// chart surface.
    pub fn pointer_left(&mut self) {
        self.drag = None;
    }

    /// Clear the active zoom, reverting to natural bounds.
    pub fn reset(&mut self) {
        self.zoom = None;
        self.drag = None;
    }

    /// Bounds the chart should display right now.
    pub fn current_bounds(&self, natural: Bounds) -> Bounds {
        self.zoom.unwrap_or(natural)
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_some()
    }

    /// Live selection rectangle for the drag overlay, normalized so that
    /// left <= right and bottom <= top.
    pub fn selection(&self) -> Option<Bounds> {
        match self.drag {
            Some(Drag {
                origin,
                current: Some(end),
            }) => Some(Bounds::from_corners(origin, end)),
            _ => None,
        }
    }

    pub fn margins(&self) -> ChartMargins {
        self.margins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::test_record;
    use egui::{pos2, vec2};

    // 100x100 plotted area once the default margins are removed.
    fn frame() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(150.0, 140.0))
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} vs {b}");
    }

    /// Pixel position that maps back to the given data point.
    fn pixel_for(point: DataPoint, bounds: Bounds) -> Pos2 {
        let x_ratio = (point.quality - bounds.left) / bounds.width();
        let y_ratio = (point.complexity - bounds.bottom) / bounds.height();
        pos2(
            40.0 + (x_ratio * 100.0) as f32,
            10.0 + ((1.0 - y_ratio) * 100.0) as f32,
        )
    }

    #[test]
    fn test_natural_bounds_padding_and_rounding() {
        let records = vec![
            Arc::new(test_record(1, "A", 7.25, 2.3, 1)),
            Arc::new(test_record(2, "B", 8.04, 3.1, 2)),
        ];
        let bounds = Bounds::natural(&records);
        assert_close(bounds.left, 7.1);
        assert_close(bounds.right, 8.2);
        assert_close(bounds.bottom, 2.1);
        assert_close(bounds.top, 3.3);
    }

    #[test]
    fn test_natural_bounds_clamped_to_complexity_domain() {
        let records = vec![
            Arc::new(test_record(1, "Light", 7.0, 1.05, 1)),
            Arc::new(test_record(2, "Heavy", 7.5, 4.95, 2)),
        ];
        let bounds = Bounds::natural(&records);
        assert_close(bounds.bottom, 1.0);
        assert_close(bounds.top, 5.0);
    }

    #[test]
    fn test_natural_bounds_empty_fallback() {
        assert_eq!(Bounds::natural(&[]), Bounds::FALLBACK);
    }

    #[test]
    fn test_data_coords_maps_through_margins() {
        let zoom = ZoomController::new();
        let natural = Bounds {
            left: 0.0,
            right: 10.0,
            bottom: 0.0,
            top: 10.0,
        };
        let top_left = zoom.data_coords(pos2(40.0, 10.0), frame(), natural).unwrap();
        assert_close(top_left.quality, 0.0);
        assert_close(top_left.complexity, 10.0);

        let center = zoom.data_coords(pos2(90.0, 60.0), frame(), natural).unwrap();
        assert_close(center.quality, 5.0);
        assert_close(center.complexity, 5.0);
    }

    #[test]
    fn test_positions_in_margins_are_ignored() {
        let mut zoom = ZoomController::new();
        let natural = Bounds::FALLBACK;
        assert!(zoom.data_coords(pos2(10.0, 60.0), frame(), natural).is_none());
        assert!(zoom.data_coords(pos2(90.0, 135.0), frame(), natural).is_none());

        zoom.pointer_down(pos2(10.0, 60.0), frame(), natural);
        assert!(!zoom.pointer_up());
        assert!(!zoom.is_zoomed());
    }

    #[test]
    fn test_drag_commits_normalized_rectangle() {
        let mut zoom = ZoomController::new();
        let natural = Bounds::FALLBACK; // [6,9] x [1,5]

        let start = DataPoint { quality: 7.0, complexity: 2.0 };
        let end = DataPoint { quality: 7.5, complexity: 2.2 };
        zoom.pointer_down(pixel_for(start, natural), frame(), natural);
        zoom.pointer_moved(pixel_for(end, natural), frame(), natural);
        assert!(zoom.selection().is_some());
        assert!(zoom.pointer_up());

        let bounds = zoom.current_bounds(natural);
        // f32 pixels round-trip with a little error; the committed edges
        // must still be the min/max of the two endpoints.
        assert!((bounds.left - 7.0).abs() < 0.01);
        assert!((bounds.right - 7.5).abs() < 0.01);
        assert!((bounds.bottom - 2.0).abs() < 0.01);
        assert!((bounds.top - 2.2).abs() < 0.01);
        assert!(bounds.left <= bounds.right && bounds.bottom <= bounds.top);
    }

    #[test]
    fn test_reverse_drag_normalizes_corners() {
        let mut zoom = ZoomController::new();
        let natural = Bounds::FALLBACK;
        let start = DataPoint { quality: 8.5, complexity: 4.0 };
        let end = DataPoint { quality: 6.5, complexity: 1.5 };
        zoom.pointer_down(pixel_for(start, natural), frame(), natural);
        zoom.pointer_moved(pixel_for(end, natural), frame(), natural);
        assert!(zoom.pointer_up());
        let bounds = zoom.current_bounds(natural);
        assert!(bounds.left < bounds.right && bounds.bottom < bounds.top);
        assert!((bounds.left - 6.5).abs() < 0.01);
        assert!((bounds.top - 4.0).abs() < 0.01);
    }

    #[test]
    fn test_tiny_drag_never_zooms() {
        let mut zoom = ZoomController::new();
        let natural = Bounds::FALLBACK;
        let start = DataPoint { quality: 7.0, complexity: 2.0 };
        let end = DataPoint { quality: 7.01, complexity: 2.02 };
        zoom.pointer_down(pixel_for(start, natural), frame(), natural);
        zoom.pointer_moved(pixel_for(end, natural), frame(), natural);
        assert!(!zoom.pointer_up());
        assert!(!zoom.is_zoomed());
        assert_eq!(zoom.current_bounds(natural), natural);
    }

    #[test]
    fn test_click_without_move_never_zooms() {
        let mut zoom = ZoomController::new();
        let natural = Bounds::FALLBACK;
        zoom.pointer_down(pos2(90.0, 60.0), frame(), natural);
        assert!(!zoom.pointer_up());
        assert!(!zoom.is_zoomed());
    }

    #[test]
    fn test_pointer_leave_aborts_drag() {
        let mut zoom = ZoomController::new();
        let natural = Bounds::FALLBACK;
        let start = DataPoint { quality: 7.0, complexity: 2.0 };
        let end = DataPoint { quality: 8.0, complexity: 4.0 };
        zoom.pointer_down(pixel_for(start, natural), frame(), natural);
        zoom.pointer_moved(pixel_for(end, natural), frame(), natural);
        zoom.pointer_left();
        assert!(zoom.selection().is_none());
        assert!(!zoom.pointer_up());
        assert!(!zoom.is_zoomed());
    }

    #[test]
    fn test_zoomed_mapping_and_reset() {
        let mut zoom = ZoomController::new();
        let natural = Bounds::FALLBACK;
        let start = DataPoint { quality: 7.0, complexity: 2.0 };
        let end = DataPoint { quality: 7.5, complexity: 2.2 };
        zoom.pointer_down(pixel_for(start, natural), frame(), natural);
        zoom.pointer_moved(pixel_for(end, natural), frame(), natural);
        assert!(zoom.pointer_up());

        // Once zoomed, the plotted area spans the zoom rectangle, so the
        // center of the frame maps to the center of the zoom window.
        let center = zoom.data_coords(pos2(90.0, 60.0), frame(), natural).unwrap();
        assert!((center.quality - 7.25).abs() < 0.01);
        assert!((center.complexity - 2.1).abs() < 0.01);

        zoom.reset();
        assert!(!zoom.is_zoomed());
        assert_eq!(zoom.current_bounds(natural), natural);
    }
}
