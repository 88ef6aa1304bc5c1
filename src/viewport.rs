//! Viewport and coordinate transformation for the canvas.
//!
//! Handles conversion between screen coordinates (pixels, relative to the
//! window) and diagram coordinates. The render transform inside the canvas
//! element is `translate(pan) scale(zoom)`, so:
//!
//! ```text
//! diagram_x = (screen_x - origin_x - pan_x) / zoom
//! screen_x  = diagram_x * zoom + pan_x + origin_x
//! ```
//!
//! Zoom is clamped to one range, [`MIN_ZOOM`]..=[`MAX_ZOOM`], on every path
//! that changes it. Pan is unbounded.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::types::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Pan and zoom as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub pan: Point,
    pub zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan: Point::ZERO,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Clamp a zoom value into the canonical range.
#[inline]
pub fn clamp_zoom(zoom: f32) -> f32 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Viewport transformation state.
#[derive(Debug, Clone)]
pub struct Viewport {
    pan: Point,
    zoom: f32,
    /// Top-left corner of the canvas element on screen
    origin: Point,
    /// Size of the canvas element on screen
    size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            pan: Point::ZERO,
            zoom: DEFAULT_ZOOM,
            origin: Point::ZERO,
            size: Size::default(),
        }
    }

    pub fn state(&self) -> ViewState {
        ViewState {
            pan: self.pan,
            zoom: self.zoom,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom level, clamped. Non-finite values are ignored.
    /// Returns the zoom actually applied.
    pub fn set_zoom(&mut self, zoom: f32) -> f32 {
        if zoom.is_finite() {
            self.zoom = clamp_zoom(zoom);
        }
        self.zoom
    }

    /// Change the zoom by `delta` (positive zooms in), clamped.
    pub fn zoom_by(&mut self, delta: f32) -> f32 {
        self.set_zoom(self.zoom + delta)
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan = self.pan.offset(dx, dy);
    }

    /// Back to pan (0, 0) and zoom 1.
    pub fn reset(&mut self) {
        self.pan = Point::ZERO;
        self.zoom = DEFAULT_ZOOM;
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Record where the canvas element sits on screen (typically on resize).
    pub fn set_bounds(&mut self, origin: Point, size: Size) {
        self.origin = origin;
        self.size = size;
    }

    #[inline]
    pub fn screen_to_diagram(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.origin.x - self.pan.x) / self.zoom,
            (screen.y - self.origin.y - self.pan.y) / self.zoom,
        )
    }

    #[inline]
    pub fn diagram_to_screen(&self, diagram: Point) -> Point {
        Point::new(
            diagram.x * self.zoom + self.pan.x + self.origin.x,
            diagram.y * self.zoom + self.pan.y + self.origin.y,
        )
    }

    /// Convert a screen-space delta to diagram space (for drag operations).
    #[inline]
    pub fn delta_to_diagram(&self, dx: f32, dy: f32) -> (f32, f32) {
        (dx / self.zoom, dy / self.zoom)
    }

    /// Diagram-space rectangle currently visible, grown by `padding`.
    /// `None` until the canvas size is known.
    pub fn visible_rect(&self, padding: f32) -> Option<Rect> {
        if self.size.is_empty() {
            return None;
        }
        let min = Point::new(-self.pan.x / self.zoom, -self.pan.y / self.zoom);
        let max = Point::new(
            (self.size.width - self.pan.x) / self.zoom,
            (self.size.height - self.pan.y) / self.zoom,
        );
        Some(Rect::from_corners(min, max).inflate(padding))
    }

    /// Pan so `target` (diagram space) renders at the canvas centre,
    /// optionally setting the zoom first. Does nothing and returns false
    /// while the canvas size is unknown.
    pub fn center_on(&mut self, target: Point, zoom: Option<f32>) -> bool {
        if self.size.is_empty() {
            return false;
        }
        if let Some(z) = zoom {
            self.set_zoom(z);
        }
        self.pan = Point::new(
            self.size.width / 2.0 - target.x * self.zoom,
            self.size.height / 2.0 - target.y * self.zoom,
        );
        true
    }
}
