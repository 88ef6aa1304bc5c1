//! Pointer, wheel, keyboard and drop input for the canvas.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current gesture. The handlers are `impl CanvasEngine` blocks split by
//! event type.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `capture` - RAII pointer capture over a host-supplied mechanism
//! - `hit_test` - Pin / component / canvas hit testing
//! - `pointer_down` - Gesture start
//! - `drag` - Pointer move (pan, node drag, wire draft)
//! - `pointer_up` - Finalize gestures, wire creation, clicks, cancel/leave
//! - `transform` - Wheel zoom, keyboard navigation, inventory drops
//! - `coords` - Gesture coordinate formulas

pub mod capture;
pub mod coords;
mod drag;
mod pointer_down;
mod pointer_up;
mod state;
mod transform;

use crate::types::Point;

pub use capture::{CaptureHost, NoCapture, PointerCapture, PointerId};
pub use hit_test::HitTarget;
pub use state::{InputState, WireDraft};
pub use transform::NavKey;

/// A pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(pointer_id: PointerId, position: Point) -> Self {
        Self {
            pointer_id,
            position,
        }
    }

    /// Primary mouse pointer at `(x, y)`.
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(PointerId(1), Point::new(x, y))
    }
}
