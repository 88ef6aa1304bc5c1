//! Coordinate helpers shared by the input handlers.
//!
//! Plain screen <-> diagram conversion lives on [`crate::viewport::Viewport`];
//! these cover the gesture-specific formulas built on top of it.

use crate::constants::{COMPONENT_HEIGHT, COMPONENT_WIDTH};
use crate::types::Point;
use crate::viewport::Viewport;

/// Snap `point` to the grid when snapping is enabled.
#[inline]
pub fn maybe_snap(point: Point, snap: bool, grid: f32) -> Point {
    if snap { point.snapped(grid) } else { point }
}

/// Top-left corner that centres a component box on the screen point `screen`.
#[inline]
pub fn centered_component_origin(viewport: &Viewport, screen: Point) -> Point {
    viewport
        .screen_to_diagram(screen)
        .offset(-COMPONENT_WIDTH / 2.0, -COMPONENT_HEIGHT / 2.0)
}
