//! Wire routing between two anchors.
//!
//! Most wires are a horizontal-tangent cubic curve. A wire running backwards
//! (start right of end) between boxes that are horizontally close would curl
//! through both components, so it is drawn as an orthogonal staircase instead.

use crate::constants::{CURVE_TENSION, STAIRCASE_STUB, STAIRCASE_THRESHOLD};
use crate::types::Point;
use std::fmt;

/// Geometry of a routed wire in diagram space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WirePath {
    Curve {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Polyline through six points, first and last being the anchors
    Staircase([Point; 6]),
}

/// Route a wire from `start` to `end`. Pure; the same input always gives the
/// same path.
pub fn route(start: Point, end: Point) -> WirePath {
    let reversed = start.x > end.x;
    let span = (end.x - start.x).abs();

    if reversed && span < STAIRCASE_THRESHOLD {
        let mid_y = (start.y + end.y) / 2.0;
        return WirePath::Staircase([
            start,
            Point::new(start.x + STAIRCASE_STUB, start.y),
            Point::new(start.x + STAIRCASE_STUB, mid_y),
            Point::new(end.x - STAIRCASE_STUB, mid_y),
            Point::new(end.x - STAIRCASE_STUB, end.y),
            end,
        ]);
    }

    let d = span * CURVE_TENSION;
    let (c1x, c2x) = if reversed {
        (start.x - d, end.x + d)
    } else {
        (start.x + d, end.x - d)
    };

    WirePath::Curve {
        start,
        control1: Point::new(c1x, start.y),
        control2: Point::new(c2x, end.y),
        end,
    }
}

impl WirePath {
    pub fn start(&self) -> Point {
        match self {
            WirePath::Curve { start, .. } => *start,
            WirePath::Staircase(points) => points[0],
        }
    }

    pub fn end(&self) -> Point {
        match self {
            WirePath::Curve { end, .. } => *end,
            WirePath::Staircase(points) => points[5],
        }
    }

    pub fn is_staircase(&self) -> bool {
        matches!(self, WirePath::Staircase(_))
    }

    /// SVG path data (`M .. C ..` or `M .. L ..`).
    pub fn to_svg_path(&self) -> String {
        self.to_string()
    }

    /// Point halfway along the path, used to place wire labels.
    pub fn midpoint(&self) -> Point {
        match self {
            WirePath::Curve {
                start,
                control1,
                control2,
                end,
            } => {
                // Cubic Bezier at t = 0.5
                Point::new(
                    (start.x + 3.0 * control1.x + 3.0 * control2.x + end.x) / 8.0,
                    (start.y + 3.0 * control1.y + 3.0 * control2.y + end.y) / 8.0,
                )
            }
            WirePath::Staircase(points) => Point::new(
                (points[2].x + points[3].x) / 2.0,
                points[2].y,
            ),
        }
    }
}

impl fmt::Display for WirePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WirePath::Curve {
                start,
                control1,
                control2,
                end,
            } => write!(
                f,
                "M {} {} C {} {}, {} {}, {} {}",
                start.x, start.y, control1.x, control1.y, control2.x, control2.y, end.x, end.y
            ),
            WirePath::Staircase(points) => {
                write!(f, "M {} {}", points[0].x, points[0].y)?;
                for p in &points[1..] {
                    write!(f, " L {} {}", p.x, p.y)?;
                }
                Ok(())
            }
        }
    }
}
