//! Core types for the circuit canvas.
//!
//! This module defines the diagram snapshot supplied by the owner
//! (components and connections) and the small geometry types used
//! throughout the engine.

use crate::constants::{COMPONENT_HEIGHT, COMPONENT_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Geometry
// ============================================================================

/// A 2D point. Used for both screen space and diagram space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn delta_to(self, other: Point) -> (f32, f32) {
        (other.x - self.x, other.y - self.y)
    }

    #[inline]
    pub fn distance_to(self, other: Point) -> f32 {
        let (dx, dy) = self.delta_to(other);
        (dx * dx + dy * dy).sqrt()
    }

    /// Round both coordinates to the nearest multiple of `grid`.
    pub fn snapped(self, grid: f32) -> Self {
        if grid <= 0.0 {
            return self;
        }
        Self::new((self.x / grid).round() * grid, (self.y / grid).round() * grid)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of an area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// The box a component occupies when its top-left corner is `position`.
    pub fn component_at(position: Point) -> Self {
        Self::new(position.x, position.y, COMPONENT_WIDTH, COMPONENT_HEIGHT)
    }

    pub fn from_corners(min: Point, max: Point) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.right() >= other.x
            && self.x <= other.right()
            && self.bottom() >= other.y
            && self.y <= other.bottom()
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }
}

// ============================================================================
// Diagram Snapshot
// ============================================================================

/// A placeable part with named pins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Unique within a diagram; the join key for positions and highlights
    pub id: String,
    pub name: String,
    /// Category such as "power" or "microcontroller"
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default)]
    pub pins: Vec<String>,
}

impl Component {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        component_type: impl Into<String>,
        pins: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            component_type: component_type.into(),
            pins: pins.into_iter().map(Into::into).collect(),
        }
    }

    /// Index of `pin` in declaration order.
    pub fn pin_index(&self, pin: &str) -> Option<usize> {
        self.pins.iter().position(|p| p == pin)
    }
}

/// A wire between two component pins.
///
/// Stored directionally, but `(A, a, B, b)` and `(B, b, A, a)` describe the
/// same wire. Use [`Connection::key`] to compare wires.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub from_component_id: String,
    pub from_pin: String,
    pub to_component_id: String,
    pub to_pin: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
}

impl Connection {
    pub fn new(
        from_component_id: impl Into<String>,
        from_pin: impl Into<String>,
        to_component_id: impl Into<String>,
        to_pin: impl Into<String>,
    ) -> Self {
        Self {
            from_component_id: from_component_id.into(),
            from_pin: from_pin.into(),
            to_component_id: to_component_id.into(),
            to_pin: to_pin.into(),
            description: String::new(),
            color: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Direction-free identity of this wire.
    pub fn key(&self) -> ConnectionKey {
        ConnectionKey::new(
            &self.from_component_id,
            &self.from_pin,
            &self.to_component_id,
            &self.to_pin,
        )
    }

    /// True if this wire joins the two given pins, in either direction.
    pub fn joins(&self, a_id: &str, a_pin: &str, b_id: &str, b_pin: &str) -> bool {
        (self.from_component_id == a_id
            && self.from_pin == a_pin
            && self.to_component_id == b_id
            && self.to_pin == b_pin)
            || (self.from_component_id == b_id
                && self.from_pin == b_pin
                && self.to_component_id == a_id
                && self.to_pin == a_pin)
    }
}

/// One end of a wire: component id plus pin name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PinRef {
    pub component_id: String,
    pub pin: String,
}

impl PinRef {
    pub fn new(component_id: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            component_id: component_id.into(),
            pin: pin.into(),
        }
    }
}

/// Stable, undirected identity of a connection.
///
/// Endpoints are stored in sorted order so both directions of the same wire
/// produce equal keys. Wire highlights are keyed by this instead of by array
/// position, which would shift when connections are removed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionKey {
    low: PinRef,
    high: PinRef,
}

impl ConnectionKey {
    pub fn new(a_id: &str, a_pin: &str, b_id: &str, b_pin: &str) -> Self {
        let a = PinRef::new(a_id, a_pin);
        let b = PinRef::new(b_id, b_pin);
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn endpoints(&self) -> (&PinRef, &PinRef) {
        (&self.low, &self.high)
    }

    /// True if either end sits on the given component.
    pub fn touches(&self, component_id: &str) -> bool {
        self.low.component_id == component_id || self.high.component_id == component_id
    }
}

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}<->{}.{}",
            self.low.component_id, self.low.pin, self.high.component_id, self.high.pin
        )
    }
}

/// A complete diagram snapshot as produced by the owner.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub explanation: String,
}

impl Diagram {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn contains_component(&self, id: &str) -> bool {
        self.component(id).is_some()
    }

    /// True if a wire between the two pins already exists in either direction.
    pub fn has_connection(&self, a_id: &str, a_pin: &str, b_id: &str, b_pin: &str) -> bool {
        self.connections
            .iter()
            .any(|c| c.joins(a_id, a_pin, b_id, b_pin))
    }

    /// Copy of this diagram with `connection` appended.
    pub fn with_connection(&self, connection: Connection) -> Self {
        let mut next = self.clone();
        next.connections.push(connection);
        next
    }

    /// Connection at `index` together with its key.
    pub fn connection_key(&self, index: usize) -> Option<ConnectionKey> {
        self.connections.get(index).map(Connection::key)
    }
}
