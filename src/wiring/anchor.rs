//! Pin anchor positions in diagram space.
//!
//! A component box is `COMPONENT_WIDTH x COMPONENT_HEIGHT`. Every pin can be
//! attached on either the left edge (x = 0) or the right edge (x = width) at
//! `y = PIN_OFFSET_Y + PIN_SPACING * index`. Which edge a wire uses depends on
//! where the other end sits, so the choice is made per wire.

use crate::constants::{
    COMPONENT_HEIGHT, COMPONENT_WIDTH, FALLBACK_ANCHOR_OFFSET, PIN_OFFSET_Y, PIN_SPACING,
};
use crate::types::{Component, Connection, Point};
use std::collections::HashMap;

/// Edge of the component box a pin is attached on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinSide {
    Left,
    Right,
}

impl PinSide {
    #[inline]
    fn x_offset(self) -> f32 {
        match self {
            PinSide::Left => 0.0,
            PinSide::Right => COMPONENT_WIDTH,
        }
    }
}

/// Anchor of the pin at `index` on `side` of a component placed at `position`.
#[inline]
pub fn pin_slot(position: Point, index: usize, side: PinSide) -> Point {
    Point::new(
        position.x + side.x_offset(),
        position.y + PIN_OFFSET_Y + PIN_SPACING * index as f32,
    )
}

/// Bottom-centre point used when a wire names a pin the component lacks.
#[inline]
pub fn fallback_anchor(position: Point) -> Point {
    Point::new(
        position.x + COMPONENT_WIDTH / 2.0,
        position.y + COMPONENT_HEIGHT + FALLBACK_ANCHOR_OFFSET,
    )
}

/// Anchor for `pin`, falling back to the bottom centre if `pin` is unknown.
pub fn pin_anchor(position: Point, component: Option<&Component>, pin: &str, side: PinSide) -> Point {
    match component.and_then(|c| c.pin_index(pin)) {
        Some(index) => pin_slot(position, index, side),
        None => fallback_anchor(position),
    }
}

/// Sides used by a wire from a component at `start` to one at `end`.
///
/// When the end lies to the left of the start, the wire leaves the start on
/// its left edge and enters the end on its right edge; otherwise the other
/// way round.
pub fn wire_sides(start: Point, end: Point) -> (PinSide, PinSide) {
    if end.x < start.x {
        (PinSide::Left, PinSide::Right)
    } else {
        (PinSide::Right, PinSide::Left)
    }
}

/// Resolved start and end anchors of one wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireEndpoints {
    pub start: Point,
    pub end: Point,
}

/// Anchors for `connection`, or `None` if either end has no position yet.
pub fn wire_endpoints(
    connection: &Connection,
    components: &[Component],
    positions: &HashMap<String, Point>,
) -> Option<WireEndpoints> {
    let start_pos = *positions.get(&connection.from_component_id)?;
    let end_pos = *positions.get(&connection.to_component_id)?;

    let start_component = components.iter().find(|c| c.id == connection.from_component_id);
    let end_component = components.iter().find(|c| c.id == connection.to_component_id);

    let (start_side, end_side) = wire_sides(start_pos, end_pos);
    Some(WireEndpoints {
        start: pin_anchor(start_pos, start_component, &connection.from_pin, start_side),
        end: pin_anchor(end_pos, end_component, &connection.to_pin, end_side),
    })
}

/// Pin hit by `point` on a component at `position`, within `radius`.
///
/// Both edges are tested for every pin; the closest anchor wins.
pub fn pin_at(position: Point, pins: &[String], point: Point, radius: f32) -> Option<(String, PinSide)> {
    let mut best: Option<(f32, usize, PinSide)> = None;

    for index in 0..pins.len() {
        for side in [PinSide::Left, PinSide::Right] {
            let distance = pin_slot(position, index, side).distance_to(point);
            if distance > radius {
                continue;
            }
            if best.is_none_or(|(d, _, _)| distance < d) {
                best = Some((distance, index, side));
            }
        }
    }

    best.map(|(_, index, side)| (pins[index].clone(), side))
}
