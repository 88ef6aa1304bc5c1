//! Auto-placement of components that have no position yet.
//!
//! Components are stacked in three vertical lanes by type. One y cursor is
//! shared by all lanes and only ever moves down, so placing is a single pass
//! in component-list order.

use crate::constants::{
    BOUNDS_PADDING, COMPONENT_HEIGHT, COMPONENT_WIDTH, DEFAULT_BOUNDS_SIZE, LANE_CONTROLLER_X,
    LANE_PERIPHERAL_X, LANE_POWER_X, LAYOUT_COLLISION_DISTANCE, LAYOUT_MAX_PROBES,
    LAYOUT_START_Y, LAYOUT_STEP_Y,
};
use crate::spatial_index::SpatialIndex;
use crate::types::{Component, Point, Rect};
use std::collections::{HashMap, HashSet};

/// Column a component type is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Power,
    Controller,
    Peripheral,
}

impl Lane {
    pub fn for_type(component_type: &str) -> Self {
        if component_type.eq_ignore_ascii_case("power") {
            Lane::Power
        } else if component_type.eq_ignore_ascii_case("microcontroller") {
            Lane::Controller
        } else {
            Lane::Peripheral
        }
    }

    pub fn x(self) -> f32 {
        match self {
            Lane::Power => LANE_POWER_X,
            Lane::Controller => LANE_CONTROLLER_X,
            Lane::Peripheral => LANE_PERIPHERAL_X,
        }
    }
}

fn collides(positions: &HashMap<String, Point>, candidate: Point) -> bool {
    positions.values().any(|p| {
        (p.x - candidate.x).abs() < LAYOUT_COLLISION_DISTANCE
            && (p.y - candidate.y).abs() < LAYOUT_COLLISION_DISTANCE
    })
}

/// Give every component without a position a slot in its lane.
///
/// Existing positions are never touched. Returns the number of components
/// placed, so a second call with nothing new returns 0.
pub fn place_unpositioned(components: &[Component], positions: &mut HashMap<String, Point>) -> usize {
    let mut y = LAYOUT_START_Y;
    let mut placed = 0;

    for component in components {
        if positions.contains_key(&component.id) {
            continue;
        }

        let x = Lane::for_type(&component.component_type).x();
        let mut probes = 0;
        while probes < LAYOUT_MAX_PROBES && collides(positions, Point::new(x, y)) {
            y += LAYOUT_STEP_Y;
            probes += 1;
        }
        if probes == LAYOUT_MAX_PROBES {
            tracing::debug!("No free slot for {} after {} probes", component.id, probes);
        }

        positions.insert(component.id.clone(), Point::new(x, y));
        y += LAYOUT_STEP_Y;
        placed += 1;
    }

    if placed > 0 {
        tracing::debug!("Placed {} component(s)", placed);
    }
    placed
}

/// Drop positions whose component is no longer in the diagram.
pub fn prune_orphans(components: &[Component], positions: &mut HashMap<String, Point>) -> usize {
    let live: HashSet<&str> = components.iter().map(|c| c.id.as_str()).collect();
    let before = positions.len();
    positions.retain(|id, _| live.contains(id.as_str()));
    before - positions.len()
}

/// Bounding box of all positioned components, padded for display.
///
/// Falls back to a fixed box at the origin when nothing is positioned.
pub fn diagram_bounds<'a>(
    components: impl IntoIterator<Item = &'a Component>,
    positions: &HashMap<String, Point>,
) -> Rect {
    let mut min = Point::new(f32::INFINITY, f32::INFINITY);
    let mut max = Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
    let mut any = false;

    for pos in components.into_iter().filter_map(|c| positions.get(&c.id)) {
        any = true;
        min.x = min.x.min(pos.x);
        min.y = min.y.min(pos.y);
        max.x = max.x.max(pos.x + COMPONENT_WIDTH);
        max.y = max.y.max(pos.y + COMPONENT_HEIGHT);
    }

    if !any {
        let (width, height) = DEFAULT_BOUNDS_SIZE;
        return Rect::new(0.0, 0.0, width, height);
    }
    Rect::from_corners(min, max).inflate(BOUNDS_PADDING)
}

/// Ids of components whose box intersects `visible`.
pub fn visible_components(index: &SpatialIndex, visible: Rect) -> HashSet<String> {
    index.query_rect(visible).into_iter().collect()
}
