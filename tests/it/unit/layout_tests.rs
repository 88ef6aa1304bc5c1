//! Unit tests for auto-placement and diagram bounds.

use crate::helpers::TestDiagramBuilder;
use circuitboard::layout::{diagram_bounds, place_unpositioned, prune_orphans};
use circuitboard::{Point, Rect};
use std::collections::HashMap;

#[test]
fn test_placement_is_idempotent() {
    let diagram = TestDiagramBuilder::new()
        .with_component("bat", "power", &["VCC"])
        .with_component("mcu", "microcontroller", &["VCC"])
        .with_component("led", "led", &["A"])
        .build();
    let mut positions = HashMap::new();

    assert_eq!(place_unpositioned(&diagram.components, &mut positions), 3);
    let first = positions.clone();
    assert_eq!(place_unpositioned(&diagram.components, &mut positions), 0);
    assert_eq!(positions, first);
}

#[test]
fn test_existing_positions_kept() {
    let diagram = TestDiagramBuilder::new()
        .with_component("bat", "power", &["VCC"])
        .with_component("mcu", "microcontroller", &["VCC"])
        .build();
    let mut positions = HashMap::new();
    positions.insert("bat".to_string(), Point::new(-30.0, 900.0));

    assert_eq!(place_unpositioned(&diagram.components, &mut positions), 1);
    assert_eq!(positions["bat"], Point::new(-30.0, 900.0));
    // The cursor still starts at 50 and skips nothing for bat
    assert_eq!(positions["mcu"], Point::new(400.0, 50.0));
}

#[test]
fn test_same_lane_stacks_down() {
    let diagram = TestDiagramBuilder::new()
        .with_component("s1", "sensor", &[])
        .with_component("s2", "sensor", &[])
        .build();
    let mut positions = HashMap::new();
    place_unpositioned(&diagram.components, &mut positions);

    assert_eq!(positions["s1"], Point::new(700.0, 50.0));
    assert_eq!(positions["s2"], Point::new(700.0, 250.0));
}

#[test]
fn test_newly_added_component_skips_occupied_slot() {
    let mut builder = TestDiagramBuilder::new().with_component("bat", "power", &["VCC"]);
    let mut positions = HashMap::new();
    place_unpositioned(&builder.build().components, &mut positions);

    builder = TestDiagramBuilder::new()
        .with_component("bat", "power", &["VCC"])
        .with_component("bat2", "POWER", &["VCC"]);
    place_unpositioned(&builder.build().components, &mut positions);

    assert_eq!(positions["bat"], Point::new(100.0, 50.0));
    assert_eq!(positions["bat2"], Point::new(100.0, 250.0));
}

#[test]
fn test_prune_then_place() {
    let diagram = TestDiagramBuilder::new().with_component("keep", "power", &[]).build();
    let mut positions = HashMap::new();
    positions.insert("keep".to_string(), Point::new(1.0, 2.0));
    positions.insert("gone".to_string(), Point::new(100.0, 50.0));

    assert_eq!(prune_orphans(&diagram.components, &mut positions), 1);
    assert_eq!(place_unpositioned(&diagram.components, &mut positions), 0);
    assert_eq!(positions.len(), 1);
}

#[test]
fn test_bounds_cover_boxes_with_padding() {
    let diagram = TestDiagramBuilder::new()
        .with_component("a", "power", &[])
        .with_component("b", "sensor", &[])
        .build();
    let mut positions = HashMap::new();
    positions.insert("a".to_string(), Point::new(100.0, 50.0));
    positions.insert("b".to_string(), Point::new(700.0, 250.0));

    let bounds = diagram_bounds(&diagram.components, &positions);
    // (100,50)..(840,350) grown by 50
    assert_eq!(bounds, Rect::new(50.0, 0.0, 840.0, 400.0));
}
