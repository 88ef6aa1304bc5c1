//! Scene building: placeholders, filtering, culling and wire colours.

use crate::helpers::{TestDiagramBuilder, TestEngine, ab_diagram};
use circuitboard::engine::ScenePlaceholder;
use circuitboard::settings::CanvasSettings;
use circuitboard::{CanvasControl, Connection, Diagram, HighlightOptions, Point, Rect};

#[test]
fn test_placeholder_without_diagram() {
    let t = TestEngine::new();
    let scene = t.engine.scene();
    assert_eq!(scene.placeholder, Some(ScenePlaceholder::NoDiagram));
    assert!(scene.nodes.is_empty());
    assert_eq!(scene.bounds, Rect::new(0.0, 0.0, 500.0, 300.0));
}

#[test]
fn test_placeholder_for_empty_diagram() {
    let t = TestEngine::with_diagram(Diagram::new("Empty"));
    assert_eq!(t.engine.scene().placeholder, Some(ScenePlaceholder::EmptyDiagram));
}

#[test]
fn test_nodes_in_diagram_order() {
    let t = TestEngine::with_diagram(ab_diagram());
    let scene = t.engine.scene();

    assert_eq!(scene.placeholder, None);
    let ids: Vec<&str> = scene.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);

    let a = scene.node("A").unwrap();
    assert_eq!(a.name, "Battery");
    assert_eq!(a.position, Point::new(100.0, 50.0));
    assert_eq!(a.pins[1].name, "GND");
    assert_eq!(a.pins[1].left, Point::new(100.0, 105.0));
    assert_eq!(a.pins[1].right, Point::new(240.0, 105.0));
}

#[test]
fn test_node_flags() {
    let mut t = TestEngine::with_diagram(ab_diagram());
    t.click_at(150.0, 120.0);
    t.drag_to(450.0, 300.0);
    t.press(450.0, 300.0);

    let scene = t.engine.scene();
    let a = scene.node("A").unwrap();
    let b = scene.node("B").unwrap();
    assert!(a.selected && !a.hovered && !a.dragging);
    assert!(!b.selected && b.hovered && b.dragging);
}

#[test]
fn test_search_filter_is_case_insensitive() {
    let mut t = TestEngine::with_diagram(ab_diagram());
    t.engine.set_search_query("ARDU");
    let scene = t.engine.scene();
    assert_eq!(scene.nodes.len(), 1);
    assert_eq!(scene.nodes[0].id, "B");
}

#[test]
fn test_type_filter_is_exact() {
    let mut t = TestEngine::with_diagram(ab_diagram());
    t.engine.set_type_filter(Some("power"));
    assert_eq!(t.engine.scene().nodes.len(), 1);

    t.engine.set_type_filter(Some("pow"));
    assert!(t.engine.scene().nodes.is_empty());

    t.engine.set_type_filter(None);
    assert_eq!(t.engine.scene().nodes.len(), 2);
}

#[test]
fn test_bounds_follow_filtered_nodes() {
    let mut t = TestEngine::with_diagram(ab_diagram());
    t.engine.set_search_query("battery");
    // A alone: (100,50)..(240,150) grown by 50
    assert_eq!(t.engine.scene().bounds, Rect::new(50.0, 0.0, 240.0, 200.0));
}

#[test]
fn test_wire_skipped_without_positions() {
    let diagram = TestDiagramBuilder::new()
        .with_component("A", "power", &["VCC"])
        .with_wire("A", "VCC", "ghost", "IN")
        .with_wire("A", "VCC", "A", "VCC")
        .build();
    let t = TestEngine::with_diagram(diagram);
    let scene = t.engine.scene();
    assert_eq!(scene.wires.len(), 1);
    assert_eq!(scene.wires[0].index, 1);
}

#[test]
fn test_unknown_pin_uses_fallback_anchor() {
    let diagram = TestDiagramBuilder::new()
        .with_component("A", "power", &["VCC"])
        .with_component("B", "microcontroller", &["VCC"])
        .with_wire("A", "VCC", "B", "D99")
        .build();
    let t = TestEngine::with_diagram(diagram);
    let wire = t.engine.scene().wires[0].clone();
    assert_eq!(wire.path.end(), Point::new(470.0, 360.0));
}

#[test]
fn test_wire_colour_precedence() {
    let diagram = TestDiagramBuilder::new()
        .with_component("A", "power", &["VCC", "GND", "X"])
        .with_component("B", "microcontroller", &["VCC", "GND", "Y"])
        .with_connection(Connection::new("A", "VCC", "B", "VCC").with_color("red"))
        .with_connection(Connection::new("A", "GND", "B", "GND").with_color("black"))
        .with_connection(Connection::new("A", "X", "B", "Y"))
        .build();
    let mut t = TestEngine::with_diagram(diagram);
    let mut settings = CanvasSettings::default();
    settings
        .wire_colors
        .insert("VCC".to_string(), "#ff0000".to_string());
    assert!(t.engine.apply_settings(settings));

    let colors = |t: &TestEngine| -> Vec<String> {
        t.engine.scene().wires.iter().map(|w| w.color.clone()).collect()
    };

    // Override beats the connection colour; empty colour falls back
    assert_eq!(colors(&t), vec!["#ff0000", "black", "#00f3ff"]);

    t.engine.highlight_wire(0, HighlightOptions::new());
    t.engine.highlight_wire(2, HighlightOptions::new().color("#abcdef"));
    assert_eq!(colors(&t), vec!["#ff00ff", "black", "#abcdef"]);

    let scene = t.engine.scene();
    assert!(scene.wires[0].highlighted && scene.wires[0].pulse);
    assert!(!scene.wires[1].highlighted);
}

#[test]
fn test_wire_label_position_is_midpoint() {
    let mut diagram = ab_diagram();
    diagram
        .connections
        .push(Connection::new("A", "VCC", "B", "VCC").with_description("5V rail"));
    let t = TestEngine::with_diagram(diagram);

    let wire = t.engine.scene().wire(0).cloned().unwrap();
    assert_eq!(wire.description, "5V rail");
    assert_eq!(wire.label_position, Point::new(320.0, 190.0));
}

#[test]
fn test_virtualization_culls_offscreen_nodes() {
    let diagram = TestDiagramBuilder::new()
        .with_peripherals(150)
        .with_wire("c0", "OUT", "c149", "OUT")
        .with_wire("c100", "OUT", "c149", "OUT")
        .with_wire("c1", "OUT", "c2", "OUT")
        .build();
    let t = TestEngine::with_diagram(diagram);
    let scene = t.engine.scene();

    // Peripherals stack at x=700, y=50+200i; the padded window reaches y=840
    let ids: Vec<&str> = scene.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["c0", "c1", "c2", "c3"]);

    let wires: Vec<usize> = scene.wires.iter().map(|w| w.index).collect();
    assert_eq!(wires, vec![0, 2]);
}

#[test]
fn test_virtualization_follows_pan() {
    let diagram = TestDiagramBuilder::new().with_peripherals(150).build();
    let mut t = TestEngine::with_diagram(diagram);
    t.engine.center_on_component("c100", None);

    let scene = t.engine.scene();
    assert!(scene.node("c100").is_some());
    assert!(scene.node("c0").is_none());
    assert!(scene.nodes.len() < 10);
}

#[test]
fn test_small_diagram_not_culled() {
    let diagram = TestDiagramBuilder::new().with_peripherals(100).build();
    let t = TestEngine::with_diagram(diagram);
    assert_eq!(t.engine.scene().nodes.len(), 100);
}

#[test]
fn test_no_culling_before_viewport_size_known() {
    let mut t = TestEngine::new();
    t.engine
        .set_viewport_bounds(Point::ZERO, circuitboard::Size::new(0.0, 0.0));
    t.engine
        .set_diagram(Some(TestDiagramBuilder::new().with_peripherals(120).build()));
    assert_eq!(t.engine.scene().nodes.len(), 120);
}

#[test]
fn test_drag_over_flag() {
    let mut t = TestEngine::with_diagram(ab_diagram());
    t.engine.handle_drag_over();
    assert!(t.engine.scene().drag_over);
    t.engine.handle_drag_leave();
    assert!(!t.engine.scene().drag_over);
}

#[test]
fn test_view_state_in_scene() {
    let mut t = TestEngine::with_diagram(ab_diagram());
    t.engine.set_zoom(1.5);
    t.engine.set_pan(Point::new(3.0, 4.0));
    let view = t.engine.scene().view;
    assert_eq!(view.zoom, 1.5);
    assert_eq!(view.pan, Point::new(3.0, 4.0));
}
