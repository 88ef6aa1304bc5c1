//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestDiagramBuilder` - Builder pattern for creating test diagrams
//! - `TestEngine` - An engine on a manual clock with an 800x600 viewport
//! - Pointer gesture shortcuts (`press`, `drag_to`, `release`, `click_at`)

#![allow(dead_code)]

use circuitboard::input::{CaptureHost, PointerEvent, PointerId};
use circuitboard::{CanvasControl, CanvasEngine, CanvasEvent, Component, Connection, Diagram, ManualClock, Point, Size};
use parking_lot::Mutex;
use std::sync::Arc;

// ============================================================================
// TestDiagramBuilder - Builder pattern for creating test diagrams
// ============================================================================

/// Builder for creating test diagrams.
///
/// # Example
/// ```ignore
/// let diagram = TestDiagramBuilder::new()
///     .with_component("A", "power", &["VCC", "GND"])
///     .with_component("B", "microcontroller", &["VCC", "GND", "D13"])
///     .with_wire("A", "VCC", "B", "VCC")
///     .build();
/// ```
pub struct TestDiagramBuilder {
    diagram: Diagram,
}

impl Default for TestDiagramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDiagramBuilder {
    pub fn new() -> Self {
        Self {
            diagram: Diagram::new("Test"),
        }
    }

    /// Add a component whose name equals its id.
    pub fn with_component(self, id: &str, component_type: &str, pins: &[&str]) -> Self {
        self.with_named_component(id, id, component_type, pins)
    }

    pub fn with_named_component(mut self, id: &str, name: &str, component_type: &str, pins: &[&str]) -> Self {
        self.diagram
            .components
            .push(Component::new(id, name, component_type, pins.iter().copied()));
        self
    }

    /// Add a wire with the default description and no colour.
    pub fn with_wire(mut self, from: &str, from_pin: &str, to: &str, to_pin: &str) -> Self {
        self.diagram
            .connections
            .push(Connection::new(from, from_pin, to, to_pin).with_description("wire"));
        self
    }

    pub fn with_connection(mut self, connection: Connection) -> Self {
        self.diagram.connections.push(connection);
        self
    }

    /// Add `count` peripherals named `c0`, `c1`, ... with one pin each.
    pub fn with_peripherals(mut self, count: usize) -> Self {
        for i in 0..count {
            let id = format!("c{}", i);
            self.diagram
                .components
                .push(Component::new(id.clone(), id, "sensor", ["OUT"]));
        }
        self
    }

    pub fn build(self) -> Diagram {
        self.diagram
    }
}

/// Battery `A` (power lane, x=100) and controller `B` (controller lane,
/// x=400). After auto-placement A sits at (100, 50) and B at (400, 250).
pub fn ab_diagram() -> Diagram {
    TestDiagramBuilder::new()
        .with_named_component("A", "Battery", "power", &["VCC", "GND"])
        .with_named_component("B", "Arduino Uno", "microcontroller", &["VCC", "GND", "D13"])
        .build()
}

// ============================================================================
// TestEngine - engine with a controllable clock
// ============================================================================

/// An engine plus the manual clock driving its highlight timers.
pub struct TestEngine {
    pub engine: CanvasEngine,
    pub clock: ManualClock,
}

impl TestEngine {
    /// Engine with an 800x600 canvas at the screen origin and no diagram.
    pub fn new() -> Self {
        let clock = ManualClock::new();
        let mut engine = CanvasEngine::with_clock(Arc::new(clock.clone()));
        engine.set_viewport_bounds(Point::ZERO, Size::new(800.0, 600.0));
        Self { engine, clock }
    }

    pub fn with_diagram(diagram: Diagram) -> Self {
        let mut test = Self::new();
        test.engine.set_diagram(Some(diagram));
        test
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.engine.handle_pointer_down(&PointerEvent::at(x, y));
    }

    pub fn drag_to(&mut self, x: f32, y: f32) {
        self.engine.handle_pointer_move(&PointerEvent::at(x, y));
    }

    pub fn release(&mut self, x: f32, y: f32) {
        self.engine.handle_pointer_up(&PointerEvent::at(x, y));
    }

    /// Press and release at the same point.
    pub fn click_at(&mut self, x: f32, y: f32) {
        self.press(x, y);
        self.release(x, y);
    }

    /// Press at `from`, move to `to`, release at `to`.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.press(from.0, from.1);
        self.drag_to(to.0, to.1);
        self.release(to.0, to.1);
    }

    pub fn events(&mut self) -> Vec<CanvasEvent> {
        self.engine.drain_events()
    }

    pub fn position(&self, id: &str) -> Point {
        self.engine
            .component_position(id)
            .unwrap_or_else(|| panic!("no position for {}", id))
    }
}

/// Last `DiagramChanged` snapshot in `events`.
pub fn last_diagram(events: &[CanvasEvent]) -> Option<&Diagram> {
    events.iter().rev().find_map(|e| match e {
        CanvasEvent::DiagramChanged(diagram) => Some(diagram),
        _ => None,
    })
}

// ============================================================================
// Capture host that records calls
// ============================================================================

#[derive(Clone, Default)]
pub struct RecordingCapture(pub Arc<Mutex<Vec<String>>>);

impl RecordingCapture {
    pub fn calls(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

impl CaptureHost for RecordingCapture {
    fn set_capture(&mut self, pointer: PointerId) {
        self.0.lock().push(format!("set {}", pointer.0));
    }

    fn release_capture(&mut self, pointer: PointerId) {
        self.0.lock().push(format!("release {}", pointer.0));
    }
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
