//! Pointer up handling - finalize gestures, create wires, report clicks.

use super::capture::PointerId;
use super::state::{InputState, WireDraft};
use super::{HitTarget, PointerEvent};
use crate::constants::{DEFAULT_WIRE_COLOR, DEFAULT_WIRE_DESCRIPTION};
use crate::engine::{CanvasEngine, CanvasEvent};
use crate::types::Connection;

impl CanvasEngine {
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) {
        if let Some(active) = self.pointer.capture.held() {
            if active != event.pointer_id {
                return;
            }
        }

        self.pointer.cursor = self.viewport.screen_to_diagram(event.position);

        match self.pointer.input.take() {
            InputState::Idle => {}
            InputState::Panning { moved, .. } => {
                if !moved {
                    self.canvas.selected = None;
                    self.emit(CanvasEvent::BackgroundClicked);
                }
            }
            InputState::DraggingNode {
                component_id,
                moved,
                ..
            } => {
                if moved {
                    tracing::debug!("Finished dragging {}", component_id);
                } else {
                    self.click_component(&component_id);
                }
            }
            InputState::DrawingWire(draft) => match self.hit_test(event.position) {
                HitTarget::Pin {
                    component_id, pin, ..
                } => {
                    self.finish_wire(&draft, &component_id, &pin);
                }
                _ => tracing::debug!("Wire released off a pin, discarding draft"),
            },
        }

        self.pointer.capture.release();
    }

    /// Pointer up delivered directly on a pin by a host that does its own pin
    /// hit testing.
    pub fn handle_pin_pointer_up(&mut self, pointer_id: PointerId, component_id: &str, pin: &str) {
        if let Some(active) = self.pointer.capture.held() {
            if active != pointer_id {
                return;
            }
        }
        if let InputState::DrawingWire(draft) = self.pointer.input.take() {
            self.finish_wire(&draft, component_id, pin);
        }
        self.pointer.capture.release();
    }

    /// The host cancelled the pointer (e.g. touch interrupted).
    pub fn handle_pointer_cancel(&mut self, pointer_id: PointerId) {
        if self.pointer.capture.held().is_some_and(|p| p != pointer_id) {
            return;
        }
        self.abort_gesture();
    }

    /// The pointer left the canvas. An active gesture ends without a release
    /// target, so a wire draft is discarded.
    pub fn handle_pointer_leave(&mut self, pointer_id: PointerId) {
        if self.pointer.capture.held().is_some_and(|p| p != pointer_id) {
            return;
        }
        self.ui.hovered = None;
        self.abort_gesture();
    }

    /// End the current gesture without creating anything or reporting clicks.
    pub(crate) fn abort_gesture(&mut self) {
        let previous = self.pointer.input.take();
        if previous.is_active() {
            tracing::debug!("Gesture ended without release target");
        }
        self.pointer.capture.release();
    }

    fn click_component(&mut self, component_id: &str) {
        let Some(component) = self
            .canvas
            .diagram
            .as_ref()
            .and_then(|d| d.component(component_id))
            .cloned()
        else {
            return;
        };
        self.canvas.selected = Some(component.id.clone());
        self.emit(CanvasEvent::ComponentClicked(component));
    }

    /// Append a wire from the draft's start pin to `end_component.end_pin`.
    /// Returns true if a wire was created.
    fn finish_wire(&mut self, draft: &WireDraft, end_component: &str, end_pin: &str) -> bool {
        let Some(diagram) = &self.canvas.diagram else {
            return false;
        };

        if draft.start_component == end_component && draft.start_pin == end_pin {
            tracing::debug!("Wire released on its start pin, cancelled");
            return false;
        }

        if diagram.has_connection(&draft.start_component, &draft.start_pin, end_component, end_pin) {
            tracing::warn!(
                "Ignoring duplicate wire {}.{} -> {}.{}",
                draft.start_component,
                draft.start_pin,
                end_component,
                end_pin
            );
            return false;
        }

        let connection = Connection::new(&draft.start_component, &draft.start_pin, end_component, end_pin)
            .with_description(DEFAULT_WIRE_DESCRIPTION)
            .with_color(DEFAULT_WIRE_COLOR);
        tracing::info!("Created wire {}", connection.key());

        let next = diagram.with_connection(connection);
        self.commit_diagram(next);
        true
    }
}
