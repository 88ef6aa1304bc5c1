//! Pointer down handling - gesture start and pointer capture.
//!
//! ## Performance Notes
//!
//! Pointer down is a hot path during interaction: hit testing goes through
//! the R-tree index. Enable profiling with `--features profiling` to see
//! timing.

use super::{HitTarget, PointerEvent};
use crate::engine::CanvasEngine;
use crate::profile_scope;
use crate::types::Point;
use crate::wiring::PinSide;
use crate::wiring::anchor::pin_slot;

impl CanvasEngine {
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_down");

        // One active pointer at a time
        if let Some(active) = self.pointer.capture.held() {
            if active != event.pointer_id {
                tracing::debug!("Ignoring {} while {} is active", event.pointer_id, active);
                return;
            }
            tracing::debug!("Repeated down from {}, ending stale gesture", active);
            self.abort_gesture();
        } else if self.pointer.input.is_active() {
            self.abort_gesture();
        }

        self.pointer.cursor = self.viewport.screen_to_diagram(event.position);

        match self.hit_test_profiled(event.position) {
            HitTarget::Pin {
                component_id,
                pin,
                side,
            } => {
                let Some(anchor) = self.pin_anchor_for(&component_id, &pin, side) else {
                    return;
                };
                tracing::debug!("Start wire from {}.{}", component_id, pin);
                self.pointer.input.start_wire(component_id, pin, anchor);
            }
            HitTarget::Component(component_id) => {
                let Some(&origin) = self.canvas.positions.get(&component_id) else {
                    return;
                };
                tracing::debug!("Start dragging {}", component_id);
                self.pointer
                    .input
                    .start_dragging(component_id, event.position, origin);
            }
            HitTarget::Canvas => {
                // Starting a pan closes the wire label editor
                self.ui.label_edit = None;
                self.pointer.input.start_panning(event.position);
            }
        }

        self.pointer.capture.capture(event.pointer_id);
    }

    fn pin_anchor_for(&self, component_id: &str, pin: &str, side: PinSide) -> Option<Point> {
        let position = *self.canvas.positions.get(component_id)?;
        let index = self
            .canvas
            .diagram
            .as_ref()?
            .component(component_id)?
            .pin_index(pin)?;
        Some(pin_slot(position, index, side))
    }
}
