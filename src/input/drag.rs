//! Pointer move handling - pan, node drag and wire draft updates.

use super::PointerEvent;
use super::coords::maybe_snap;
use super::state::InputState;
use crate::engine::CanvasEngine;
use crate::types::Point;

impl CanvasEngine {
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        if let Some(active) = self.pointer.capture.held() {
            if active != event.pointer_id {
                return;
            }
        }

        let diagram_pos = self.viewport.screen_to_diagram(event.position);
        self.pointer.cursor = diagram_pos;
        if self.pointer.input.is_idle() {
            self.ui.hovered = self.component_under(diagram_pos);
            return;
        }

        let slop = self.settings.data.click_slop;
        match &mut self.pointer.input {
            InputState::Idle => {}
            InputState::Panning {
                last_pos,
                press_pos,
                moved,
            } => {
                let (dx, dy) = last_pos.delta_to(event.position);
                *last_pos = event.position;
                *moved |= press_pos.distance_to(event.position) > slop;
                self.viewport.pan_by(dx, dy);
            }
            InputState::DraggingNode {
                component_id,
                last_pos,
                press_pos,
                free_pos,
                placed,
                moved,
            } => {
                let (dx, dy) = last_pos.delta_to(event.position);
                *last_pos = event.position;
                *moved |= press_pos.distance_to(event.position) > slop;

                let Some(&live) = self.canvas.positions.get(component_id.as_str()) else {
                    return;
                };
                // Moved by automation or the keyboard since our last write
                if live != *placed {
                    *free_pos = live;
                }
                let zoom = self.viewport.zoom();
                *free_pos = free_pos.offset(dx / zoom, dy / zoom);
                *placed = maybe_snap(
                    *free_pos,
                    self.settings.data.snap_to_grid,
                    self.settings.data.grid_size,
                );
                let position = *placed;
                let component_id = component_id.clone();
                self.move_component(&component_id, position);
            }
            InputState::DrawingWire(draft) => {
                draft.cursor = diagram_pos;
            }
        }
    }

    /// Topmost component whose box contains `point` (diagram space).
    pub(crate) fn component_under(&self, point: Point) -> Option<String> {
        let diagram = self.canvas.diagram.as_ref()?;
        let under = self.canvas.index.query_point(point);
        diagram
            .components
            .iter()
            .rev()
            .find(|c| under.contains(&c.id))
            .map(|c| c.id.clone())
    }
}
