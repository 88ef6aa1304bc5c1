//! Canvas transformations - wheel zoom, keyboard navigation, inventory drops.

use super::coords::{centered_component_origin, maybe_snap};
use crate::constants::KEYBOARD_ZOOM_STEP;
use crate::engine::{CanvasEngine, CanvasEvent};
use crate::error::{CanvasError, CanvasResult};
use crate::types::{Component, Point};

/// Navigation keys the canvas responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// `+` / `=`
    ZoomIn,
    /// `-`
    ZoomOut,
    /// Cmd/Ctrl + `0`
    ResetView,
}

impl NavKey {
    /// Unit direction of an arrow key, `None` for the others.
    fn direction(self) -> Option<(f32, f32)> {
        match self {
            NavKey::ArrowUp => Some((0.0, -1.0)),
            NavKey::ArrowDown => Some((0.0, 1.0)),
            NavKey::ArrowLeft => Some((-1.0, 0.0)),
            NavKey::ArrowRight => Some((1.0, 0.0)),
            _ => None,
        }
    }
}

impl CanvasEngine {
    /// Scroll wheel: positive `delta_y` zooms out one step, negative zooms in.
    /// Returns the resulting zoom.
    pub fn handle_wheel(&mut self, delta_y: f32) -> f32 {
        let step = self.settings.data.zoom_step;
        if delta_y > 0.0 {
            self.viewport.zoom_by(-step)
        } else if delta_y < 0.0 {
            self.viewport.zoom_by(step)
        } else {
            self.viewport.zoom()
        }
    }

    /// Keyboard navigation. Arrow keys pan the view when nothing is selected
    /// and nudge the selected component otherwise (larger steps with shift).
    /// Returns false if the key had no effect.
    pub fn handle_key(&mut self, key: NavKey, shift: bool) -> bool {
        match key {
            NavKey::ZoomIn => {
                self.viewport.zoom_by(KEYBOARD_ZOOM_STEP);
                true
            }
            NavKey::ZoomOut => {
                self.viewport.zoom_by(-KEYBOARD_ZOOM_STEP);
                true
            }
            NavKey::ResetView => {
                self.viewport.reset();
                true
            }
            arrow => {
                let Some((dx, dy)) = arrow.direction() else {
                    return false;
                };
                match self.canvas.selected.clone() {
                    None => {
                        let step = self.settings.data.pan_step;
                        self.viewport.pan_by(dx * step, dy * step);
                        true
                    }
                    Some(id) => {
                        let Some(&position) = self.canvas.positions.get(&id) else {
                            return false;
                        };
                        let step = if shift {
                            self.settings.data.nudge_step_large
                        } else {
                            self.settings.data.nudge_step
                        };
                        self.move_component(&id, position.offset(dx * step, dy * step));
                        true
                    }
                }
            }
        }
    }

    /// An inventory item is being dragged over the canvas.
    pub fn handle_drag_over(&mut self) {
        self.ui.drag_over = true;
    }

    pub fn handle_drag_leave(&mut self) {
        self.ui.drag_over = false;
    }

    /// Drop an inventory item. `payload` is the JSON-encoded component and
    /// `screen` the drop point. The component box is centred on the drop
    /// point; the owner receives [`CanvasEvent::ComponentDropped`] and decides
    /// whether to add it.
    pub fn handle_drop(&mut self, payload: &str, screen: Point) -> CanvasResult<Point> {
        self.ui.drag_over = false;

        let component: Component = serde_json::from_str(payload).map_err(|e| {
            tracing::warn!("Rejected drop payload: {}", e);
            CanvasError::InvalidDropPayload(e.to_string())
        })?;

        let position = maybe_snap(
            centered_component_origin(&self.viewport, screen),
            self.settings.data.snap_to_grid,
            self.settings.data.grid_size,
        );
        tracing::info!("Dropped {} at {}", component.id, position);
        self.emit(CanvasEvent::ComponentDropped {
            component,
            position,
        });
        Ok(position)
    }
}
