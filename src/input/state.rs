//! Input state machine - one explicit state for every pointer gesture.
//!
//! Panning the canvas, dragging a component and drawing a wire are mutually
//! exclusive. Holding them in one enum means a half-finished wire can never
//! coexist with a node drag.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning              (pointer down on empty canvas)
//! Idle -> DraggingNode         (pointer down on a component body)
//! Idle -> DrawingWire          (pointer down on a pin)
//!
//! Any -> Idle                  (pointer up / cancel / leave - finalizes or discards)
//! ```

use crate::types::Point;

/// A wire being drawn from a pin to the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct WireDraft {
    pub start_component: String,
    pub start_pin: String,
    /// Diagram-space anchor of the start pin on the pressed column
    pub anchor: Point,
    /// Diagram-space cursor position
    pub cursor: Point,
}

/// Unified input state for all pointer interactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Canvas panning
    Panning {
        /// Last pointer position (screen) for delta calculation
        last_pos: Point,
        /// Pointer position at press, for click detection
        press_pos: Point,
        /// Travel exceeded the click slop at some point
        moved: bool,
    },

    /// Dragging a component body
    DraggingNode {
        component_id: String,
        /// Last pointer position (screen) for delta calculation
        last_pos: Point,
        /// Pointer position at press, for click detection
        press_pos: Point,
        /// Unsnapped diagram position the pointer deltas accumulate on
        free_pos: Point,
        /// Position last written to the store; a different live position
        /// means someone else moved the component mid-drag
        placed: Point,
        moved: bool,
    },

    /// Drawing a new wire from a pin
    DrawingWire(WireDraft),
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if any gesture is active
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_dragging_node(&self) -> bool {
        matches!(self, Self::DraggingNode { .. })
    }

    pub fn is_drawing_wire(&self) -> bool {
        matches!(self, Self::DrawingWire(_))
    }

    /// Get the component being dragged, if any
    pub fn dragged_component(&self) -> Option<&str> {
        match self {
            Self::DraggingNode { component_id, .. } => Some(component_id),
            _ => None,
        }
    }

    /// Get the wire draft, if drawing
    pub fn wire_draft(&self) -> Option<&WireDraft> {
        match self {
            Self::DrawingWire(draft) => Some(draft),
            _ => None,
        }
    }

    /// Reset to Idle, returning the previous state
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_panning(&mut self, pos: Point) {
        *self = Self::Panning {
            last_pos: pos,
            press_pos: pos,
            moved: false,
        };
    }

    pub fn start_dragging(&mut self, component_id: impl Into<String>, press_pos: Point, origin: Point) {
        *self = Self::DraggingNode {
            component_id: component_id.into(),
            last_pos: press_pos,
            press_pos,
            free_pos: origin,
            placed: origin,
            moved: false,
        };
    }

    pub fn start_wire(&mut self, component_id: impl Into<String>, pin: impl Into<String>, anchor: Point) {
        *self = Self::DrawingWire(WireDraft {
            start_component: component_id.into(),
            start_pin: pin.into(),
            anchor,
            cursor: anchor,
        });
    }

    /// Update the draft cursor (diagram space)
    pub fn set_wire_cursor(&mut self, cursor: Point) {
        if let Self::DrawingWire(draft) = self {
            draft.cursor = cursor;
        }
    }
}
