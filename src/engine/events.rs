//! Events the engine reports to its owner.

use super::state::CanvasEngine;
use crate::types::{Component, Diagram, Point};

/// Something the owner has to act on.
///
/// The engine never mutates the owner's data directly. Structural edits are
/// reported as a complete new [`Diagram`]; the owner stores it (and may push
/// it onto an undo stack) and can hand it back through `set_diagram`.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// A wire was added, deleted or relabelled
    DiagramChanged(Diagram),
    /// An inventory component was dropped at `position` (diagram space,
    /// top-left corner of the box)
    ComponentDropped { component: Component, position: Point },
    /// A component was clicked without being dragged
    ComponentClicked(Component),
    /// Empty canvas was clicked without being panned
    BackgroundClicked,
}

impl CanvasEngine {
    pub(crate) fn emit(&mut self, event: CanvasEvent) {
        tracing::trace!(?event, "Queued canvas event");
        self.events.push_back(event);
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<CanvasEvent> {
        self.events.drain(..).collect()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Replace the stored snapshot after a structural edit and report it.
    pub(crate) fn commit_diagram(&mut self, diagram: Diagram) {
        tracing::info!(
            connections = diagram.connections.len(),
            "Diagram changed"
        );
        self.canvas.diagram = Some(diagram.clone());
        self.emit(CanvasEvent::DiagramChanged(diagram));
    }
}
