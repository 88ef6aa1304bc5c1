//! Wire editing - delete a wire, edit its label.

use super::state::CanvasEngine;
use crate::types::{ConnectionKey, Point};
use crate::wiring::wire_endpoints;

/// An open wire label editor.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEdit {
    /// Identity of the connection being edited
    pub key: ConnectionKey,
    /// Current index of that connection in the diagram
    pub index: usize,
    /// Current editor text
    pub text: String,
    /// Diagram-space point the editor is shown at (wire midpoint)
    pub position: Point,
}

impl CanvasEngine {
    pub fn label_edit(&self) -> Option<&LabelEdit> {
        self.ui.label_edit.as_ref()
    }

    /// Remove the connection at `index`. Returns false for an unknown index.
    pub fn delete_wire(&mut self, index: usize) -> bool {
        let Some(diagram) = &self.canvas.diagram else {
            return false;
        };
        if index >= diagram.connections.len() {
            tracing::warn!("delete_wire: no connection at index {}", index);
            return false;
        }

        let mut next = diagram.clone();
        let removed = next.connections.remove(index);
        tracing::info!("Deleted wire {}", removed.key());

        self.highlights.clear_wire(Some(&removed.key()));
        self.commit_diagram(next);
        self.sync_label_edit();
        true
    }

    /// Open the label editor for the connection at `index`, prefilled with its
    /// description and placed halfway between its anchors.
    pub fn begin_wire_label_edit(&mut self, index: usize) -> bool {
        let Some(diagram) = &self.canvas.diagram else {
            return false;
        };
        let Some(connection) = diagram.connections.get(index) else {
            return false;
        };
        let Some(ends) = wire_endpoints(connection, &diagram.components, &self.canvas.positions) else {
            return false;
        };

        self.ui.label_edit = Some(LabelEdit {
            key: connection.key(),
            index,
            text: connection.description.clone(),
            position: Point::new((ends.start.x + ends.end.x) / 2.0, (ends.start.y + ends.end.y) / 2.0),
        });
        true
    }

    pub fn update_wire_label(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.ui.label_edit.as_mut() {
            edit.text = text.into();
        }
    }

    /// Write the editor text into the connection's description and close the
    /// editor.
    pub fn save_wire_label(&mut self) -> bool {
        let Some(edit) = self.ui.label_edit.take() else {
            return false;
        };
        let Some(diagram) = &self.canvas.diagram else {
            return false;
        };
        let Some(index) = diagram.connections.iter().position(|c| c.key() == edit.key) else {
            tracing::warn!("save_wire_label: wire {} no longer exists", edit.key);
            return false;
        };

        let mut next = diagram.clone();
        next.connections[index].description = edit.text;
        self.commit_diagram(next);
        true
    }

    pub fn cancel_wire_label_edit(&mut self) {
        self.ui.label_edit = None;
    }

    /// Point an open editor at its wire's current index, or close it when
    /// the wire is gone.
    pub(crate) fn sync_label_edit(&mut self) {
        let Some(edit) = self.ui.label_edit.as_mut() else {
            return;
        };
        let index = self
            .canvas
            .diagram
            .as_ref()
            .and_then(|d| d.connections.iter().position(|c| c.key() == edit.key));
        match index {
            Some(index) => edit.index = index,
            None => {
                tracing::debug!("Edited wire {} removed, closing label editor", edit.key);
                self.ui.label_edit = None;
            }
        }
    }
}
