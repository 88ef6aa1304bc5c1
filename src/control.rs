//! Programmatic control of the canvas.
//!
//! Automation layers (an assistant, a script, the minimap) drive the view
//! through [`CanvasControl`] instead of synthesizing pointer input. The trait
//! is implemented by [`CanvasEngine`] itself and by [`SharedCanvas`], a
//! cloneable handle that serializes calls from other threads.
//!
//! Unknown component ids and wire indices are ignored: getters return
//! `None`, setters return `false` or `None` and change nothing.

use crate::constants::{COMPONENT_HEIGHT, COMPONENT_WIDTH};
use crate::engine::CanvasEngine;
use crate::highlight::{HighlightOptions, TimerHandle};
use crate::types::Point;
use parking_lot::{Mutex, MutexGuard};
use std::collections::HashMap;
use std::sync::Arc;

/// Imperative view and highlight control.
pub trait CanvasControl {
    /// Set the zoom, clamped to the canonical range. Returns the applied zoom.
    fn set_zoom(&mut self, zoom: f32) -> f32;
    fn zoom(&self) -> f32;

    fn set_pan(&mut self, pan: Point);
    fn pan(&self) -> Point;

    /// Pan back to the origin at zoom 1.
    fn reset_view(&mut self);

    /// Centre the view on a component's box, optionally setting the zoom
    /// first. Returns false for an unknown or unplaced component, or while
    /// the canvas size is unknown.
    fn center_on_component(&mut self, component_id: &str, zoom: Option<f32>) -> bool;

    /// Centre the view on a diagram-space point at the current zoom.
    fn center_on_point(&mut self, point: Point);

    fn highlight_component(&mut self, component_id: &str, options: HighlightOptions) -> Option<TimerHandle>;

    /// Clear one component highlight, or all with `None`.
    fn clear_highlight(&mut self, component_id: Option<&str>) -> usize;

    /// Highlight the connection at `index` of the current diagram.
    fn highlight_wire(&mut self, index: usize, options: HighlightOptions) -> Option<TimerHandle>;

    /// Clear one wire highlight by connection index, or all with `None`.
    fn clear_wire_highlight(&mut self, index: Option<usize>) -> usize;

    fn component_position(&self, component_id: &str) -> Option<Point>;

    /// Move a component. Returns false if it is not in the diagram.
    fn set_component_position(&mut self, component_id: &str, position: Point) -> bool;

    /// Snapshot of every component position.
    fn all_component_positions(&self) -> HashMap<String, Point>;

    /// Apply `query` as the search filter, then hover and centre the first
    /// matching component. Returns its id. A blank query clears the hover.
    fn focus_search(&mut self, query: &str) -> Option<String>;
}

#[inline]
fn box_center(position: Point) -> Point {
    position.offset(COMPONENT_WIDTH / 2.0, COMPONENT_HEIGHT / 2.0)
}

impl CanvasControl for CanvasEngine {
    fn set_zoom(&mut self, zoom: f32) -> f32 {
        self.viewport.set_zoom(zoom)
    }

    fn zoom(&self) -> f32 {
        self.viewport.zoom()
    }

    fn set_pan(&mut self, pan: Point) {
        self.viewport.set_pan(pan);
    }

    fn pan(&self) -> Point {
        self.viewport.pan()
    }

    fn reset_view(&mut self) {
        self.viewport.reset();
    }

    fn center_on_component(&mut self, component_id: &str, zoom: Option<f32>) -> bool {
        let Some(&position) = self.canvas.positions.get(component_id) else {
            tracing::warn!("center_on_component: unknown component {}", component_id);
            return false;
        };
        if !self.viewport.center_on(box_center(position), zoom) {
            tracing::debug!("center_on_component: canvas size not known yet");
            return false;
        }
        true
    }

    fn center_on_point(&mut self, point: Point) {
        self.viewport.center_on(point, None);
    }

    fn highlight_component(&mut self, component_id: &str, options: HighlightOptions) -> Option<TimerHandle> {
        let known = self
            .canvas
            .diagram
            .as_ref()
            .is_some_and(|d| d.contains_component(component_id));
        if !known {
            tracing::warn!("highlight_component: unknown component {}", component_id);
            return None;
        }
        let now = self.clock.now();
        self.highlights.highlight_component(component_id, &options, now)
    }

    fn clear_highlight(&mut self, component_id: Option<&str>) -> usize {
        self.highlights.clear_component(component_id)
    }

    fn highlight_wire(&mut self, index: usize, options: HighlightOptions) -> Option<TimerHandle> {
        let Some(key) = self.canvas.diagram.as_ref().and_then(|d| d.connection_key(index)) else {
            tracing::warn!("highlight_wire: no connection at index {}", index);
            return None;
        };
        let now = self.clock.now();
        self.highlights.highlight_wire(key, &options, now)
    }

    fn clear_wire_highlight(&mut self, index: Option<usize>) -> usize {
        let Some(index) = index else {
            return self.highlights.clear_wire(None);
        };
        match self.canvas.diagram.as_ref().and_then(|d| d.connection_key(index)) {
            Some(key) => self.highlights.clear_wire(Some(&key)),
            None => 0,
        }
    }

    fn component_position(&self, component_id: &str) -> Option<Point> {
        self.canvas.positions.get(component_id).copied()
    }

    fn set_component_position(&mut self, component_id: &str, position: Point) -> bool {
        let known = self
            .canvas
            .diagram
            .as_ref()
            .is_some_and(|d| d.contains_component(component_id));
        if !known {
            return false;
        }
        self.move_component(component_id, position);
        true
    }

    fn all_component_positions(&self) -> HashMap<String, Point> {
        self.canvas.positions.clone()
    }

    fn focus_search(&mut self, query: &str) -> Option<String> {
        self.ui.search_query = query.to_string();

        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            self.ui.hovered = None;
            return None;
        }

        let diagram = self.canvas.diagram.as_ref()?;
        let found = diagram
            .components
            .iter()
            .find(|c| self.passes_filters(c) && c.name.to_lowercase().contains(&needle))
            .map(|c| c.id.clone())?;

        tracing::debug!("Search '{}' focused {}", query, found);
        if let Some(&position) = self.canvas.positions.get(&found) {
            self.viewport.center_on(box_center(position), None);
        }
        self.ui.hovered = Some(found.clone());
        Some(found)
    }
}

/// Thread-safe handle to an engine.
///
/// Every call locks the engine for its duration, so automation running on
/// another thread never observes a half-applied gesture.
#[derive(Clone)]
pub struct SharedCanvas {
    inner: Arc<Mutex<CanvasEngine>>,
}

impl SharedCanvas {
    pub fn new(engine: CanvasEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Lock the engine for direct access (input handlers, scene building).
    pub fn lock(&self) -> MutexGuard<'_, CanvasEngine> {
        self.inner.lock()
    }
}

impl CanvasControl for SharedCanvas {
    fn set_zoom(&mut self, zoom: f32) -> f32 {
        self.lock().set_zoom(zoom)
    }

    fn zoom(&self) -> f32 {
        self.lock().zoom()
    }

    fn set_pan(&mut self, pan: Point) {
        self.lock().set_pan(pan);
    }

    fn pan(&self) -> Point {
        self.lock().pan()
    }

    fn reset_view(&mut self) {
        self.lock().reset_view();
    }

    fn center_on_component(&mut self, component_id: &str, zoom: Option<f32>) -> bool {
        self.lock().center_on_component(component_id, zoom)
    }

    fn center_on_point(&mut self, point: Point) {
        self.lock().center_on_point(point);
    }

    fn highlight_component(&mut self, component_id: &str, options: HighlightOptions) -> Option<TimerHandle> {
        self.lock().highlight_component(component_id, options)
    }

    fn clear_highlight(&mut self, component_id: Option<&str>) -> usize {
        self.lock().clear_highlight(component_id)
    }

    fn highlight_wire(&mut self, index: usize, options: HighlightOptions) -> Option<TimerHandle> {
        self.lock().highlight_wire(index, options)
    }

    fn clear_wire_highlight(&mut self, index: Option<usize>) -> usize {
        self.lock().clear_wire_highlight(index)
    }

    fn component_position(&self, component_id: &str) -> Option<Point> {
        self.lock().component_position(component_id)
    }

    fn set_component_position(&mut self, component_id: &str, position: Point) -> bool {
        self.lock().set_component_position(component_id, position)
    }

    fn all_component_positions(&self) -> HashMap<String, Point> {
        self.lock().all_component_positions()
    }

    fn focus_search(&mut self, query: &str) -> Option<String> {
        self.lock().focus_search(query)
    }
}
