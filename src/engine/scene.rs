//! Scene building - the renderable description of the canvas.
//!
//! The engine never draws. Hosts call [`CanvasEngine::scene`] after each
//! batch of input and paint what it returns: nodes in diagram order (later
//! nodes on top), wires as routed paths, and the transient overlays.
//!
//! Large diagrams are culled to the visible rect plus a margin so hosts do
//! not lay out hundreds of off-screen boxes.

use super::state::CanvasEngine;
use super::wire_editing::LabelEdit;
use crate::constants::{CULLING_MARGIN, DEFAULT_WIRE_COLOR};
use crate::layout::{diagram_bounds, visible_components};
use crate::profile_scope;
use crate::types::{Component, ConnectionKey, Point, Rect};
use crate::viewport::ViewState;
use crate::wiring::anchor::pin_slot;
use crate::wiring::{PinSide, WirePath, resolve_wire_color, route, wire_endpoints};
use std::collections::HashSet;

/// What to show instead of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePlaceholder {
    /// No diagram loaded yet
    NoDiagram,
    /// A diagram without components
    EmptyDiagram,
}

/// One pin with both of its possible anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePin {
    pub name: String,
    pub left: Point,
    pub right: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: String,
    pub name: String,
    pub component_type: String,
    /// Top-left corner in diagram space
    pub position: Point,
    pub pins: Vec<ScenePin>,
    pub selected: bool,
    pub hovered: bool,
    pub dragging: bool,
    /// Active highlight colour
    pub highlight: Option<String>,
    pub pulse: bool,
}

impl SceneNode {
    pub fn bounds(&self) -> Rect {
        Rect::component_at(self.position)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneWire {
    /// Index into `Diagram::connections`
    pub index: usize,
    pub key: ConnectionKey,
    pub path: WirePath,
    pub color: String,
    pub description: String,
    pub highlighted: bool,
    pub pulse: bool,
    /// Where the wire label is drawn
    pub label_position: Point,
}

/// Wire being drawn, as a straight segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneDraft {
    pub start: Point,
    pub end: Point,
}

/// Everything a host needs to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub view: ViewState,
    pub placeholder: Option<ScenePlaceholder>,
    pub nodes: Vec<SceneNode>,
    pub wires: Vec<SceneWire>,
    pub draft: Option<SceneDraft>,
    pub label_edit: Option<LabelEdit>,
    /// Show the drop target highlight
    pub drag_over: bool,
    /// Padded bounds of the shown components (minimap extent)
    pub bounds: Rect,
}

impl Scene {
    pub fn node(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn wire(&self, index: usize) -> Option<&SceneWire> {
        self.wires.iter().find(|w| w.index == index)
    }
}

impl CanvasEngine {
    /// Components that pass the search query and type filter.
    pub(crate) fn passes_filters(&self, component: &Component) -> bool {
        let query = self.ui.search_query.trim().to_lowercase();
        let name_ok = query.is_empty() || component.name.to_lowercase().contains(&query);
        let type_ok = self
            .ui
            .type_filter
            .as_deref()
            .is_none_or(|t| component.component_type == t);
        name_ok && type_ok
    }

    /// Ids inside the culling rect, or `None` when culling is off.
    fn culled_ids(&self, component_count: usize) -> Option<HashSet<String>> {
        if component_count <= self.settings.data.virtualization_threshold {
            return None;
        }
        let visible = self.viewport.visible_rect(CULLING_MARGIN)?;
        Some(visible_components(&self.canvas.index, visible))
    }

    /// Build the scene for the current state.
    pub fn scene(&self) -> Scene {
        profile_scope!("scene");

        let view = self.viewport.state();
        let draft = self.pointer.input.wire_draft().map(|d| SceneDraft {
            start: d.anchor,
            end: d.cursor,
        });

        let Some(diagram) = &self.canvas.diagram else {
            return Scene {
                view,
                placeholder: Some(ScenePlaceholder::NoDiagram),
                nodes: Vec::new(),
                wires: Vec::new(),
                draft,
                label_edit: None,
                drag_over: self.ui.drag_over,
                bounds: diagram_bounds(std::iter::empty(), &self.canvas.positions),
            };
        };

        let now = self.clock.now();
        let positions = &self.canvas.positions;
        let culled = self.culled_ids(diagram.components.len());
        let is_visible = |id: &str| culled.as_ref().is_none_or(|ids| ids.contains(id));

        let filtered: Vec<&Component> = diagram
            .components
            .iter()
            .filter(|c| self.passes_filters(c))
            .collect();

        let dragged = self.pointer.input.dragged_component();
        let mut nodes = Vec::with_capacity(filtered.len());
        for component in &filtered {
            let Some(&position) = positions.get(&component.id) else {
                continue;
            };
            if !is_visible(&component.id) {
                continue;
            }
            let highlight = self.highlights.component(&component.id, now);
            nodes.push(SceneNode {
                id: component.id.clone(),
                name: component.name.clone(),
                component_type: component.component_type.clone(),
                position,
                pins: component
                    .pins
                    .iter()
                    .enumerate()
                    .map(|(i, pin)| ScenePin {
                        name: pin.clone(),
                        left: pin_slot(position, i, PinSide::Left),
                        right: pin_slot(position, i, PinSide::Right),
                    })
                    .collect(),
                selected: self.canvas.selected.as_deref() == Some(component.id.as_str()),
                hovered: self.ui.hovered.as_deref() == Some(component.id.as_str()),
                dragging: dragged == Some(component.id.as_str()),
                highlight: highlight.map(|h| h.color.clone()),
                pulse: highlight.is_some_and(|h| h.pulse),
            });
        }

        let overrides = &self.settings.data.wire_colors;
        let mut wires = Vec::with_capacity(diagram.connections.len());
        let mut skipped = 0usize;
        for (index, connection) in diagram.connections.iter().enumerate() {
            if culled.is_some()
                && !is_visible(&connection.from_component_id)
                && !is_visible(&connection.to_component_id)
            {
                skipped += 1;
                continue;
            }
            let Some(ends) = wire_endpoints(connection, &diagram.components, positions) else {
                skipped += 1;
                continue;
            };

            let key = connection.key();
            let highlight = self.highlights.wire(&key, now);
            let color = match highlight {
                Some(h) => h.color.clone(),
                None => resolve_wire_color(connection, overrides)
                    .or_else(|| Some(connection.color.as_str()).filter(|c| !c.is_empty()))
                    .unwrap_or(DEFAULT_WIRE_COLOR)
                    .to_string(),
            };
            let path = route(ends.start, ends.end);
            wires.push(SceneWire {
                index,
                key,
                label_position: path.midpoint(),
                path,
                color,
                description: connection.description.clone(),
                highlighted: highlight.is_some(),
                pulse: highlight.is_some_and(|h| h.pulse),
            });
        }

        if culled.is_some() || skipped > 0 {
            tracing::trace!(
                nodes = nodes.len(),
                wires = wires.len(),
                culled_nodes = filtered.len() - nodes.len(),
                skipped_wires = skipped,
                "Scene built"
            );
        }

        Scene {
            view,
            placeholder: diagram
                .components
                .is_empty()
                .then_some(ScenePlaceholder::EmptyDiagram),
            nodes,
            wires,
            draft,
            label_edit: self.ui.label_edit.clone(),
            drag_over: self.ui.drag_over,
            bounds: diagram_bounds(filtered.iter().copied(), positions),
        }
    }
}
