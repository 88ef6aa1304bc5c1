//! Spatial Index Module
//!
//! R-tree over component boxes in diagram space. Pointer-down hit testing and
//! viewport culling both go through here so they stay O(log n) on large
//! generated diagrams.

use crate::types::{Point, Rect};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A component's bounding box as stored in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialEntry {
    pub component_id: String,
    pub bounds: Rect,
}

impl SpatialEntry {
    pub fn new(component_id: impl Into<String>, bounds: Rect) -> Self {
        Self {
            component_id: component_id.into(),
            bounds,
        }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.x, self.bounds.y],
            [self.bounds.right(), self.bounds.bottom()],
        )
    }
}

/// Spatial index for component boxes keyed by component id.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<String, Rect>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build an index from `(id, bounds)` pairs in one bulk load.
    pub fn from_entries<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, Rect)>,
        S: Into<String>,
    {
        let mut index = Self::new();
        index.rebuild(items);
        index
    }

    /// Insert or move a component.
    pub fn insert(&mut self, component_id: &str, bounds: Rect) {
        if let Some(old) = self.entries.remove(component_id) {
            self.tree.remove(&SpatialEntry::new(component_id, old));
        }
        self.tree.insert(SpatialEntry::new(component_id, bounds));
        self.entries.insert(component_id.to_string(), bounds);
    }

    pub fn remove(&mut self, component_id: &str) -> bool {
        match self.entries.remove(component_id) {
            Some(bounds) => {
                self.tree.remove(&SpatialEntry::new(component_id, bounds));
                true
            }
            None => false,
        }
    }

    pub fn bounds(&self, component_id: &str) -> Option<Rect> {
        self.entries.get(component_id).copied()
    }

    /// Ids of all components whose box contains `point`.
    pub fn query_point(&self, point: Point) -> Vec<String> {
        let envelope = AABB::from_point([point.x, point.y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.bounds.contains(point))
            .map(|entry| entry.component_id.clone())
            .collect()
    }

    /// Ids of all components whose box intersects `rect`.
    pub fn query_rect(&self, rect: Rect) -> Vec<String> {
        let envelope = AABB::from_corners([rect.x, rect.y], [rect.right(), rect.bottom()]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.component_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = (S, Rect)>,
        S: Into<String>,
    {
        let entries: Vec<SpatialEntry> = items
            .into_iter()
            .map(|(id, bounds)| SpatialEntry::new(id, bounds))
            .collect();

        self.entries = entries
            .iter()
            .map(|e| (e.component_id.clone(), e.bounds))
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
