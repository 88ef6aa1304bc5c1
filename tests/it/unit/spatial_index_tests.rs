//! Unit tests for the R-tree index and culling queries.

use circuitboard::layout::visible_components;
use circuitboard::spatial_index::SpatialIndex;
use circuitboard::{Point, Rect};

fn column(count: usize) -> SpatialIndex {
    SpatialIndex::from_entries(
        (0..count).map(|i| (format!("c{}", i), Rect::component_at(Point::new(700.0, 50.0 + 200.0 * i as f32)))),
    )
}

#[test]
fn test_rebuild_replaces_contents() {
    let mut index = column(10);
    assert_eq!(index.len(), 10);

    index.rebuild([("solo", Rect::component_at(Point::ZERO))]);
    assert_eq!(index.len(), 1);
    assert_eq!(index.bounds("solo"), Some(Rect::new(0.0, 0.0, 140.0, 100.0)));
    assert_eq!(index.bounds("c0"), None);
}

#[test]
fn test_visible_components_in_window() {
    let index = column(150);
    // 800x600 window at the origin plus a 240 margin
    let visible = visible_components(&index, Rect::new(0.0, 0.0, 800.0, 600.0).inflate(240.0));

    let mut ids: Vec<_> = visible.into_iter().collect();
    ids.sort();
    assert_eq!(ids, vec!["c0", "c1", "c2", "c3"]);
}

#[test]
fn test_point_on_edge_is_inside() {
    let index = SpatialIndex::from_entries([("a", Rect::component_at(Point::new(100.0, 50.0)))]);
    assert_eq!(index.query_point(Point::new(240.0, 150.0)), vec!["a".to_string()]);
    assert!(index.query_point(Point::new(240.5, 150.0)).is_empty());
}

#[test]
fn test_clear() {
    let mut index = column(3);
    index.clear();
    assert!(index.is_empty());
    assert!(index.query_rect(Rect::new(-1e6, -1e6, 2e6, 2e6)).is_empty());
}
