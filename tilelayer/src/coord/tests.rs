//! Tests for tile coordinates and quad-subdivision

use super::*;

#[test]
fn test_children_of_zoom_5_tile() {
    let parent = TileCoord::new(5, 3, 4).unwrap();
    let children: Vec<TileCoord> = parent.children().unwrap().collect();

    assert_eq!(
        children,
        vec![
            TileCoord { zoom: 6, col: 6, row: 8 },
            TileCoord { zoom: 6, col: 6, row: 9 },
            TileCoord { zoom: 6, col: 7, row: 8 },
            TileCoord { zoom: 6, col: 7, row: 9 },
        ]
    );
}

#[test]
fn test_children_of_root_tile() {
    let root = TileCoord::new(0, 0, 0).unwrap();
    let children: Vec<TileCoord> = root.children().unwrap().collect();

    assert_eq!(children.len(), 4);
    for child in &children {
        assert_eq!(child.zoom, 1);
        assert!(child.col <= 1 && child.row <= 1);
    }
}

#[test]
fn test_children_iterator_is_exact_size() {
    let parent = TileCoord::new(10, 100, 200).unwrap();
    let mut iter = parent.children().unwrap();

    assert_eq!(iter.len(), 4);
    iter.next();
    assert_eq!(iter.len(), 3);
    iter.by_ref().for_each(drop);
    assert_eq!(iter.len(), 0);
    assert!(iter.next().is_none());
}

#[test]
fn test_every_child_maps_back_to_parent() {
    let parent = TileCoord::new(12, 2047, 1365).unwrap();

    for child in parent.children().unwrap() {
        assert_eq!(child.parent(), Some(parent), "child {} has wrong parent", child);
    }
}

#[test]
fn test_children_stay_inside_grid() {
    // Bottom-right corner tile at zoom 3
    let parent = TileCoord::new(3, 7, 7).unwrap();

    for child in parent.children().unwrap() {
        assert!(TileCoord::new(child.zoom, child.col, child.row).is_ok());
    }
}

#[test]
fn test_no_children_at_max_zoom() {
    let tile = TileCoord::new(MAX_ZOOM, 0, 0).unwrap();
    assert!(matches!(tile.children(), Err(CoordError::InvalidZoom(_))));
}

#[test]
fn test_root_has_no_parent() {
    let root = TileCoord::new(0, 0, 0).unwrap();
    assert_eq!(root.parent(), None);
}

#[test]
fn test_new_rejects_zoom_too_high() {
    let result = TileCoord::new(MAX_ZOOM + 1, 0, 0);
    assert_eq!(result, Err(CoordError::InvalidZoom(MAX_ZOOM + 1)));
}

#[test]
fn test_new_rejects_column_outside_grid() {
    let result = TileCoord::new(2, 4, 0);
    assert!(matches!(result, Err(CoordError::OutOfRange { col: 4, .. })));
}

#[test]
fn test_new_rejects_row_outside_grid() {
    let result = TileCoord::new(0, 0, 1);
    assert!(matches!(result, Err(CoordError::OutOfRange { row: 1, .. })));
}

#[test]
fn test_new_accepts_last_tile_at_max_zoom() {
    let last = (tiles_per_side(MAX_ZOOM) - 1) as u32;
    assert!(TileCoord::new(MAX_ZOOM, last, last).is_ok());
}

#[test]
fn test_display_format() {
    let tile = TileCoord::new(6, 7, 9).unwrap();
    assert_eq!(tile.to_string(), "6/7/9");
}

#[test]
fn test_invalid_zoom_display() {
    let err = CoordError::InvalidZoom(31);
    assert_eq!(
        err.to_string(),
        "Invalid zoom level: 31 (must be between 0 and 30)"
    );
}

#[test]
fn test_out_of_range_display() {
    let err = CoordError::OutOfRange {
        zoom: 1,
        col: 2,
        row: 0,
    };
    assert_eq!(err.to_string(), "Tile 1/2/0 is outside the 2x2 grid");
}
