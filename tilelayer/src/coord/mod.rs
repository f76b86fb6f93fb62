//! Tile coordinate module
//!
//! Addresses tiles by `(zoom, column, row)` and implements the quad-subdivision
//! relation between a tile and its four children one zoom level deeper.

mod types;

pub use types::{
    tiles_per_side, CoordError, TileChildrenIterator, TileCoord, CHILDREN_PER_TILE, MAX_ZOOM,
    MIN_ZOOM,
};

#[cfg(test)]
mod tests;
