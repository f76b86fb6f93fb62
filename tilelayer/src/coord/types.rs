//! Coordinate type definitions

use std::fmt;

/// Lowest zoom level an archive can hold.
pub const MIN_ZOOM: u8 = 0;

/// Deepest zoom level whose column/row space still fits in a `u32`.
///
/// A tile at `MAX_ZOOM` has no children: doubling its column would overflow.
pub const MAX_ZOOM: u8 = 30;

/// Number of children produced by one quad-subdivision step.
pub const CHILDREN_PER_TILE: usize = 4;

/// Tile address inside a tile archive.
///
/// Matches the `(zoom_level, tile_column, tile_row)` key of the MBTiles
/// `tiles` table. Rows may be numbered north-up (XYZ) or south-up (TMS);
/// quad-subdivision is identical for both, so no flipping happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    /// Zoom level (0-30)
    pub zoom: u8,
    /// X coordinate (east-west)
    pub col: u32,
    /// Y coordinate
    pub row: u32,
}

impl TileCoord {
    /// Create a tile coordinate, validating it against the grid at `zoom`.
    pub fn new(zoom: u8, col: u32, row: u32) -> Result<Self, CoordError> {
        if zoom > MAX_ZOOM {
            return Err(CoordError::InvalidZoom(zoom));
        }
        let extent = tiles_per_side(zoom);
        if u64::from(col) >= extent || u64::from(row) >= extent {
            return Err(CoordError::OutOfRange { zoom, col, row });
        }
        Ok(Self { zoom, col, row })
    }

    /// Returns an iterator over the four children of this tile at `zoom + 1`.
    ///
    /// Children are yielded column-major:
    /// `(2c, 2r)`, `(2c, 2r+1)`, `(2c+1, 2r)`, `(2c+1, 2r+1)`.
    pub fn children(&self) -> Result<TileChildrenIterator, CoordError> {
        if self.zoom >= MAX_ZOOM {
            return Err(CoordError::InvalidZoom(self.zoom.saturating_add(1)));
        }
        Ok(TileChildrenIterator {
            parent: *self,
            current: 0,
        })
    }

    /// Returns the tile one zoom level up that contains this tile.
    ///
    /// Returns `None` at zoom 0.
    #[inline]
    pub fn parent(&self) -> Option<TileCoord> {
        if self.zoom == MIN_ZOOM {
            return None;
        }
        Some(TileCoord {
            zoom: self.zoom - 1,
            col: self.col / 2,
            row: self.row / 2,
        })
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.col, self.row)
    }
}

/// Number of tiles along one edge of the grid at `zoom`.
#[inline]
pub fn tiles_per_side(zoom: u8) -> u64 {
    1u64 << zoom
}

/// Iterator over the four children of a tile.
#[derive(Debug, Clone)]
pub struct TileChildrenIterator {
    parent: TileCoord,
    current: u8,
}

impl Iterator for TileChildrenIterator {
    type Item = TileCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current as usize >= CHILDREN_PER_TILE {
            return None;
        }

        let dx = u32::from(self.current / 2);
        let dy = u32::from(self.current % 2);
        self.current += 1;

        Some(TileCoord {
            zoom: self.parent.zoom + 1,
            col: self.parent.col * 2 + dx,
            row: self.parent.row * 2 + dy,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = CHILDREN_PER_TILE - self.current as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileChildrenIterator {
    fn len(&self) -> usize {
        CHILDREN_PER_TILE - self.current as usize
    }
}

/// Errors that can occur when building or subdividing tile coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Zoom level is outside valid range (0 to 30)
    InvalidZoom(u8),
    /// Column or row lies outside the grid for the zoom level
    OutOfRange { zoom: u8, col: u32, row: u32 },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidZoom(zoom) => {
                write!(
                    f,
                    "Invalid zoom level: {} (must be between {} and {})",
                    zoom, MIN_ZOOM, MAX_ZOOM
                )
            }
            CoordError::OutOfRange { zoom, col, row } => {
                write!(
                    f,
                    "Tile {}/{}/{} is outside the {}x{} grid",
                    zoom,
                    col,
                    row,
                    tiles_per_side(*zoom),
                    tiles_per_side(*zoom)
                )
            }
        }
    }
}

impl std::error::Error for CoordError {}
