//! Tile archive error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::coord::TileCoord;

/// Errors raised while reading or writing a tile archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive file does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A row with the same zoom/column/row key is already stored
    #[error("Tile {0} already exists")]
    TileExists(TileCoord),

    /// A stored zoom level does not fit the supported range
    #[error("Invalid zoom level in archive: {0}")]
    InvalidZoom(i64),

    /// A stored tile address lies outside the grid for its zoom level
    #[error("Invalid tile address in archive: zoom={zoom}, column={col}, row={row}")]
    InvalidTile { zoom: u8, col: i64, row: i64 },

    /// Underlying SQLite failure
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
