//! Zoom extension error types.

use thiserror::Error;

use crate::archive::ArchiveError;
use crate::coord::{TileCoord, MAX_ZOOM};

/// Errors that can occur while adding a zoom level.
#[derive(Debug, Error)]
pub enum ExtendError {
    /// The `tiles` table is empty, so there is no maximum zoom level
    #[error("Archive contains no tiles, cannot determine the maximum zoom level")]
    EmptyArchive,

    /// The archive already reaches the deepest addressable zoom level
    #[error("Maximum zoom level {0} cannot be extended (deepest supported level is {max})", max = MAX_ZOOM)]
    ZoomOverflow(u8),

    /// A child tile is already present
    #[error("Tile {0} already exists at the target zoom level")]
    Collision(TileCoord),

    /// Archive read or write failure
    #[error(transparent)]
    Archive(ArchiveError),
}

impl From<ArchiveError> for ExtendError {
    fn from(err: ArchiveError) -> Self {
        match err {
            ArchiveError::TileExists(coord) => ExtendError::Collision(coord),
            other => ExtendError::Archive(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_tile_exists_becomes_collision() {
        let coord = TileCoord {
            zoom: 6,
            col: 6,
            row: 8,
        };
        let err = ExtendError::from(ArchiveError::TileExists(coord));
        assert!(matches!(err, ExtendError::Collision(c) if c == coord));
    }

    #[test]
    fn test_other_archive_errors_wrapped() {
        let err = ExtendError::from(ArchiveError::NotFound(PathBuf::from("x.mbtiles")));
        assert!(matches!(err, ExtendError::Archive(ArchiveError::NotFound(_))));
        assert_eq!(err.to_string(), "File not found: x.mbtiles");
    }

    #[test]
    fn test_zoom_overflow_display() {
        let err = ExtendError::ZoomOverflow(30);
        assert_eq!(
            err.to_string(),
            "Maximum zoom level 30 cannot be extended (deepest supported level is 30)"
        );
    }
}
