//! tilelayer - transparent overlay zoom levels for MBTiles archives
//!
//! Map overlays shown in viewers such as Locus Map get magnified once the
//! viewer zooms past the archive's deepest level. This library appends one
//! more zoom level made of fully transparent tiles so the overlay stops
//! scaling up its last real level.
//!
//! # High-Level API
//!
//! ```no_run
//! use tilelayer::archive::TileArchive;
//! use tilelayer::extend::ZoomExtender;
//! use tilelayer::tile::{BlankTile, DEFAULT_TILE_SIZE};
//!
//! let mut archive = TileArchive::open("overlay.mbtiles")?;
//! let extender = ZoomExtender::new(BlankTile::transparent(DEFAULT_TILE_SIZE)?);
//! let report = extender.extend(&mut archive)?;
//! assert_eq!(report.inserted, report.source_tiles * 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod archive;
pub mod config;
pub mod coord;
pub mod extend;
pub mod logging;
pub mod tile;

/// Version of the tilelayer library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_coord_module_exists() {
        use crate::coord::TileCoord;
        let result = TileCoord::new(16, 19298, 24341);
        assert!(result.is_ok());
    }
}
