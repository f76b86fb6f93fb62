//! Zoom level extension.
//!
//! Adds one zoom level below the deepest level of an archive, filled with
//! blank tiles:
//!
//! ```text
//!  zoom Z      ┌───────┐                 every tile at the maximum zoom
//!              │ c, r  │
//!              └───────┘
//!                  │  quad-subdivision
//!                  ▼
//!  zoom Z+1    ┌───────┬───────┐
//!              │2c, 2r │2c+1,2r│         four children, same payload bytes
//!              ├───────┼───────┤
//!              │2c,2r+1│2c+1,  │
//!              │       │  2r+1 │
//!              └───────┴───────┘
//! ```
//!
//! All inserts happen inside one transaction. Any failure rolls the archive
//! back to its original state.
//!
//! # Example
//!
//! ```no_run
//! use tilelayer::archive::TileArchive;
//! use tilelayer::extend::ZoomExtender;
//! use tilelayer::tile::BlankTile;
//!
//! let mut archive = TileArchive::open("overlay.mbtiles")?;
//! let extender = ZoomExtender::new(BlankTile::transparent(256)?);
//! let report = extender.extend(&mut archive)?;
//! println!("{}", report);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod extender;
mod report;

pub use error::ExtendError;
pub use extender::{ExtendPlan, ZoomExtender, PROGRESS_INTERVAL};
pub use report::ExtendReport;
