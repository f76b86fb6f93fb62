//! Blank tile payloads.
//!
//! Every tile inserted into an archive shares one pre-encoded image. This
//! module builds that image once per run:
//!
//! ```text
//! RgbaImage (size x size, alpha = 0) ──► PNG (best compression) ──► BlankTile
//! ```
//!
//! # Example
//!
//! ```
//! use tilelayer::tile::{BlankTile, DEFAULT_TILE_SIZE};
//!
//! let tile = BlankTile::transparent(DEFAULT_TILE_SIZE).unwrap();
//! assert_eq!(&tile.bytes()[1..4], b"PNG");
//! ```

mod blank;
mod error;

pub use blank::{BlankTile, DEFAULT_FILL, DEFAULT_TILE_SIZE, MAX_TILE_SIZE};
pub use error::BlankTileError;
