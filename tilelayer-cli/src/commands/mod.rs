//! CLI command implementations.
//!
//! - [`extend`] - Add a transparent zoom level to an archive

pub mod extend;
