//! User configuration.
//!
//! Settings are read from `~/.tilelayer/config.ini`:
//!
//! ```ini
//! [tile]
//! size = 256
//! fill = ffffff
//!
//! [archive]
//! update_metadata = false
//!
//! [logging]
//! file = ~/.tilelayer/tilelayer.log
//! ```
//!
//! Missing keys fall back to the values in [`defaults`].

pub mod defaults;
mod file;
mod parser;
mod settings;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ArchiveSettings, ConfigFile, LoggingSettings, TileSettings};
