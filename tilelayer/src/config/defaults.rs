//! Default values for all configuration settings.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;

pub use crate::tile::{DEFAULT_FILL, DEFAULT_TILE_SIZE};

/// Metadata is left untouched unless asked for.
pub const DEFAULT_UPDATE_METADATA: bool = false;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "tilelayer.log";

/// Default log file path (~/.tilelayer/tilelayer.log).
pub fn default_log_file() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE_NAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            tile: TileSettings::default(),
            archive: ArchiveSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_TILE_SIZE,
            fill: DEFAULT_FILL,
        }
    }
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            update_metadata: DEFAULT_UPDATE_METADATA,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}
