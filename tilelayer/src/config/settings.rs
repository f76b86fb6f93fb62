//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Blank tile settings
    pub tile: TileSettings,
    /// Archive write settings
    pub archive: ArchiveSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Blank tile configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSettings {
    /// Edge length in pixels
    pub size: u32,
    /// RGB channels stored under the zero alpha
    pub fill: [u8; 3],
}

/// Archive write configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSettings {
    /// Rewrite `maxzoom` in the metadata table after extending
    pub update_metadata: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
