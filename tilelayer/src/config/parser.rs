//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::tile::MAX_TILE_SIZE;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [tile] section
    if let Some(section) = ini.section(Some("tile")) {
        if let Some(v) = section.get("size") {
            config.tile.size = v
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| (1..=MAX_TILE_SIZE).contains(size))
                .ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "tile".to_string(),
                    key: "size".to_string(),
                    value: v.to_string(),
                    reason: format!("must be a whole number between 1 and {}", MAX_TILE_SIZE),
                })?;
        }
        if let Some(v) = section.get("fill") {
            config.tile.fill = parse_rgb_hex(v).ok_or_else(|| ConfigFileError::InvalidValue {
                section: "tile".to_string(),
                key: "fill".to_string(),
                value: v.to_string(),
                reason: "expected a hex colour like 'ffffff' or '#000000'".to_string(),
            })?;
        }
    }

    // [archive] section
    if let Some(section) = ini.section(Some("archive")) {
        if let Some(v) = section.get("update_metadata") {
            config.archive.update_metadata = parse_bool(v);
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Parse `rrggbb` or `#rrggbb`.
pub(super) fn parse_rgb_hex(value: &str) -> Option<[u8; 3]> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;
    use crate::config::settings::ConfigFile;
    use tempfile::TempDir;

    fn load(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, content).unwrap();
        ConfigFile::load_from(&config_path)
    }

    #[test]
    fn test_full_config() {
        let config = load(
            r#"
[tile]
size = 512
fill = 000000

[archive]
update_metadata = yes

[logging]
file = /var/log/tilelayer.log
"#,
        )
        .unwrap();

        assert_eq!(config.tile.size, 512);
        assert_eq!(config.tile.fill, [0, 0, 0]);
        assert!(config.archive.update_metadata);
        assert_eq!(config.logging.file, PathBuf::from("/var/log/tilelayer.log"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = load("").unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = load("[tile]\nfill = 00ff00\n").unwrap();

        assert_eq!(config.tile.size, DEFAULT_TILE_SIZE);
        assert_eq!(config.tile.fill, [0, 255, 0]);
        assert_eq!(config.archive.update_metadata, DEFAULT_UPDATE_METADATA);
    }

    #[test]
    fn test_invalid_tile_size() {
        let err = load("[tile]\nsize = 0\n").unwrap_err();
        assert!(err.to_string().contains("tile.size = '0'"));

        let err = load("[tile]\nsize = large\n").unwrap_err();
        assert!(err.to_string().contains("between 1 and 4096"));
    }

    #[test]
    fn test_invalid_fill() {
        let err = load("[tile]\nfill = white\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigFileError::InvalidValue { ref key, .. } if key == "fill"
        ));
    }

    #[test]
    fn test_empty_log_file_keeps_default() {
        let config = load("[logging]\nfile =\n").unwrap();
        assert_eq!(config.logging.file, default_log_file());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool(" ON "));
        assert!(parse_bool("1"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("nope"));
    }

    #[test]
    fn test_parse_rgb_hex() {
        assert_eq!(parse_rgb_hex("ffffff"), Some([255, 255, 255]));
        assert_eq!(parse_rgb_hex("#1a2B3c"), Some([0x1a, 0x2b, 0x3c]));
        assert_eq!(parse_rgb_hex("fff"), None);
        assert_eq!(parse_rgb_hex("gggggg"), None);
        assert_eq!(parse_rgb_hex("ffé"), None);
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/logs/x.log"), home.join("logs/x.log"));
        }
    }
}
