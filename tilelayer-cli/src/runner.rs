//! CLI runner for common setup.
//!
//! Encapsulates config loading and logging initialization so command
//! handlers only deal with their own work.

use crate::error::CliError;
use std::path::Path;
use tilelayer::config::ConfigFile;
use tilelayer::logging::{init_logging, LoggingGuard};
use tracing::info;

/// Runner that manages CLI lifecycle.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists.
    /// `None` when the log file could not be set up.
    #[allow(dead_code)]
    logging_guard: Option<LoggingGuard>,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Load config and initialize logging.
    ///
    /// A log file that cannot be created only disables logging; the command
    /// still runs.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Explicit config file, or `None` for ~/.tilelayer/config.ini
    /// * `debug_mode` - Enable debug-level logging and mirror log lines to stderr
    pub fn new(config_path: Option<&Path>, debug_mode: bool) -> Result<Self, CliError> {
        let config = match config_path {
            Some(path) => ConfigFile::load_from(path)?,
            None => ConfigFile::load()?,
        };

        let logging_guard = match init_logging(&config.logging.file, debug_mode, debug_mode) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Warning: logging disabled: {}", e);
                None
            }
        };

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("tilelayer v{}", tilelayer::VERSION);
        info!("tilelayer CLI: {} command", command);
    }
}
