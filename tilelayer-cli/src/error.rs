//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;
use tilelayer::archive::ArchiveError;
use tilelayer::config::ConfigFileError;
use tilelayer::extend::ExtendError;
use tilelayer::tile::BlankTileError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Archive path does not exist
    FileNotFound(PathBuf),
    /// Configuration error
    Config(ConfigFileError),
    /// Failed to encode the blank tile
    BlankTile(BlankTileError),
    /// Failed to open the archive
    Open(ArchiveError),
    /// Failed to add the zoom level
    Extend(ExtendError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Extend(ExtendError::EmptyArchive) => {
                eprintln!();
                eprintln!("The archive's tiles table is empty. Nothing to subdivide.");
            }
            CliError::Extend(ExtendError::Collision(_)) => {
                eprintln!();
                eprintln!("No tiles were written. The archive was left unchanged.");
            }
            CliError::Open(ArchiveError::Sqlite(_))
            | CliError::Extend(ExtendError::Archive(ArchiveError::Sqlite(_))) => {
                eprintln!();
                eprintln!("Make sure the file is an MBTiles archive with a 'tiles' table");
                eprintln!("and that no other program holds a write lock on it.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::BlankTile(e) => write!(f, "Failed to create transparent tile: {}", e),
            CliError::Open(e) => write!(f, "Failed to open archive: {}", e),
            CliError::Extend(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::BlankTile(e) => Some(e),
            CliError::Open(e) => Some(e),
            CliError::Extend(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<BlankTileError> for CliError {
    fn from(e: BlankTileError) -> Self {
        CliError::BlankTile(e)
    }
}

impl From<ArchiveError> for CliError {
    fn from(e: ArchiveError) -> Self {
        match e {
            ArchiveError::NotFound(path) => CliError::FileNotFound(path),
            other => CliError::Open(other),
        }
    }
}

impl From<ExtendError> for CliError {
    fn from(e: ExtendError) -> Self {
        CliError::Extend(e)
    }
}
