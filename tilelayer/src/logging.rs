//! Logging infrastructure for tilelayer.
//!
//! Provides structured logging with file output and optional console output:
//! - Writes to the configured log file (cleared on session start)
//! - Optionally mirrors to stderr so stdout stays free for progress messages
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize logging system.
///
/// Creates the log directory if needed, clears the previous log file and
/// installs a global subscriber.
///
/// # Arguments
///
/// * `log_path` - Log file path (e.g., "~/.tilelayer/tilelayer.log")
/// * `console` - Also write log lines to stderr
/// * `debug` - Use the `debug` level when RUST_LOG is not set
///
/// # Errors
///
/// Returns error if the log file cannot be prepared or a global subscriber
/// is already installed.
pub fn init_logging(
    log_path: &Path,
    console: bool,
    debug: bool,
) -> Result<LoggingGuard, io::Error> {
    let (log_dir, log_file) = split_log_path(log_path);

    fs::create_dir_all(log_dir)?;
    fs::write(log_dir.join(log_file), "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let console_layer = console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .compact()
    });

    tracing_subscriber::registry()
        .with(env_filter(debug))
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Filter from RUST_LOG, defaulting to `info` (or `debug` when requested).
fn env_filter(debug: bool) -> EnvFilter {
    let default_level = default_level(debug);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn default_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Split a log path into its directory and file name.
///
/// A bare file name logs into the current directory.
fn split_log_path(log_path: &Path) -> (&Path, &std::ffi::OsStr) {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(default_log_file()));
    (dir, file)
}

/// Get default log file name.
pub fn default_log_file() -> &'static str {
    crate::config::defaults::DEFAULT_LOG_FILE_NAME
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_log_file() {
        assert_eq!(default_log_file(), "tilelayer.log");
    }

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), "info");
        assert_eq!(default_level(true), "debug");
    }

    #[test]
    fn test_split_log_path() {
        let path = PathBuf::from("/var/log/tilelayer/run.log");
        let (dir, file) = split_log_path(&path);
        assert_eq!(dir, Path::new("/var/log/tilelayer"));
        assert_eq!(file, "run.log");
    }

    #[test]
    fn test_split_bare_file_name() {
        let path = PathBuf::from("run.log");
        let (dir, file) = split_log_path(&path);
        assert_eq!(dir, Path::new("."));
        assert_eq!(file, "run.log");
    }

    #[test]
    fn test_split_directory_only_uses_default_name() {
        let path = PathBuf::from("/");
        let (_, file) = split_log_path(&path);
        assert_eq!(file, "tilelayer.log");
    }

    #[test]
    fn test_guard_structure() {
        // Verifies the guard can wrap a writer guard without a global subscriber
        use tracing_appender::non_blocking::NonBlocking;

        let (non_blocking, guard) = NonBlocking::new(std::io::sink());
        drop(non_blocking);

        let _logging_guard = LoggingGuard { _file_guard: guard };
    }

    // Installing the subscriber is process-global, so init_logging itself is
    // exercised by the CLI integration tests.
}
