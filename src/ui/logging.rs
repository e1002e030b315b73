//! Logging setup.
//!
//! The TUI owns the screen, so log output goes to a file in the user's
//! cache directory instead of stderr.
use std::fs::{File, remove_file};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context as _, Result};
use directories::BaseDirs;
use env_logger::{Builder, Target, fmt::TimestampPrecision};
use log::LevelFilter;

/// Log file location, resolved once.
///
/// Falls back to the working directory when no base directories can be
/// determined.
static LOG_FILE: LazyLock<PathBuf> = LazyLock::new(|| {
    BaseDirs::new().map_or_else(
        || PathBuf::from("guide_reader.log"),
        |dirs| dirs.cache_dir().join("guide_reader.log"),
    )
});

/// Path of the log file.
#[must_use]
pub fn log_file_path() -> &'static Path
{
    &LOG_FILE
}

/// Initializes the logging system, appending to the log file.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or created.
pub fn init_logging() -> Result<()>
{
    let log_file = File::options()
        .append(true)
        .create(true)
        .open(log_file_path())
        .context(format!(
            "Failed to open log file at {}",
            log_file_path().display()
        ))?;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("guide_reader", LevelFilter::Debug)
        .format_timestamp(Some(TimestampPrecision::Millis))
        .target(Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}

/// Removes the log file. Missing file is fine.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear_log_file() -> Result<()>
{
    match remove_file(log_file_path())
    {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).context(format!(
            "Failed to remove log file at {}",
            log_file_path().display()
        )),
    }
}
