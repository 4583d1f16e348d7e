//! Error types for the decklist CLI driver

use std::io;
use std::path::PathBuf;

/// Per-path failure while driving the formatter
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Path missing, not a regular file, or lacking permissions
    #[error("Cannot access {}: {source}", .path.display())]
    Access { path: PathBuf, source: io::Error },

    /// Reading the file failed (including invalid UTF-8)
    #[error("Cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Writing the formatted text back failed
    #[error("Cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Batch refused because at least one path failed its access check
#[derive(Debug, thiserror::Error)]
#[error("{} of {total} file(s) not accessible, nothing was processed", .errors.len())]
pub struct BatchAborted {
    pub errors: Vec<DriverError>,
    pub total: usize,
}
