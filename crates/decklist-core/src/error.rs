//! Error types for decklist formatting
//!
//! The normalizer never fails on odd card lines; the only condition it
//! refuses is text without any line break.

/// Decklist error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input contains no `\r\n`, `\r` or `\n`
    #[error("Invalid format: no line ending found")]
    InvalidFormat,
}

/// Result type alias for decklist operations
pub type Result<T> = std::result::Result<T, Error>;
