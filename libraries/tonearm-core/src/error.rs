/// Core error types for Tonearm
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `TonearmError`
pub type Result<T> = std::result::Result<T, TonearmError>;

/// Core error type for Tonearm
#[derive(Error, Debug)]
pub enum TonearmError {
    /// The tag container could not be opened or parsed
    #[error("Could not parse {}: {reason}", path.display())]
    NotParsable {
        /// File that failed to open
        path: PathBuf,
        /// Underlying reader message
        reason: String,
    },

    /// Extension is not one of the supported container kinds
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Path exists but is the wrong kind of entry
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TonearmError {
    /// Create a not-parsable error for `path`
    pub fn not_parsable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::NotParsable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// True when the error came from a corrupt or unreadable container
    pub fn is_not_parsable(&self) -> bool {
        matches!(self, Self::NotParsable { .. })
    }
}
