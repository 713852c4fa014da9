/// Metadata-specific errors
use thiserror::Error;

/// Result type alias using `MetadataError`
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Failures while reading a container with lofty
///
/// These never leave the crate as-is: the reader folds them into
/// `TonearmError::NotParsable` together with the offending path.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// No lofty reader exists for this container family
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Lofty error
    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
}
