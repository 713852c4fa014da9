use thiserror::Error;
use tonearm_core::TonearmError;

/// Errors that can occur while decoding embedded artwork
///
/// The container-level extractor folds these into "no cover art"; they are
/// surfaced only for logging and by [`crate::decode_vorbis_picture`].
#[derive(Debug, Error)]
pub enum ArtworkError {
    /// Container could not be opened
    #[error(transparent)]
    Container(#[from] TonearmError),

    /// Vorbis picture comment was not valid base64 or not a picture block
    #[error("Invalid picture block: {0}")]
    Picture(#[from] lofty::LoftyError),

    /// Tag value had an unexpected shape for this container
    #[error("Unexpected cover art value: {0}")]
    UnexpectedValue(String),
}

/// Result type for artwork operations
pub type Result<T> = std::result::Result<T, ArtworkError>;
