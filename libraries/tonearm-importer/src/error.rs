//! Error types for the importer

use thiserror::Error;
use tonearm_core::TonearmError;

/// Batch-level failures
///
/// Per-file problems never surface here; they are logged and the file is
/// left out of the result maps.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Scan(#[from] TonearmError),

    #[error("Invalid import configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}
