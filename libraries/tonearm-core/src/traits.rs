/// Core traits for Tonearm
use crate::error::Result;
use crate::types::{ContainerKind, ParsedContainer};
use std::path::Path;

/// Tag-container reader
///
/// Implementers turn a file on disk into a [`ParsedContainer`]. Any failure to
/// open or parse the file must surface as `TonearmError::NotParsable` so batch
/// callers can skip the file and carry on.
pub trait ContainerReader: Send + Sync {
    /// Open and parse the container at `path`
    ///
    /// # Errors
    /// Returns `UnsupportedFormat` for extensions outside the supported set
    /// (without touching the file) and `NotParsable` for everything else.
    fn open(&self, path: &Path) -> Result<ParsedContainer>;

    /// Check whether the reader would attempt `path` at all
    fn supports(&self, path: &Path) -> bool {
        ContainerKind::from_path(path).is_some()
    }
}

impl<R: ContainerReader + ?Sized> ContainerReader for &R {
    fn open(&self, path: &Path) -> Result<ParsedContainer> {
        (**self).open(path)
    }

    fn supports(&self, path: &Path) -> bool {
        (**self).supports(path)
    }
}
