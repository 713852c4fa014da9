use crate::error::{ArtworkError, Result};
use crate::sniff;
use crate::types::CoverArt;
use lofty::{ParsingMode, Picture};
use std::path::Path;
use tonearm_core::{ContainerKind, ContainerReader, ParsedContainer, RawValue};
use tonearm_metadata::mapping::{cover_art_key, key_matches};

/// Extract validated cover art bytes from a parsed container
///
/// Returns `None` when there is no cover art tag, when the candidate bytes do
/// not sniff as an image, when a Vorbis picture block is malformed, and always
/// for ASF containers (not implemented). Callers cannot tell these apart.
pub fn extract_cover_art(container: &ParsedContainer) -> Option<Vec<u8>> {
    // FLAC picture blocks are image data by construction
    if container.kind == ContainerKind::Flac {
        if let Some(picture) = container.pictures.first() {
            return Some(picture.data.clone());
        }
    }

    let kind = container.kind;
    let wanted = cover_art_key(kind);
    // First matching key wins; older importers kept the last match
    let value = container
        .tags()?
        .iter()
        .find(|(key, _)| key_matches(key, wanted, kind))
        .and_then(|(_, values)| values.first())?;

    match kind {
        ContainerKind::OggVorbis | ContainerKind::OggOpus => match decode_vorbis_picture(value) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::debug!("Discarding {} picture: {}", kind.name(), e);
                None
            }
        },
        ContainerKind::Mp4 => match value {
            RawValue::Bytes(data) => validated(data),
            RawValue::Picture(picture) => validated(&picture.data),
            _ => None,
        },
        // WM/Picture decoding is not implemented
        ContainerKind::Asf => None,
        ContainerKind::Mp3 | ContainerKind::Flac => value
            .as_picture()
            .and_then(|picture| validated(&picture.data)),
    }
}

/// Decode a base64 `METADATA_BLOCK_PICTURE` comment to its image payload
pub fn decode_vorbis_picture(value: &RawValue) -> Result<Vec<u8>> {
    let encoded = match value {
        RawValue::Text(text) => text.trim().as_bytes(),
        RawValue::Bytes(bytes) => bytes.as_slice(),
        other => return Err(ArtworkError::UnexpectedValue(format!("{:?}", other))),
    };
    let (picture, _) = Picture::from_flac_bytes(encoded, true, ParsingMode::BestAttempt)?;
    Ok(picture.into_data())
}

fn validated(data: &[u8]) -> Option<Vec<u8>> {
    if sniff::is_image(data) {
        Some(data.to_vec())
    } else {
        tracing::debug!("Discarding {} bytes of unrecognized cover art", data.len());
        None
    }
}

/// Extracts cover art from audio files through a container reader
pub struct CoverArtExtractor<R: ContainerReader> {
    reader: R,
}

impl<R: ContainerReader> CoverArtExtractor<R> {
    /// Create an extractor reading containers with `reader`
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Extract cover art from an audio file
    ///
    /// Returns `Ok(Some(art))` if artwork was found, `Ok(None)` if not, or
    /// `Err` if the file could not be opened as a container.
    pub fn extract(&self, path: &Path) -> Result<Option<CoverArt>> {
        let container = self.reader.open(path)?;
        Ok(extract_cover_art(&container).map(CoverArt::from_bytes))
    }

    /// Extract artwork and encode as base64
    pub fn extract_base64(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.extract(path)?.map(|art| art.to_base64()))
    }
}
