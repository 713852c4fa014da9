//! Container kinds and the parsed-container handle
//!
//! The container kind is resolved once from the file extension; every later
//! lookup (key tables, cover-art keys) dispatches on the enum.

use super::value::{EmbeddedPicture, NativeTags};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extensions that are treated as audio files, matched case-sensitively
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    ".mp3", ".aif", ".ogg", ".opus", ".flac", ".mp4", ".m4a", ".asf", ".wma", ".wmv",
];

/// Tag container family of an audio file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// ID3-tagged files (`.mp3`, `.aif`)
    Mp3,
    /// FLAC with Vorbis comments and picture blocks
    Flac,
    /// MP4/M4A atoms
    Mp4,
    /// Ogg Vorbis comments
    OggVorbis,
    /// Ogg Opus comments
    OggOpus,
    /// ASF objects (`.asf`, `.wma`, `.wmv`)
    Asf,
}

impl ContainerKind {
    /// Resolve a container kind from an extension including the leading dot
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".mp3" | ".aif" => Some(Self::Mp3),
            ".flac" => Some(Self::Flac),
            ".mp4" | ".m4a" => Some(Self::Mp4),
            ".ogg" => Some(Self::OggVorbis),
            ".opus" => Some(Self::OggOpus),
            ".asf" | ".wma" | ".wmv" => Some(Self::Asf),
            _ => None,
        }
    }

    /// Resolve the container kind of `path` from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        supported_extension(path).and_then(Self::from_extension)
    }

    /// Vorbis-comment style containers use human-readable keys directly
    pub fn is_vorbis_family(self) -> bool {
        matches!(self, Self::Flac | Self::OggVorbis | Self::OggOpus)
    }

    /// Human-readable name used in log output
    pub fn name(self) -> &'static str {
        match self {
            Self::Mp3 => "ID3",
            Self::Flac => "FLAC",
            Self::Mp4 => "MP4",
            Self::OggVorbis => "Ogg Vorbis",
            Self::OggOpus => "Ogg Opus",
            Self::Asf => "ASF",
        }
    }
}

/// Return the supported extension of `path` (with leading dot), if any
///
/// Matching is case-sensitive: `song.MP3` is not a candidate.
pub fn supported_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    SUPPORTED_EXTENSIONS
        .iter()
        .copied()
        .find(|candidate| candidate.strip_prefix('.') == Some(ext))
}

/// A parsed tag container
///
/// Produced by a `ContainerReader`; the backing file is already closed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedContainer {
    /// Container family
    pub kind: ContainerKind,
    /// The matched extension, e.g. `".m4a"`
    pub extension: &'static str,
    /// Native tags; `None` when the file has no tag block at all
    pub tags: Option<NativeTags>,
    /// Stream length in seconds
    pub duration_seconds: f64,
    /// Dedicated picture list (FLAC PICTURE blocks), empty for other kinds
    pub pictures: Vec<EmbeddedPicture>,
}

impl ParsedContainer {
    /// Create a container without tags or pictures
    pub fn new(kind: ContainerKind, extension: &'static str, duration_seconds: f64) -> Self {
        Self {
            kind,
            extension,
            tags: None,
            duration_seconds,
            pictures: Vec::new(),
        }
    }

    /// Attach a tag block
    pub fn with_tags(mut self, tags: NativeTags) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Append a picture to the dedicated picture list
    pub fn with_picture(mut self, picture: EmbeddedPicture) -> Self {
        self.pictures.push(picture);
        self
    }

    /// Native tags, if a tag block was present
    pub fn tags(&self) -> Option<&NativeTags> {
        self.tags.as_ref()
    }
}
