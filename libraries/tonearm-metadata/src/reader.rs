/// Tag-container adapter built on lofty
use crate::error::{MetadataError, Result};
use lofty::flac::FlacFile;
use lofty::ogg::{OggPictureStorage, OpusFile, VorbisComments, VorbisFile};
use lofty::{
    AudioFile, FileType, ItemKey, ItemValue, ParseOptions, Picture, PictureInformation, Probe,
    Tag, TagType, TaggedFileExt,
};
use std::fs::File;
use std::path::Path;
use std::time::Duration;
use tonearm_core::{
    supported_extension, ContainerKind, ContainerReader, EmbeddedPicture, NativeTags,
    ParsedContainer, RawValue, TonearmError,
};

/// Native key lofty pictures are re-emitted under for Ogg streams
const VORBIS_PICTURE_KEY: &str = "METADATA_BLOCK_PICTURE";

/// Container reader using the lofty library
///
/// Vorbis-family files are read through lofty's concrete FLAC/Ogg types so
/// comments keep their stored names. Other families go through lofty's
/// generic tag, whose items are mapped back into the native key space of the
/// file's tag family so the translation tables can work on native keys.
pub struct LoftyContainerReader;

impl LoftyContainerReader {
    /// Create a new container reader
    pub fn new() -> Self {
        Self
    }

    fn read_container(path: &Path, kind: ContainerKind, extension: &'static str) -> Result<ParsedContainer> {
        let file_type = lofty_file_type(extension).ok_or_else(|| {
            MetadataError::UnsupportedFormat(format!("no reader for {} containers", kind.name()))
        })?;

        // The handle is dropped when this function returns
        let mut file = File::open(path)?;
        let container = match file_type {
            FileType::Flac => {
                let flac = <FlacFile as AudioFile>::read_from(&mut file, ParseOptions::new())?;
                vorbis_container(
                    kind,
                    extension,
                    flac.properties().duration(),
                    flac.vorbis_comments(),
                    flac.pictures(),
                )
            }
            FileType::Vorbis => {
                let vorbis = <VorbisFile as AudioFile>::read_from(&mut file, ParseOptions::new())?;
                vorbis_container(
                    kind,
                    extension,
                    vorbis.properties().duration(),
                    Some(vorbis.vorbis_comments()),
                    &[],
                )
            }
            FileType::Opus => {
                let opus = <OpusFile as AudioFile>::read_from(&mut file, ParseOptions::new())?;
                vorbis_container(
                    kind,
                    extension,
                    opus.properties().duration(),
                    Some(opus.vorbis_comments()),
                    &[],
                )
            }
            _ => tagged_container(file, file_type, kind, extension)?,
        };

        Ok(container)
    }
}

impl Default for LoftyContainerReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerReader for LoftyContainerReader {
    fn open(&self, path: &Path) -> tonearm_core::Result<ParsedContainer> {
        let Some(extension) = supported_extension(path) else {
            return Err(TonearmError::unsupported_format(path.display().to_string()));
        };
        let Some(kind) = ContainerKind::from_extension(extension) else {
            return Err(TonearmError::unsupported_format(extension));
        };

        Self::read_container(path, kind, extension).map_err(|e| {
            tracing::error!("Could not parse {}: {}", path.display(), e);
            TonearmError::not_parsable(path, e.to_string())
        })
    }
}

/// Lofty file type for an extension; `None` where lofty has no reader
fn lofty_file_type(extension: &str) -> Option<FileType> {
    match extension {
        ".mp3" => Some(FileType::Mpeg),
        ".aif" => Some(FileType::Aiff),
        ".flac" => Some(FileType::Flac),
        ".mp4" | ".m4a" => Some(FileType::Mp4),
        ".ogg" => Some(FileType::Vorbis),
        ".opus" => Some(FileType::Opus),
        _ => None,
    }
}

/// Lofty tag type whose key space matches a generically read container
fn native_tag_type(kind: ContainerKind) -> Option<TagType> {
    match kind {
        ContainerKind::Mp3 => Some(TagType::Id3v2),
        ContainerKind::Mp4 => Some(TagType::Mp4Ilst),
        ContainerKind::Flac | ContainerKind::OggVorbis | ContainerKind::OggOpus | ContainerKind::Asf => None,
    }
}

/// ID3/MP4 container read through lofty's generic tag
fn tagged_container(
    file: File,
    file_type: FileType,
    kind: ContainerKind,
    extension: &'static str,
) -> Result<ParsedContainer> {
    let tagged_file = Probe::with_file_type(file, file_type).read()?;

    let duration_seconds = tagged_file.properties().duration().as_secs_f64();
    let mut container = ParsedContainer::new(kind, extension, duration_seconds);

    if let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
        container.tags = Some(native_tags(tag, kind));
    }

    Ok(container)
}

/// Vorbis-family container built from the comment block
///
/// The stream vendor string is not a comment and stays out of the tags.
/// FLAC pictures (PICTURE blocks first, then pictures stored as comments) go
/// to the picture list; Ogg pictures are re-emitted as base64
/// `METADATA_BLOCK_PICTURE` comments.
fn vorbis_container(
    kind: ContainerKind,
    extension: &'static str,
    duration: Duration,
    comments: Option<&VorbisComments>,
    blocks: &[(Picture, PictureInformation)],
) -> ParsedContainer {
    let mut container = ParsedContainer::new(kind, extension, duration.as_secs_f64());
    let comment_pictures = comments.map(|c| c.pictures()).unwrap_or_default();

    if kind == ContainerKind::Flac {
        container.pictures = blocks
            .iter()
            .chain(comment_pictures)
            .map(|(picture, _)| embedded_picture(picture))
            .collect();
    }

    let Some(comments) = comments else {
        return container;
    };

    let mut tags = NativeTags::new();
    for (key, value) in comments.items() {
        tags.push(key, RawValue::text(value));
    }
    if kind != ContainerKind::Flac {
        for (picture, info) in comment_pictures {
            tags.push(VORBIS_PICTURE_KEY, RawValue::Text(vorbis_picture_comment(picture, *info)));
        }
    }

    container.tags = Some(tags);
    container
}

/// Base64 FLAC picture block, as stored in a Vorbis comment
fn vorbis_picture_comment(picture: &Picture, info: PictureInformation) -> String {
    String::from_utf8_lossy(&picture.as_flac_bytes(info, true)).into_owned()
}

/// Split number/total text collected from lofty's generic items
#[derive(Debug, Default, Clone, PartialEq)]
struct NumberParts {
    number: Option<String>,
    total: Option<String>,
}

/// Native value for a number/total pair
///
/// MP4 gets a `(number, total)` pair, ID3 gets `"N/M"` text. A missing total
/// gives a one-element pair or bare number; a missing number gives nothing.
fn number_value(kind: ContainerKind, parts: &NumberParts) -> Option<RawValue> {
    let number = parts.number.as_deref()?;
    match kind {
        ContainerKind::Mp4 => {
            let mut pair = vec![number.trim().parse().ok()?];
            if let Some(total) = parts.total.as_deref().and_then(|t| t.trim().parse().ok()) {
                pair.push(total);
            }
            Some(RawValue::Pair(pair))
        }
        _ => Some(RawValue::Text(match parts.total.as_deref() {
            Some(total) => format!("{}/{}", number, total),
            None => number.to_string(),
        })),
    }
}

/// Rebuild the native key/value view of a lofty tag
fn native_tags(tag: &Tag, kind: ContainerKind) -> NativeTags {
    let mut tags = NativeTags::new();
    let Some(tag_type) = native_tag_type(kind) else {
        return tags;
    };

    // ID3 and MP4 store number and total in one frame/atom
    let recombine = matches!(kind, ContainerKind::Mp3 | ContainerKind::Mp4);
    let mut track = NumberParts::default();
    let mut disc = NumberParts::default();

    for item in tag.items() {
        let text = item.value().text().map(str::to_string);
        if recombine {
            match item.key() {
                ItemKey::TrackNumber => track.number = text,
                ItemKey::TrackTotal => track.total = text,
                ItemKey::DiscNumber => disc.number = text,
                ItemKey::DiscTotal => disc.total = text,
                _ => {}
            }
            if matches!(
                item.key(),
                ItemKey::TrackNumber | ItemKey::TrackTotal | ItemKey::DiscNumber | ItemKey::DiscTotal
            ) {
                continue;
            }
        }

        let Some(key) = item.key().map_key(tag_type, true) else {
            tracing::debug!("No native {:?} key for {:?}", tag_type, item.key());
            continue;
        };
        tags.push(key, raw_value(item.value()));
    }

    if recombine {
        let (track_key, disc_key) = match kind {
            ContainerKind::Mp4 => ("trkn", "disk"),
            _ => ("TRCK", "TPOS"),
        };
        if let Some(value) = number_value(kind, &track) {
            tags.push(track_key, value);
        }
        if let Some(value) = number_value(kind, &disc) {
            tags.push(disc_key, value);
        }
    }

    for picture in tag.pictures() {
        let picture = embedded_picture(picture);
        if kind == ContainerKind::Mp4 {
            tags.push("covr", RawValue::Bytes(picture.data));
        } else {
            let key = format!("APIC:{}", picture.description.as_deref().unwrap_or_default());
            tags.push(key, RawValue::Picture(picture));
        }
    }

    tags
}

fn raw_value(value: &ItemValue) -> RawValue {
    match value {
        ItemValue::Text(s) | ItemValue::Locator(s) => RawValue::Text(s.clone()),
        ItemValue::Binary(b) => RawValue::Bytes(b.clone()),
    }
}

fn embedded_picture(picture: &Picture) -> EmbeddedPicture {
    EmbeddedPicture {
        data: picture.data().to_vec(),
        mime_type: picture.mime_type().map(|m| m.as_str().to_string()),
        picture_type: picture.pic_type().as_u8(),
        description: picture.description().map(str::to_string),
    }
}
