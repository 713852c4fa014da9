//! Field translation from native tags to the canonical record

use crate::aggregator::add_field;
use crate::mapping::{self, fields};
use std::path::Path;
use tonearm_core::{
    Bucket, ContainerKind, FieldValue, NativeTags, ParsedContainer, RawValue, Scalar,
    TranslatedRecord,
};

/// Album artist used when neither album artist nor artist is tagged
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
/// Album used when the file carries no album tag
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Translate a parsed container into a typed record
///
/// Returns `None` when the container has no tag block at all. A present but
/// empty block still yields a record carrying duration, filetype and the
/// defaulted mandatory fields.
pub fn translate(path: &Path, container: &ParsedContainer) -> Option<TranslatedRecord> {
    let tags = container.tags()?;
    let mut record = TranslatedRecord::new();

    if container.kind.is_vorbis_family() {
        translate_vorbis(&mut record, tags);
    } else {
        translate_mapped(&mut record, container.kind, tags);
        if container.kind == ContainerKind::Mp4 {
            translate_mp4_atoms(&mut record, tags);
        }
    }

    add_field(
        &mut record,
        fields::DURATION,
        FieldValue::Single(Scalar::Float(container.duration_seconds)),
    );
    add_field(
        &mut record,
        fields::FILETYPE,
        FieldValue::Single(Scalar::from(container.extension)),
    );

    backfill_mandatory(&mut record, path);

    Some(record)
}

/// Vorbis comments: lower-cased native key is the field name, values as-is
fn translate_vorbis(record: &mut TranslatedRecord, tags: &NativeTags) {
    for (key, values) in tags.iter() {
        let field = key.to_lowercase();
        tracing::debug!("Vorbis tag: {} -> {} value(s)", field, values.len());
        add_field(
            record,
            &field,
            FieldValue::List(values.iter().map(RawValue::to_scalar).collect()),
        );
    }
}

/// Table-driven families: every value is stringified individually
fn translate_mapped(record: &mut TranslatedRecord, kind: ContainerKind, tags: &NativeTags) {
    for (key, values) in tags.iter() {
        let Some(field) = mapping::canonical_field_for(key, kind) else {
            continue;
        };
        tracing::debug!("{} tag: {} -> {}", kind.name(), key, field);
        add_field(
            record,
            field,
            FieldValue::strings(values.iter().map(RawValue::to_text)),
        );
    }
}

/// MP4 composite numbers and pass-through of unmapped atoms
fn translate_mp4_atoms(record: &mut TranslatedRecord, tags: &NativeTags) {
    for (key, values) in tags.iter() {
        let prefix = mapping::native_prefix(key);
        let composite_field = match prefix {
            mapping::MP4_DISC_KEY => Some(fields::DISC_NUMBER),
            mapping::MP4_TRACK_KEY => Some(fields::TRACK_NUMBER),
            _ => None,
        };

        if let Some(field) = composite_field {
            if let Some(joined) = values.first().and_then(number_pair) {
                add_field(record, field, FieldValue::Single(Scalar::Str(joined)));
            } else {
                tracing::debug!("Skipping incomplete MP4 {} atom", prefix);
            }
            continue;
        }

        if mapping::canonical_field_for(key, ContainerKind::Mp4).is_some() {
            continue;
        }

        add_field(
            record,
            key,
            FieldValue::List(values.iter().map(RawValue::to_scalar).collect()),
        );
    }
}

/// `"number/total"` for a pair with both halves present
fn number_pair(value: &RawValue) -> Option<String> {
    match value {
        RawValue::Pair(parts) if parts.len() >= 2 => Some(format!("{}/{}", parts[0], parts[1])),
        _ => None,
    }
}

/// Default title, album artist and album, in that order
fn backfill_mandatory(record: &mut TranslatedRecord, path: &Path) {
    if !record.contains(Bucket::StrList, fields::TITLE) {
        let base_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        add_field(record, fields::TITLE, FieldValue::strings([base_name]));
    }

    if !record.contains(Bucket::StrList, fields::ALBUM_ARTIST) {
        let artist = record
            .string_list(fields::ARTIST)
            .map(<[String]>::to_vec)
            .unwrap_or_else(|| vec![UNKNOWN_ARTIST.to_string()]);
        add_field(record, fields::ALBUM_ARTIST, FieldValue::strings(artist));
    }

    if !record.contains(Bucket::StrList, fields::ALBUM) {
        add_field(record, fields::ALBUM, FieldValue::strings([UNKNOWN_ALBUM]));
    }
}
