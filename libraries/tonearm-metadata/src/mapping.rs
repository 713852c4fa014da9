//! Native tag key tables
//!
//! Each table pairs a canonical field name with the native key a container
//! family stores it under. Vorbis-comment containers have no table: their keys
//! are already human readable and are lower-cased instead.

use tonearm_core::ContainerKind;

/// Canonical field names the translator guarantees or synthesizes
pub mod fields {
    pub const TITLE: &str = "title";
    pub const ARTIST: &str = "artist";
    pub const ALBUM_ARTIST: &str = "albumartist";
    pub const ALBUM: &str = "album";
    pub const TRACK_NUMBER: &str = "tracknumber";
    pub const DISC_NUMBER: &str = "discnumber";
    pub const GENRE: &str = "genre";
    pub const DATE: &str = "date";
    pub const DURATION: &str = "duration";
    pub const FILETYPE: &str = "filetype";
}

/// ID3v2 frame ids
const ID3_TABLE: &[(&str, &str)] = &[
    ("title", "TIT2"),
    ("subtitle", "TIT3"),
    ("grouping", "TIT1"),
    ("artist", "TPE1"),
    ("albumartist", "TPE2"),
    ("conductor", "TPE3"),
    ("remixer", "TPE4"),
    ("album", "TALB"),
    ("tracknumber", "TRCK"),
    ("discnumber", "TPOS"),
    ("genre", "TCON"),
    ("date", "TDRC"),
    ("originaldate", "TDOR"),
    ("composer", "TCOM"),
    ("lyricist", "TEXT"),
    ("bpm", "TBPM"),
    ("copyright", "TCOP"),
    ("encodedby", "TENC"),
    ("organization", "TPUB"),
    ("isrc", "TSRC"),
    ("language", "TLAN"),
    ("mood", "TMOO"),
    ("comment", "COMM"),
    ("lyrics", "USLT"),
];

/// MP4 ilst atom identifiers
///
/// `trkn` and `disk` are deliberately absent; they hold number/total pairs and
/// are rebuilt by the translator.
const MP4_TABLE: &[(&str, &str)] = &[
    ("title", "\u{a9}nam"),
    ("artist", "\u{a9}ART"),
    ("albumartist", "aART"),
    ("album", "\u{a9}alb"),
    ("genre", "\u{a9}gen"),
    ("date", "\u{a9}day"),
    ("composer", "\u{a9}wrt"),
    ("comment", "\u{a9}cmt"),
    ("grouping", "\u{a9}grp"),
    ("lyrics", "\u{a9}lyr"),
    ("description", "desc"),
    ("copyright", "cprt"),
    ("encodedby", "\u{a9}too"),
    ("albumsort", "soal"),
    ("artistsort", "soar"),
    ("albumartistsort", "soaa"),
    ("titlesort", "sonm"),
];

/// ASF/WMA attribute names
const ASF_TABLE: &[(&str, &str)] = &[
    ("title", "Title"),
    ("artist", "Author"),
    ("albumartist", "WM/AlbumArtist"),
    ("album", "WM/AlbumTitle"),
    ("tracknumber", "WM/TrackNumber"),
    ("discnumber", "WM/PartOfSet"),
    ("genre", "WM/Genre"),
    ("date", "WM/Year"),
    ("composer", "WM/Composer"),
    ("conductor", "WM/Conductor"),
    ("copyright", "Copyright"),
    ("comment", "Description"),
    ("bpm", "WM/BeatsPerMinute"),
    ("isrc", "WM/ISRC"),
];

/// MP4 disc number/total atom
pub const MP4_DISC_KEY: &str = "disk";
/// MP4 track number/total atom
pub const MP4_TRACK_KEY: &str = "trkn";

/// Mapping table for `kind`; `None` for the Vorbis family
pub fn table_for(kind: ContainerKind) -> Option<&'static [(&'static str, &'static str)]> {
    match kind {
        ContainerKind::Mp3 => Some(ID3_TABLE),
        ContainerKind::Mp4 => Some(MP4_TABLE),
        ContainerKind::Asf => Some(ASF_TABLE),
        ContainerKind::Flac | ContainerKind::OggVorbis | ContainerKind::OggOpus => None,
    }
}

/// Native key with any colon-delimited suffix removed
///
/// `TXXX:REPLAYGAIN_TRACK_GAIN` becomes `TXXX`; keys without a colon are
/// returned unchanged.
pub fn native_prefix(native_key: &str) -> &str {
    native_key
        .split_once(':')
        .map_or(native_key, |(prefix, _)| prefix)
}

/// Canonical field for a native key, resolved through the kind's table
///
/// Returns `None` for keys the table does not cover and for the Vorbis family,
/// whose keys are used directly.
pub fn canonical_field_for(native_key: &str, kind: ContainerKind) -> Option<&'static str> {
    let prefix = native_prefix(native_key);
    table_for(kind)?
        .iter()
        .find(|(_, native)| *native == prefix)
        .map(|(canonical, _)| *canonical)
}

/// Native key holding embedded cover art for `kind`
pub fn cover_art_key(kind: ContainerKind) -> &'static str {
    match kind {
        ContainerKind::Mp4 => "covr",
        ContainerKind::Mp3 => "APIC",
        ContainerKind::OggVorbis | ContainerKind::OggOpus | ContainerKind::Flac => {
            "metadata_block_picture"
        }
        ContainerKind::Asf => "WM/Picture",
    }
}

/// Whether `native_key` matches `wanted` under the colon-prefix rule
///
/// Vorbis comment keys are case-insensitive, every other family compares
/// exactly.
pub fn key_matches(native_key: &str, wanted: &str, kind: ContainerKind) -> bool {
    let prefix = native_prefix(native_key);
    if kind.is_vorbis_family() {
        prefix.eq_ignore_ascii_case(wanted)
    } else {
        prefix == wanted
    }
}
