/// Integration tests for the lofty container reader
///
/// Fixtures are synthesized into a temp directory, see `fixtures/mod.rs`.
mod fixtures;

use fixtures::{flac_bytes, init_tracing, m4a_bytes, mp3_bytes, opus_bytes, JPEG_BYTES, VENDOR};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tonearm_core::{Bucket, ContainerKind, ContainerReader, RawValue};
use tonearm_metadata::{translate, LoftyContainerReader, UNKNOWN_ALBUM};

fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn flac_with_comments_and_picture_is_read() {
    let temp = TempDir::new().unwrap();
    let comments = [("TITLE", "Hymn"), ("ARTIST", "Choir")];
    let path = write(&temp, "hymn.flac", &flac_bytes(Some(&comments), Some(&JPEG_BYTES)));

    let container = LoftyContainerReader::new().open(&path).unwrap();

    assert_eq!(container.kind, ContainerKind::Flac);
    assert_eq!(container.extension, ".flac");
    let tags = container.tags().expect("comment block present");
    assert_eq!(tags.get("TITLE"), Some(&[RawValue::text("Hymn")][..]));
    assert_eq!(container.pictures.len(), 1);
    assert_eq!(container.pictures[0].data, JPEG_BYTES.to_vec());
    assert!((container.duration_seconds - 10.0).abs() < 0.01);
}

#[test]
fn flac_translates_through_vorbis_rules() {
    let temp = TempDir::new().unwrap();
    let comments = [("TITLE", "Hymn"), ("ARTIST", "Choir"), ("GENRE", "Sacred")];
    let path = write(&temp, "hymn.flac", &flac_bytes(Some(&comments), None));

    let container = LoftyContainerReader::new().open(&path).unwrap();
    let record = translate(&path, &container).unwrap();

    assert_eq!(record.string_list("title"), Some(&["Hymn".to_string()][..]));
    assert_eq!(record.string_list("genre"), Some(&["Sacred".to_string()][..]));
    assert_eq!(record.string_list("albumartist"), Some(&["Choir".to_string()][..]));
    assert_eq!(record.string_list("album"), Some(&[UNKNOWN_ALBUM.to_string()][..]));
    assert_eq!(record.string("filetype"), Some(".flac"));
    assert_eq!(record.buckets_of("duration"), vec![Bucket::Float]);
}

#[test]
fn vendor_string_is_not_a_tag() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "hymn.flac", &flac_bytes(Some(&[("TITLE", "Hymn")]), None));

    let container = LoftyContainerReader::new().open(&path).unwrap();
    let tags = container.tags().unwrap();
    assert_eq!(tags.keys().collect::<Vec<_>>(), vec!["TITLE"]);

    let record = translate(&path, &container).unwrap();
    assert!(record.buckets_of("encoder").is_empty());
    assert!(record.string_list("encoder").is_none());
    assert!(!format!("{:?}", record).contains(VENDOR));
}

#[test]
fn mp3_id3_frames_are_read() {
    let temp = TempDir::new().unwrap();
    let bytes = mp3_bytes("Blue", "Joni", (3, 12), Some(&JPEG_BYTES));
    let path = write(&temp, "blue.mp3", &bytes);

    let container = LoftyContainerReader::new().open(&path).unwrap();

    assert_eq!(container.kind, ContainerKind::Mp3);
    assert!(container.duration_seconds > 0.5);
    let tags = container.tags().unwrap();
    assert_eq!(tags.get("TIT2"), Some(&[RawValue::text("Blue")][..]));
    assert_eq!(tags.get("TRCK"), Some(&[RawValue::text("3/12")][..]));
    let picture = tags.get("APIC:").unwrap()[0].as_picture().unwrap();
    assert_eq!(picture.data, JPEG_BYTES.to_vec());

    let record = translate(&path, &container).unwrap();
    assert_eq!(record.string_list("title"), Some(&["Blue".to_string()][..]));
    assert_eq!(record.string_list("artist"), Some(&["Joni".to_string()][..]));
    assert_eq!(record.string_list("tracknumber"), Some(&["3/12".to_string()][..]));
    assert_eq!(record.string("filetype"), Some(".mp3"));
}

#[test]
fn m4a_atoms_are_read() {
    let temp = TempDir::new().unwrap();
    let bytes = m4a_bytes("Blue", "Joni", (3, 12), Some(&JPEG_BYTES));
    let path = write(&temp, "blue.m4a", &bytes);

    let container = LoftyContainerReader::new().open(&path).unwrap();

    assert_eq!(container.kind, ContainerKind::Mp4);
    assert!((container.duration_seconds - 10.0).abs() < 0.01);
    let tags = container.tags().unwrap();
    assert_eq!(tags.get("\u{a9}nam"), Some(&[RawValue::text("Blue")][..]));
    assert_eq!(tags.get("trkn"), Some(&[RawValue::Pair(vec![3, 12])][..]));
    assert_eq!(tags.get("covr"), Some(&[RawValue::Bytes(JPEG_BYTES.to_vec())][..]));

    let record = translate(&path, &container).unwrap();
    assert_eq!(record.string_list("title"), Some(&["Blue".to_string()][..]));
    assert_eq!(record.string("tracknumber"), Some("3/12"));
    assert_eq!(record.bytes_list("covr"), Some(&[JPEG_BYTES.to_vec()][..]));
    assert_eq!(record.string("filetype"), Some(".m4a"));
}

#[test]
fn opus_comments_and_picture_are_read() {
    let temp = TempDir::new().unwrap();
    let comments = [("TITLE", "Hymn"), ("ARTIST", "Choir"), ("TRACKNUMBER", "3/12")];
    let path = write(&temp, "hymn.opus", &opus_bytes(&comments, Some(&JPEG_BYTES)));

    let container = LoftyContainerReader::new().open(&path).unwrap();

    assert_eq!(container.kind, ContainerKind::OggOpus);
    assert!((container.duration_seconds - 10.0).abs() < 0.01);
    assert!(container.pictures.is_empty());
    let tags = container.tags().unwrap();
    assert_eq!(tags.get("TITLE"), Some(&[RawValue::text("Hymn")][..]));
    assert_eq!(tags.get("METADATA_BLOCK_PICTURE").map(<[RawValue]>::len), Some(1));
    assert_eq!(tags.get("ENCODER"), None);

    let record = translate(&path, &container).unwrap();
    assert_eq!(record.string_list("title"), Some(&["Hymn".to_string()][..]));
    assert_eq!(record.string_list("tracknumber"), Some(&["3/12".to_string()][..]));
    assert_eq!(record.string("filetype"), Some(".opus"));
}

#[test]
fn flac_without_comment_block_has_no_record() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "bare.flac", &flac_bytes(None, None));

    let container = LoftyContainerReader::new().open(&path).unwrap();

    assert!(container.tags().is_none());
    assert!(translate(&path, &container).is_none());
}

#[test]
fn corrupt_file_is_not_parsable() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "broken.flac", &[0u8; 64]);

    let err = LoftyContainerReader::new().open(&path).unwrap_err();

    assert!(err.is_not_parsable());
    assert!(err.to_string().contains("broken.flac"));
}

#[test]
fn asf_files_are_not_parsable_with_lofty() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "song.wma", b"0&\xb2u\x8ef\xcf\x11");

    let err = LoftyContainerReader::new().open(&path).unwrap_err();
    assert!(err.is_not_parsable());
}

#[test]
fn upper_case_extension_is_unsupported() {
    let err = LoftyContainerReader::new()
        .open(Path::new("/music/LOUD.FLAC"))
        .unwrap_err();
    assert!(!err.is_not_parsable());
}

#[test]
fn directory_instead_of_file_is_not_parsable() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("album.flac");
    fs::create_dir(&dir).unwrap();

    let err = LoftyContainerReader::new().open(&dir).unwrap_err();
    assert!(err.is_not_parsable());
}
