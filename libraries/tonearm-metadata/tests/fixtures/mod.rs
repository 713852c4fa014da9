//! Synthesized audio fixtures
//!
//! Builds tiny but structurally valid FLAC, MP3, M4A and Opus files so tests
//! do not need binary files checked in. Tags and pictures are encoded with
//! lofty; the container framing around them is written by hand.
#![allow(dead_code)]

use lofty::id3::v2::Id3v2Tag;
use lofty::mp4::Ilst;
use lofty::{Accessor, MimeType, Picture, PictureInformation, PictureType, TagExt};
use std::sync::Once;

static INIT: Once = Once::new();

/// Route library logs to the test writer, once per test binary
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Ten bytes carrying a JPEG/JFIF signature
pub const JPEG_BYTES: [u8; 10] = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

/// Sample rate written into STREAMINFO and the MP4 media header
pub const SAMPLE_RATE: u64 = 44_100;

/// Total samples written into STREAMINFO (ten seconds)
pub const TOTAL_SAMPLES: u64 = SAMPLE_RATE * 10;

/// Vendor string of every synthesized comment block
pub const VENDOR: &str = "tonearm tests";

const BLOCK_STREAMINFO: u8 = 0;
const BLOCK_VORBIS_COMMENT: u8 = 4;
const BLOCK_PICTURE: u8 = 6;

/// Front cover as lofty models it
pub fn front_cover(data: &[u8]) -> Picture {
    Picture::new_unchecked(
        PictureType::CoverFront,
        Some(MimeType::Jpeg),
        None,
        data.to_vec(),
    )
}

/// A FLAC stream with the given Vorbis comments and optional front cover
///
/// The comment block is omitted entirely when `comments` is `None`.
pub fn flac_bytes(comments: Option<&[(&str, &str)]>, cover: Option<&[u8]>) -> Vec<u8> {
    let mut blocks = vec![(BLOCK_STREAMINFO, stream_info())];
    if let Some(comments) = comments {
        blocks.push((BLOCK_VORBIS_COMMENT, comment_body(comments)));
    }
    if let Some(data) = cover {
        let block = front_cover(data).as_flac_bytes(PictureInformation::default(), false);
        blocks.push((BLOCK_PICTURE, block));
    }

    let mut out = b"fLaC".to_vec();
    let last = blocks.len() - 1;
    for (i, (block_type, body)) in blocks.into_iter().enumerate() {
        let header = if i == last { block_type | 0x80 } else { block_type };
        out.push(header);
        out.extend_from_slice(&(body.len() as u32).to_be_bytes()[1..]);
        out.extend_from_slice(&body);
    }
    out
}

fn stream_info() -> Vec<u8> {
    let mut body = Vec::with_capacity(34);
    body.extend_from_slice(&4096u16.to_be_bytes());
    body.extend_from_slice(&4096u16.to_be_bytes());
    body.extend_from_slice(&[0, 0, 0]);
    body.extend_from_slice(&[0, 0, 0]);

    let channels_minus_one: u64 = 1;
    let bits_minus_one: u64 = 15;
    let packed =
        (SAMPLE_RATE << 44) | (channels_minus_one << 41) | (bits_minus_one << 36) | TOTAL_SAMPLES;
    body.extend_from_slice(&packed.to_be_bytes());
    body.extend_from_slice(&[0u8; 16]);
    body
}

/// Vorbis comment body: vendor, count, then `KEY=value` entries
fn comment_body(comments: &[(&str, &str)]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&(VENDOR.len() as u32).to_le_bytes());
    body.extend_from_slice(VENDOR.as_bytes());
    body.extend_from_slice(&(comments.len() as u32).to_le_bytes());
    for (key, value) in comments {
        let entry = format!("{key}={value}");
        body.extend_from_slice(&(entry.len() as u32).to_le_bytes());
        body.extend_from_slice(entry.as_bytes());
    }
    body
}

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, joint stereo, no CRC or padding
const MPEG_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];

/// 1152 samples * 128 kbps / 44.1 kHz, in bytes
const MPEG_FRAME_LEN: usize = 417;

const MPEG_FRAMES: usize = 40;

/// An MP3 file: an ID3v2 tag followed by silent MPEG frames
pub fn mp3_bytes(title: &str, artist: &str, track: (u32, u32), cover: Option<&[u8]>) -> Vec<u8> {
    let mut tag = Id3v2Tag::new();
    tag.set_title(title.to_string());
    tag.set_artist(artist.to_string());
    tag.set_track(track.0);
    tag.set_track_total(track.1);
    if let Some(data) = cover {
        let _ = tag.insert_picture(front_cover(data));
    }

    let mut out = Vec::new();
    tag.dump_to(&mut out).unwrap();
    for _ in 0..MPEG_FRAMES {
        out.extend_from_slice(&MPEG_FRAME_HEADER);
        out.resize(out.len() + MPEG_FRAME_LEN - MPEG_FRAME_HEADER.len(), 0);
    }
    out
}

/// An M4A file: `ftyp`, then a `moov` with one sound track and an `ilst`
///
/// The track carries `mdhd` and `hdlr` only, ten seconds at 44.1 kHz.
pub fn m4a_bytes(title: &str, artist: &str, track: (u32, u32), cover: Option<&[u8]>) -> Vec<u8> {
    let mut ilst = Ilst::default();
    ilst.set_title(title.to_string());
    ilst.set_artist(artist.to_string());
    ilst.set_track(track.0);
    ilst.set_track_total(track.1);
    if let Some(data) = cover {
        ilst.insert_picture(front_cover(data));
    }
    let mut ilst_atom = Vec::new();
    ilst.dump_to(&mut ilst_atom).unwrap();

    let mut mdhd = vec![0u8; 12];
    mdhd.extend_from_slice(&(SAMPLE_RATE as u32).to_be_bytes());
    mdhd.extend_from_slice(&(TOTAL_SAMPLES as u32).to_be_bytes());
    mdhd.extend_from_slice(&[0x55, 0xC4, 0, 0]);

    let mut hdlr = vec![0u8; 8];
    hdlr.extend_from_slice(b"soun");
    hdlr.extend_from_slice(&[0u8; 13]);

    let mdia = atom(b"mdia", &[atom(b"mdhd", &mdhd), atom(b"hdlr", &hdlr)].concat());
    let trak = atom(b"trak", &mdia);
    let meta = atom(b"meta", &[vec![0u8; 4], ilst_atom].concat());
    let udta = atom(b"udta", &meta);

    let mut out = atom(b"ftyp", b"M4A \0\0\0\0M4A ");
    out.extend(atom(b"moov", &[trak, udta].concat()));
    out
}

fn atom(ident: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut out = ((body.len() + 8) as u32).to_be_bytes().to_vec();
    out.extend_from_slice(ident);
    out.extend_from_slice(body);
    out
}

/// Samples the Opus decoder discards at the start of the stream
const OPUS_PRE_SKIP: u16 = 312;

/// Ten seconds at the fixed 48 kHz Opus granule rate
const OPUS_SAMPLES: u64 = 480_000;

const OGG_BOS: u8 = 0x02;
const OGG_EOS: u8 = 0x04;

/// An Ogg Opus stream with the given comments and optional front cover
///
/// The cover is stored the way taggers do it, as a base64
/// `METADATA_BLOCK_PICTURE` comment.
pub fn opus_bytes(comments: &[(&str, &str)], cover: Option<&[u8]>) -> Vec<u8> {
    let mut head = b"OpusHead".to_vec();
    head.push(1);
    head.push(2);
    head.extend_from_slice(&OPUS_PRE_SKIP.to_le_bytes());
    head.extend_from_slice(&48_000u32.to_le_bytes());
    head.extend_from_slice(&0u16.to_le_bytes());
    head.push(0);

    let encoded_cover = cover.map(|data| {
        let bytes = front_cover(data).as_flac_bytes(PictureInformation::default(), true);
        String::from_utf8(bytes).unwrap()
    });
    let mut entries = comments.to_vec();
    if let Some(encoded) = encoded_cover.as_deref() {
        entries.push(("METADATA_BLOCK_PICTURE", encoded));
    }
    let mut tags = b"OpusTags".to_vec();
    tags.extend(comment_body(&entries));

    let mut out = ogg_page(OGG_BOS, 0, 0, &head);
    out.extend(ogg_page(0, 0, 1, &tags));
    out.extend(ogg_page(OGG_EOS, OPUS_SAMPLES + u64::from(OPUS_PRE_SKIP), 2, &[0xF8]));
    out
}

/// One Ogg page holding one packet; the checksum is left zero
fn ogg_page(header_type: u8, granule: u64, sequence: u32, packet: &[u8]) -> Vec<u8> {
    let mut lacing = vec![255u8; packet.len() / 255];
    lacing.push((packet.len() % 255) as u8);

    let mut out = b"OggS".to_vec();
    out.push(0);
    out.push(header_type);
    out.extend_from_slice(&granule.to_le_bytes());
    out.extend_from_slice(&0x746f_6e65u32.to_le_bytes());
    out.extend_from_slice(&sequence.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.push(lacing.len() as u8);
    out.extend(lacing);
    out.extend_from_slice(packet);
    out
}
