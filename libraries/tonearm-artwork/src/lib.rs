//! Tonearm Artwork - cover art extraction
//!
//! Pulls embedded cover art out of parsed tag containers. Each container
//! family stores pictures differently:
//!
//! - MP3/AIFF: ID3 `APIC` frames
//! - FLAC: dedicated PICTURE metadata blocks
//! - Ogg Vorbis/Opus: base64 `METADATA_BLOCK_PICTURE` comments
//! - MP4: `covr` atoms
//!
//! Candidate bytes (except FLAC picture blocks) are validated by their image
//! signature before being returned.
//!
//! # Example
//!
//! ```no_run
//! use tonearm_artwork::CoverArtExtractor;
//! use tonearm_metadata::LoftyContainerReader;
//! use std::path::Path;
//!
//! let extractor = CoverArtExtractor::new(LoftyContainerReader::new());
//!
//! match extractor.extract(Path::new("music/track.mp3")) {
//!     Ok(Some(art)) => println!("{} bytes of {}", art.data.len(), art.mime_type),
//!     Ok(None) => println!("No artwork found"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

mod error;
mod extractor;
mod types;

pub mod sniff;

pub use error::{ArtworkError, Result};
pub use extractor::{decode_vorbis_picture, extract_cover_art, CoverArtExtractor};
pub use sniff::{image_type, is_image};
pub use types::CoverArt;
