//! Tonearm Metadata
//!
//! Tag translation for Tonearm.
//!
//! This crate provides:
//! - A tag-container reader backed by lofty (MP3/AIFF, FLAC, Ogg Vorbis/Opus, MP4)
//! - Native key tables for ID3, MP4 and ASF
//! - The field translator that maps native tags into a typed record
//! - The typed aggregator that files values into buckets by type
//! - A flattened summary view for library builders
//!
//! # Example
//!
//! ```rust,no_run
//! use tonearm_core::ContainerReader;
//! use tonearm_metadata::{translate, LoftyContainerReader};
//! use std::path::Path;
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let path = Path::new("/music/song.flac");
//! let container = LoftyContainerReader::new().open(path)?;
//!
//! if let Some(record) = translate(path, &container) {
//!     println!("{:?}", record.string_list("title"));
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod reader;

pub mod aggregator;
pub mod mapping;
pub mod summary;
pub mod translator;

pub use aggregator::add_field;
pub use error::{MetadataError, Result};
pub use mapping::{canonical_field_for, cover_art_key, native_prefix};
pub use reader::LoftyContainerReader;
pub use summary::{format_duration, format_duration_long, TrackSummary};
pub use translator::{translate, UNKNOWN_ALBUM, UNKNOWN_ARTIST};
