//! Tonearm Importer
//!
//! Batch tag and cover art import for a music folder.
//!
//! # Features
//!
//! - Recursive directory scanning for supported containers
//! - Tag translation and cover art extraction per file
//! - Parallel processing on a rayon worker pool
//! - Optional progress bars and folder `cover.jpg` fallback
//!
//! # Architecture
//!
//! - `scanner`: Filesystem scanning for audio files
//! - `importer`: Per-file open, translate and extract pass
//! - `config`: Import configuration
//!
//! # Example
//!
//! ```no_run
//! let (tags, covers) = tonearm_importer::tags_and_cover_art("/music")?;
//! for (path, record) in &tags {
//!     println!("{}: {:?}", path.display(), record.string_list("title"));
//! }
//! println!("{} files with cover art", covers.len());
//! # Ok::<(), tonearm_importer::ImportError>(())
//! ```

mod error;
mod pool;

pub mod config;
pub mod importer;
pub mod scanner;

pub use config::ImportConfig;
pub use error::ImportError;
pub use importer::{
    cover_art, folder_cover, tags, tags_and_cover_art, CoverArtMap, TagImporter, TagsMap,
    FOLDER_COVER_NAME,
};
pub use scanner::{is_audio_file, FileScanner};

/// Result type for importer operations
pub type Result<T> = std::result::Result<T, ImportError>;
