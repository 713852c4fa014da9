//! Tonearm Core
//!
//! Format-agnostic types, traits, and error handling shared by the Tonearm
//! tag-translation crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Container types**: `ContainerKind`, `RawValue`, `NativeTags`, `ParsedContainer`
//! - **Record types**: `Scalar`, `FieldValue`, `Bucket`, `TranslatedRecord`
//! - **Core Traits**: `ContainerReader`
//! - **Error Handling**: Unified `TonearmError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tonearm_core::{ContainerKind, NativeTags, ParsedContainer, RawValue};
//!
//! let tags = NativeTags::new().with("TIT2", RawValue::text("Intro"));
//! let container = ParsedContainer::new(ContainerKind::Mp3, ".mp3", 93.5).with_tags(tags);
//!
//! assert_eq!(container.kind, ContainerKind::Mp3);
//! assert!(container.tags.is_some());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TonearmError};
pub use traits::ContainerReader;
pub use types::{
    supported_extension, Bucket, ContainerKind, EmbeddedPicture, FieldValue, NativeTags,
    ParsedContainer, RawValue, Scalar, TranslatedRecord, SUPPORTED_EXTENSIONS,
};
