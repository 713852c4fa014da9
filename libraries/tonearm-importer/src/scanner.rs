//! File scanning for audio files

use crate::Result;
use std::path::{Path, PathBuf};
use tonearm_core::{supported_extension, TonearmError};
use walkdir::WalkDir;

/// Scanner for audio files in directories
#[derive(Debug, Clone, Default)]
pub struct FileScanner {
    /// Whether to follow symbolic links
    follow_links: bool,
}

impl FileScanner {
    /// Create a new file scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Scan a directory tree for candidate audio files
    ///
    /// Returns absolute paths, sorted. Unreadable entries below the root are
    /// logged and skipped.
    pub fn scan_directory(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !path.exists() {
            return Err(TonearmError::FileNotFound(path.to_path_buf()).into());
        }

        if !path.is_dir() {
            return Err(TonearmError::InvalidPath(format!("{} is not a directory", path.display())).into());
        }

        let root = std::fs::canonicalize(path)?;
        let mut audio_files = Vec::new();

        for entry in WalkDir::new(&root).follow_links(self.follow_links) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            if is_audio_file(entry.path()) {
                audio_files.push(entry.into_path());
            }
        }

        audio_files.sort();
        tracing::debug!("Found {} audio files under {}", audio_files.len(), root.display());
        Ok(audio_files)
    }
}

/// Check if a path names a supported, non-hidden audio file
///
/// Extension matching is case-sensitive: `song.MP3` is not a candidate.
pub fn is_audio_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .map_or(true, |name| name.starts_with('.'));

    !hidden && supported_extension(path).is_some()
}
