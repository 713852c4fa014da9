//! Batch orchestration: scan a folder, then read, translate and extract each file

use crate::config::ImportConfig;
use crate::pool;
use crate::scanner::FileScanner;
use crate::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tonearm_artwork::{extract_cover_art, is_image};
use tonearm_core::{ContainerReader, ParsedContainer, TranslatedRecord};
use tonearm_metadata::{translate, LoftyContainerReader};

/// Translated records keyed by file path
pub type TagsMap = BTreeMap<PathBuf, TranslatedRecord>;

/// Cover art bytes keyed by file path
pub type CoverArtMap = BTreeMap<PathBuf, Vec<u8>>;

/// Name of the folder image used by the cover fallback
pub const FOLDER_COVER_NAME: &str = "cover.jpg";

#[derive(Debug, Clone, Copy)]
struct Wanted {
    tags: bool,
    cover_art: bool,
}

#[derive(Debug)]
struct FileOutcome {
    path: PathBuf,
    tags: Option<TranslatedRecord>,
    cover_art: Option<Vec<u8>>,
}

/// Batch importer over a container reader
///
/// Every entry point scans the directory afresh and returns new maps; no
/// state is kept between calls.
pub struct TagImporter<R: ContainerReader = LoftyContainerReader> {
    reader: R,
    config: ImportConfig,
}

impl TagImporter<LoftyContainerReader> {
    /// Create an importer backed by the lofty reader
    pub fn new(config: ImportConfig) -> Self {
        Self::with_reader(LoftyContainerReader::new(), config)
    }
}

impl Default for TagImporter<LoftyContainerReader> {
    fn default() -> Self {
        Self::new(ImportConfig::default())
    }
}

impl<R: ContainerReader> TagImporter<R> {
    /// Create an importer using a custom container reader
    pub fn with_reader(reader: R, config: ImportConfig) -> Self {
        Self { reader, config }
    }

    /// Active configuration
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Translate tags and extract cover art for every file under `directory`
    pub fn tags_and_cover_art(&self, directory: &Path) -> Result<(TagsMap, CoverArtMap)> {
        let outcomes = self.import_directory(
            directory,
            Wanted {
                tags: true,
                cover_art: true,
            },
        )?;
        Ok(collect(outcomes))
    }

    /// Translate tags for every file under `directory`
    pub fn tags(&self, directory: &Path) -> Result<TagsMap> {
        let outcomes = self.import_directory(
            directory,
            Wanted {
                tags: true,
                cover_art: false,
            },
        )?;
        Ok(collect(outcomes).0)
    }

    /// Extract cover art for every file under `directory`
    pub fn cover_art(&self, directory: &Path) -> Result<CoverArtMap> {
        let outcomes = self.import_directory(
            directory,
            Wanted {
                tags: false,
                cover_art: true,
            },
        )?;
        Ok(collect(outcomes).1)
    }

    fn import_directory(&self, directory: &Path, wanted: Wanted) -> Result<Vec<FileOutcome>> {
        self.config.validate()?;

        let files = FileScanner::new()
            .follow_links(self.config.follow_links)
            .scan_directory(directory)?;
        tracing::info!("Importing {} files from {}", files.len(), directory.display());

        let workers = self.config.workers_for(files.len());
        let bar = pool::progress_bar(files.len(), self.config.show_progress, "Importing files");
        let outcomes = pool::run(&files, workers, &bar, |path| self.import_file(path, wanted))?;
        bar.finish();

        Ok(outcomes)
    }

    /// Open, translate and extract one file; its container is dropped on return
    fn import_file(&self, path: &Path, wanted: Wanted) -> Option<FileOutcome> {
        let container = match self.reader.open(path) {
            Ok(container) => container,
            Err(e) => {
                tracing::debug!("Excluding {} from batch: {}", path.display(), e);
                return None;
            }
        };
        Some(self.process(path, &container, wanted))
    }

    fn process(&self, path: &Path, container: &ParsedContainer, wanted: Wanted) -> FileOutcome {
        let tags = if wanted.tags {
            let record = translate(path, container);
            if record.is_none() {
                tracing::warn!("Unable to extract {}, no tags", path.display());
            }
            record
        } else {
            None
        };

        let cover_art = if wanted.cover_art {
            extract_cover_art(container).or_else(|| {
                if self.config.folder_cover_fallback {
                    folder_cover(path)
                } else {
                    None
                }
            })
        } else {
            None
        };

        FileOutcome {
            path: path.to_path_buf(),
            tags,
            cover_art,
        }
    }
}

/// Read the sibling `cover.jpg` of `path` if it holds an image
pub fn folder_cover(path: &Path) -> Option<Vec<u8>> {
    let cover_path = path.parent()?.join(FOLDER_COVER_NAME);
    if !cover_path.is_file() {
        return None;
    }

    match std::fs::read(&cover_path) {
        Ok(data) if is_image(&data) => Some(data),
        Ok(_) => {
            tracing::debug!("{} is not an image", cover_path.display());
            None
        }
        Err(e) => {
            tracing::debug!("Could not read {}: {}", cover_path.display(), e);
            None
        }
    }
}

fn collect(outcomes: Vec<FileOutcome>) -> (TagsMap, CoverArtMap) {
    let mut tags = TagsMap::new();
    let mut cover_art = CoverArtMap::new();

    for outcome in outcomes {
        if let Some(record) = outcome.tags {
            tags.insert(outcome.path.clone(), record);
        }
        if let Some(data) = outcome.cover_art {
            cover_art.insert(outcome.path, data);
        }
    }

    (tags, cover_art)
}

/// Translate tags and extract cover art with the default configuration
pub fn tags_and_cover_art(directory: impl AsRef<Path>) -> Result<(TagsMap, CoverArtMap)> {
    TagImporter::<LoftyContainerReader>::default().tags_and_cover_art(directory.as_ref())
}

/// Translate tags with the default configuration
pub fn tags(directory: impl AsRef<Path>) -> Result<TagsMap> {
    TagImporter::<LoftyContainerReader>::default().tags(directory.as_ref())
}

/// Extract cover art with the default configuration
pub fn cover_art(directory: impl AsRef<Path>) -> Result<CoverArtMap> {
    TagImporter::<LoftyContainerReader>::default().cover_art(directory.as_ref())
}
