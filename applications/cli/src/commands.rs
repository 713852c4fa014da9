/// CLI subcommands
use crate::error::Result;
use crate::output;
use clap::Subcommand;
use serde_json::{json, Value};
use std::path::PathBuf;
use tonearm_importer::{ImportConfig, TagImporter};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Translate tags for every audio file under a directory
    Tags {
        /// Music directory
        dir: PathBuf,
    },
    /// Extract embedded cover art
    CoverArt {
        /// Music directory
        dir: PathBuf,
        /// Write images here instead of only reporting them
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Translate tags and extract cover art in one pass
    Scan {
        /// Music directory
        dir: PathBuf,
        /// Write images here instead of only reporting them
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// One flattened line per track
    Summary {
        /// Music directory
        dir: PathBuf,
    },
}

/// Run `command` and return its JSON output
pub fn execute(command: &Command, config: ImportConfig) -> Result<Value> {
    let importer = TagImporter::new(config);

    match command {
        Command::Tags { dir } => {
            let tags = importer.tags(dir)?;
            tracing::info!("Translated {} files", tags.len());
            output::tags_json(&tags)
        }
        Command::CoverArt { dir, out_dir } => {
            let covers = importer.cover_art(dir)?;
            tracing::info!("Found cover art in {} files", covers.len());
            let written = match out_dir {
                Some(out_dir) => Some(output::write_cover_art(&covers, out_dir)?),
                None => None,
            };
            Ok(output::cover_art_json(&covers, written.as_deref()))
        }
        Command::Scan { dir, out_dir } => {
            let (tags, covers) = importer.tags_and_cover_art(dir)?;
            tracing::info!(
                "Translated {} files, {} with cover art",
                tags.len(),
                covers.len()
            );
            let written = match out_dir {
                Some(out_dir) => Some(output::write_cover_art(&covers, out_dir)?),
                None => None,
            };
            Ok(json!({
                "tags": output::tags_json(&tags)?,
                "cover_art": output::cover_art_json(&covers, written.as_deref()),
            }))
        }
        Command::Summary { dir } => {
            let tags = importer.tags(dir)?;
            Ok(serde_json::to_value(output::summary_rows(&tags))?)
        }
    }
}
