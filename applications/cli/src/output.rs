/// JSON rendering and cover art dumping for the CLI commands
use crate::error::Result;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tonearm_artwork::CoverArt;
use tonearm_importer::{CoverArtMap, TagsMap};
use tonearm_metadata::TrackSummary;

/// One line of the `summary` command
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub path: PathBuf,
    #[serde(flatten)]
    pub summary: TrackSummary,
    pub length: String,
}

/// Records keyed by path, buckets as nested objects
pub fn tags_json(tags: &TagsMap) -> Result<Value> {
    let mut out = Map::new();
    for (path, record) in tags {
        out.insert(path.display().to_string(), serde_json::to_value(record)?);
    }
    Ok(Value::Object(out))
}

/// Cover art keyed by path
///
/// With `written` the value is the dumped image path, otherwise the detected
/// MIME type and size.
pub fn cover_art_json(covers: &CoverArtMap, written: Option<&[(PathBuf, PathBuf)]>) -> Value {
    let mut out = Map::new();
    match written {
        Some(written) => {
            for (source, image) in written {
                out.insert(source.display().to_string(), json!(image));
            }
        }
        None => {
            for (path, data) in covers {
                let art = CoverArt::from_bytes(data.clone());
                out.insert(
                    path.display().to_string(),
                    json!({ "mime_type": art.mime_type, "bytes": art.data.len() }),
                );
            }
        }
    }
    Value::Object(out)
}

/// Write every cover to `out_dir`, returning `(source, image)` pairs
///
/// Images are numbered in path order so covers from files sharing a stem in
/// different folders do not collide.
pub fn write_cover_art(covers: &CoverArtMap, out_dir: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(covers.len());
    for (index, (source, data)) in covers.iter().enumerate() {
        let art = CoverArt::from_bytes(data.clone());
        let stem = source
            .file_stem()
            .map_or_else(|| "cover".to_string(), |s| s.to_string_lossy().into_owned());
        let image = out_dir.join(format!("{:04}-{}.{}", index + 1, stem, art.extension()));

        fs::write(&image, &art.data)?;
        tracing::debug!("Wrote {} ({} bytes)", image.display(), art.data.len());
        written.push((source.clone(), image));
    }

    Ok(written)
}

/// Flattened per-track view, in path order
pub fn summary_rows(tags: &TagsMap) -> Vec<SummaryRow> {
    tags.iter()
        .map(|(path, record)| {
            let summary = TrackSummary::from_record(record);
            SummaryRow {
                path: path.clone(),
                length: summary.duration_display(),
                summary,
            }
        })
        .collect()
}
