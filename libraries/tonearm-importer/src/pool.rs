//! Rayon worker pool and progress bar for batch imports

use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}";

/// Progress bar on stderr, or a hidden one when progress is off
pub(crate) fn progress_bar(len: usize, visible: bool, message: &'static str) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template(BAR_TEMPLATE)
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar.set_message(message);
    bar
}

/// Run `work` over `paths` on a dedicated pool of `workers` threads
///
/// A file whose work panics is logged and contributes nothing; the rest of
/// the batch carries on. Results keep the order of `paths`.
pub(crate) fn run<U, F>(paths: &[PathBuf], workers: usize, bar: &ProgressBar, work: F) -> Result<Vec<U>>
where
    U: Send,
    F: Fn(&Path) -> Option<U> + Sync,
{
    let guarded = |path: &PathBuf| -> Option<U> {
        let outcome = catch_unwind(AssertUnwindSafe(|| work(path.as_path())));
        bar.inc(1);
        match outcome {
            Ok(result) => result,
            Err(_) => {
                tracing::error!("Worker panicked while processing {}", path.display());
                None
            }
        }
    };

    if workers <= 1 || paths.len() <= 1 {
        return Ok(paths.iter().filter_map(guarded).collect());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("tonearm-import-{i}"))
        .build()?;
    Ok(pool.install(|| paths.par_iter().filter_map(guarded).collect()))
}
