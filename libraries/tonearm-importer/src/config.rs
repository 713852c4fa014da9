//! Import configuration

use serde::{Deserialize, Serialize};

/// Configuration for batch imports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Use parallel processing (default: true)
    pub parallel: bool,

    /// Number of worker threads (default: num_cpus)
    pub num_threads: usize,

    /// Draw progress bars on stderr (default: false)
    pub show_progress: bool,

    /// Follow symbolic links while scanning (default: false)
    pub follow_links: bool,

    /// Use a sibling `cover.jpg` when a file has no embedded art (default: false)
    pub folder_cover_fallback: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            num_threads: num_cpus::get(),
            show_progress: false,
            follow_links: false,
            folder_cover_fallback: false,
        }
    }
}

impl ImportConfig {
    /// Sequential configuration, mostly useful for tests and debugging
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            num_threads: 1,
            ..Self::default()
        }
    }

    /// Reject settings the worker pool cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        if self.parallel && self.num_threads == 0 {
            return Err(crate::ImportError::InvalidConfig(
                "num_threads must be at least 1 when parallel is enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Worker count actually used for a batch of `items` files
    pub(crate) fn workers_for(&self, items: usize) -> usize {
        if self.parallel {
            self.num_threads.min(items).max(1)
        } else {
            1
        }
    }
}
