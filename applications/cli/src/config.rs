/// CLI configuration
use crate::error::{CliError, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tonearm_importer::ImportConfig;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "tonearm.toml";

/// Prefix of environment overrides, e.g. `TONEARM_IMPORT__PARALLEL=false`
pub const ENV_PREFIX: &str = "TONEARM";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub import: ImportConfig,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default `tonearm.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::Config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (prefixed with TONEARM_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.import
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Command-line flags applied on top of the loaded configuration
#[derive(Debug, Clone, Default, Args)]
pub struct ImportOverrides {
    /// Process files on the current thread only
    #[arg(long, global = true)]
    pub sequential: bool,

    /// Number of worker threads
    #[arg(short = 'j', long, value_name = "N", global = true)]
    pub threads: Option<usize>,

    /// Show progress bars on stderr
    #[arg(long, global = true)]
    pub progress: bool,

    /// Follow symbolic links while scanning
    #[arg(long, global = true)]
    pub follow_links: bool,

    /// Use a folder cover.jpg when a file has no embedded art
    #[arg(long, global = true)]
    pub folder_cover: bool,
}

impl ImportOverrides {
    /// Apply the flags that were given; absent flags keep the loaded value
    pub fn apply(&self, config: &mut ImportConfig) {
        if self.sequential {
            config.parallel = false;
        }
        if let Some(threads) = self.threads {
            config.num_threads = threads;
        }
        if self.progress {
            config.show_progress = true;
        }
        if self.follow_links {
            config.follow_links = true;
        }
        if self.folder_cover {
            config.folder_cover_fallback = true;
        }
    }
}
