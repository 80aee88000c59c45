//! Layered settings for the `beam` command.
//!
//! Sources, lowest priority first: built-in defaults, `beam.toml` (or the
//! file given with `--config`), `BEAM_*` environment variables. Command-line
//! flags are applied on top by [`Settings::resolve`].

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use beam_core::DEFAULT_SAMPLE_COUNT;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::cli::{OutputArgs, OutputFormat};

/// Config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "beam.toml";

/// Folder saved diagrams go to
pub const DEFAULT_OUTPUT_DIR: &str = "Beam_Outputs";

/// Persistent CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Diagram points per beam
    pub samples: usize,
    /// Where `--save` writes diagrams
    pub output_dir: PathBuf,
    /// Default output format
    pub format: OutputFormat,
    /// Decimal places in table output
    pub precision: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLE_COUNT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::Table,
            precision: 3,
        }
    }
}

/// Load configuration.
///
/// An explicit `path` must exist; the default `beam.toml` is optional.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let file = match path {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };

    Figment::from(Serialized::defaults(CliConfig::default()))
        .merge(Toml::file(&file))
        .merge(Env::prefixed("BEAM_"))
        .extract()
        .with_context(|| format!("invalid configuration (from {})", file.display()))
}

/// Effective settings for one command run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub samples: usize,
    pub format: OutputFormat,
    pub precision: usize,
    /// Set when the diagram should be written to disk
    pub save_dir: Option<PathBuf>,
}

impl Settings {
    /// Apply command-line overrides to the loaded config.
    ///
    /// The global `--json` flag wins over any `--format`.
    pub fn resolve(config: &CliConfig, args: &OutputArgs, json: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            args.format.unwrap_or(config.format)
        };
        let save_dir = args.save.then(|| {
            args.output_dir
                .clone()
                .unwrap_or_else(|| config.output_dir.clone())
        });

        Self {
            samples: args.samples.unwrap_or(config.samples),
            format,
            precision: config.precision,
            save_dir,
        }
    }
}
