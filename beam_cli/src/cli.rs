//! Clap CLI definitions for the `beam` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// beam -- shear force and bending moment diagrams.
///
/// Solves a simply-supported beam carrying point loads and UDLs and prints
/// its reactions, peak values and sampled SFD/BMD data.
#[derive(Parser, Debug)]
#[command(
    name = "beam",
    about = "Shear force and bending moment diagrams for simply-supported beams",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Config file (default: ./beam.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (errors included).
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output on stderr.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a beam described by a JSON definition file.
    Analyze(AnalyzeArgs),

    /// Enter a beam and its loads at the prompt.
    #[command(alias = "i")]
    Interactive(OutputArgs),

    /// Analyze the built-in reference beam.
    Demo(OutputArgs),
}

/// Arguments for `beam analyze`.
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the beam definition (JSON).
    pub definition: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Number of evenly spaced diagram points (at least 2).
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Output format.
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also write the diagram to <output-dir>/<beam name>.csv.
    #[arg(long)]
    pub save: bool,

    /// Directory for saved diagrams.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary report and aligned table.
    #[default]
    Table,
    /// Machine-readable report.
    Json,
    /// `x,shear,moment` rows.
    Csv,
}
