//! Command handlers.
//!
//! Each command builds a [`Beam`] its own way and hands it to [`present`],
//! which analyses it and prints it in the selected format.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use beam_core::{Beam, BeamInput};
use tracing::info;

use crate::cli::{AnalyzeArgs, OutputArgs, OutputFormat};
use crate::config::{CliConfig, Settings};
use crate::prompt::Prompter;
use crate::report::{self, Analysis};

/// Name of the built-in reference beam
pub const DEMO_BEAM_NAME: &str = "Beam A";

/// The reference beam: 15 units long, two point loads and a partial UDL,
/// all with negative (upward) magnitudes.
pub fn demo_input() -> BeamInput {
    BeamInput::new(DEMO_BEAM_NAME, 15.0)
        .with_point_load(5.0, -10.0)
        .with_point_load(12.0, -6.0)
        .with_udl(7.0, 14.0, -2.0)
}

/// Read a beam definition from a JSON file.
pub fn load_definition(path: &Path) -> Result<Beam> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let input: BeamInput = serde_json::from_str(&text)
        .with_context(|| format!("invalid beam definition in {}", path.display()))?;
    Ok(input.build()?)
}

pub fn run_analyze(config: &CliConfig, json: bool, args: &AnalyzeArgs) -> Result<()> {
    let beam = load_definition(&args.definition)?;
    info!(path = %args.definition.display(), name = beam.name(), "loaded beam definition");
    present(&beam, &Settings::resolve(config, &args.output, json))
}

pub fn run_interactive(config: &CliConfig, json: bool, args: &OutputArgs) -> Result<()> {
    let beam = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Prompter::new(stdin.lock(), stdout.lock()).read_beam()?
    };
    println!();
    present(&beam, &Settings::resolve(config, args, json))
}

pub fn run_demo(config: &CliConfig, json: bool, args: &OutputArgs) -> Result<()> {
    let beam = demo_input().build()?;
    present(&beam, &Settings::resolve(config, args, json))
}

/// Analyse `beam`, print it to stdout and optionally save the diagram.
pub fn present(beam: &Beam, settings: &Settings) -> Result<()> {
    let analysis = Analysis::run(beam, settings.samples)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match settings.format {
        OutputFormat::Table => report::write_text(&mut out, &analysis, settings.precision)?,
        OutputFormat::Json => report::write_json(&mut out, &analysis)?,
        OutputFormat::Csv => report::write_csv(&mut out, &analysis.diagram.points)?,
    }
    out.flush()?;

    if let Some(dir) = &settings.save_dir {
        let path = report::save_csv(dir, &analysis.diagram)?;
        eprintln!("Saved diagram to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    #[test]
    fn test_demo_reactions() {
        let beam = demo_input().build().unwrap();
        let reactions = beam.reactions();

        // Σ(P·a) = -50 - 72 - 14·10.5 = -269, total = -30
        assert_relative_eq!(reactions.right, -269.0 / 15.0, epsilon = 1e-12);
        assert_relative_eq!(reactions.left, -30.0 + 269.0 / 15.0, epsilon = 1e-12);
        assert_relative_eq!(beam.bending_moment_at(15.0).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_load_definition() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("b1.json");
        fs::write(
            &path,
            r#"{"name": "B-1", "length": 10.0, "point_loads": [{"position": 3.0, "magnitude": 1000.0}]}"#,
        )
        .unwrap();

        let beam = load_definition(&path).unwrap();
        assert_eq!(beam.name(), "B-1");
        assert_relative_eq!(beam.reactions().left, 700.0, epsilon = 1e-9);
    }

    #[test]
    fn test_load_definition_rejects_bad_udl() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"{"length": 10.0, "udls": [{"start": 6.0, "end": 2.0, "intensity": 5.0}]}"#,
        )
        .unwrap();

        let err = load_definition(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid UDL"));
    }

    #[test]
    fn test_load_definition_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_definition(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
