//! Output formatting for analysed beams.
//!
//! Three renderings of the same [`Analysis`]: a human-readable summary with
//! an aligned table, a JSON report, and `x,shear,moment` CSV rows.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use beam_core::{Beam, BeamInput, Diagram, DiagramPoint, Extremes, Reactions};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything a report needs, computed once per command
#[derive(Debug, Clone)]
pub struct Analysis {
    pub input: BeamInput,
    pub diagram: Diagram,
    pub extremes: Option<Extremes>,
    /// Shear and moment at supports and load boundaries
    pub critical_points: Vec<DiagramPoint>,
}

impl Analysis {
    pub fn run(beam: &Beam, samples: usize) -> beam_core::BeamResult<Self> {
        let diagram = beam.diagram(samples)?;
        let critical_points = beam.sample_at(&beam.critical_positions())?;
        Ok(Self {
            input: beam.to_input(),
            extremes: diagram.extremes(),
            diagram,
            critical_points,
        })
    }
}

// ============================================================================
// Text
// ============================================================================

/// Render the summary block: span, loads, reactions and peaks.
pub fn write_summary(
    out: &mut dyn Write,
    analysis: &Analysis,
    precision: usize,
) -> io::Result<()> {
    let p = precision;
    let input = &analysis.input;
    let Reactions { left, right } = analysis.diagram.reactions;

    writeln!(out, "Beam: {} (L = {:.p$})", input.name, input.length)?;

    if input.point_loads.is_empty() && input.udls.is_empty() {
        writeln!(out, "Loads: none")?;
    } else {
        writeln!(out, "Loads:")?;
        for load in &input.point_loads {
            writeln!(
                out,
                "  Point  P = {:.p$} at x = {:.p$}",
                load.magnitude, load.position
            )?;
        }
        for udl in &input.udls {
            writeln!(
                out,
                "  UDL    w = {:.p$} from x = {:.p$} to {:.p$}",
                udl.intensity, udl.start, udl.end
            )?;
        }
    }

    writeln!(out, "Reactions: left = {left:.p$}, right = {right:.p$}")?;

    if let Some(ext) = &analysis.extremes {
        writeln!(
            out,
            "Max |V| = {:.p$} at x = {:.p$}",
            ext.max_shear, ext.max_shear_position
        )?;
        writeln!(
            out,
            "Max M   = {:.p$} at x = {:.p$}",
            ext.max_moment, ext.max_moment_position
        )?;
        writeln!(
            out,
            "Min M   = {:.p$} at x = {:.p$}",
            ext.min_moment, ext.min_moment_position
        )?;
    }

    Ok(())
}

/// Render points as right-aligned `x / V / M` columns.
pub fn write_table(
    out: &mut dyn Write,
    points: &[DiagramPoint],
    precision: usize,
) -> io::Result<()> {
    let p = precision;
    let width = 14;
    writeln!(out, "{:>width$} {:>width$} {:>width$}", "x", "V", "M")?;
    for point in points {
        writeln!(
            out,
            "{:>width$.p$} {:>width$.p$} {:>width$.p$}",
            point.x, point.shear, point.moment
        )?;
    }
    Ok(())
}

/// Full text report: summary, critical points, then the sampled diagram.
pub fn write_text(
    out: &mut dyn Write,
    analysis: &Analysis,
    precision: usize,
) -> io::Result<()> {
    write_summary(out, analysis, precision)?;
    writeln!(out)?;
    writeln!(out, "Critical points")?;
    write_table(out, &analysis.critical_points, precision)?;
    writeln!(out)?;
    writeln!(out, "Diagram ({} points)", analysis.diagram.points.len())?;
    write_table(out, &analysis.diagram.points, precision)
}

// ============================================================================
// JSON
// ============================================================================

/// JSON report layout
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated: DateTime<Utc>,
    pub beam: &'a BeamInput,
    pub reactions: Reactions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extremes: Option<Extremes>,
    pub critical_points: &'a [DiagramPoint],
    pub diagram: &'a [DiagramPoint],
}

impl<'a> JsonReport<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            generated: Utc::now(),
            beam: &analysis.input,
            reactions: analysis.diagram.reactions,
            extremes: analysis.extremes,
            critical_points: &analysis.critical_points,
            diagram: &analysis.diagram.points,
        }
    }
}

pub fn write_json(out: &mut dyn Write, analysis: &Analysis) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport::new(analysis))
        .context("failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}

// ============================================================================
// CSV
// ============================================================================

/// Write `x,shear,moment` rows with a header line.
pub fn write_csv<W: Write>(out: W, points: &[DiagramPoint]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

/// File name for a saved diagram. Path separators in the beam name are
/// replaced so the file always lands inside `dir`.
pub fn diagram_path(dir: &Path, name: &str) -> PathBuf {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect();
    let stem = if stem.is_empty() || stem == "." || stem == ".." {
        beam_core::DEFAULT_BEAM_NAME.to_string()
    } else {
        stem
    };
    dir.join(format!("{stem}.csv"))
}

/// Save the diagram as CSV under `dir`, creating it if needed.
pub fn save_csv(dir: &Path, diagram: &Diagram) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    let path = diagram_path(dir, &diagram.name);
    let file = fs::File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(file, &diagram.points)?;
    tracing::info!(path = %path.display(), points = diagram.points.len(), "saved diagram");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn midspan_beam() -> Beam {
        BeamInput::new("B-1", 10.0)
            .with_point_load(5.0, 1000.0)
            .build()
            .unwrap()
    }

    fn point(x: f64, shear: f64, moment: f64) -> DiagramPoint {
        DiagramPoint { x, shear, moment }
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        let out: &mut dyn Write = &mut buf;
        f(out).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_contents() {
        let analysis = Analysis::run(&midspan_beam(), 11).unwrap();
        let text = render(|out| write_summary(out, &analysis, 2));

        assert!(text.contains("Beam: B-1 (L = 10.00)"));
        assert!(text.contains("Point  P = 1000.00 at x = 5.00"));
        assert!(text.contains("Reactions: left = 500.00, right = 500.00"));
        assert!(text.contains("Max M   = 2500.00 at x = 5.00"));
    }

    #[test]
    fn test_summary_without_loads() {
        let beam = Beam::new(4.0, "empty").unwrap();
        let analysis = Analysis::run(&beam, 2).unwrap();
        let text = render(|out| write_summary(out, &analysis, 1));
        assert!(text.contains("Loads: none"));
        assert!(text.contains("Reactions: left = "));
    }

    #[test]
    fn test_table_rows() {
        let points = [
            point(0.0, 500.0, 0.0),
            point(10.0, -500.0, 0.0),
        ];
        let text = render(|out| write_table(out, &points, 1));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].trim_start().starts_with('x'));
        assert!(lines[2].contains("-500.0"));
    }

    #[test]
    fn test_critical_points_cover_load() {
        let analysis = Analysis::run(&midspan_beam(), 3).unwrap();
        let xs: Vec<f64> = analysis.critical_points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_json_report_shape() {
        let analysis = Analysis::run(&midspan_beam(), 5).unwrap();
        let mut buf = Vec::new();
        write_json(&mut buf, &analysis).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["beam"]["name"], "B-1");
        assert_eq!(value["reactions"]["left"], 500.0);
        assert_eq!(value["diagram"].as_array().unwrap().len(), 5);
        assert!(value["generated"].is_string());
    }

    #[test]
    fn test_csv_header_and_rows() {
        let points = [
            point(0.0, 1.5, 0.0),
            point(2.0, -1.5, 0.0),
        ];
        let mut buf = Vec::new();
        write_csv(&mut buf, &points).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "x,shear,moment");
        assert_eq!(lines[1], "0.0,1.5,0.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_diagram_path_sanitizes_name() {
        let dir = Path::new("out");
        assert_eq!(diagram_path(dir, "Beam A"), dir.join("Beam A.csv"));
        assert_eq!(diagram_path(dir, "../etc/x"), dir.join(".._etc_x.csv"));
        assert_eq!(diagram_path(dir, "  "), dir.join("default_beam.csv"));
    }

    #[test]
    fn test_save_csv_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("outputs");
        let diagram = midspan_beam().diagram(3).unwrap();

        let path = save_csv(&dir, &diagram).unwrap();
        assert_eq!(path, dir.join("B-1.csv"));

        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 4);
    }
}
