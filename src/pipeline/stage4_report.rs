use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::input::raw::HostScore;
use crate::model::ScoreRecord;
use crate::pipeline::stage3_group::GridTable;
use crate::report::json::render_grid_json;
use crate::report::summarize;
use crate::report::text::render_grid_text;

pub const GRID_JSON: &str = "grid.json";
pub const REPORT_TXT: &str = "report.txt";
pub const SCORES_JSON: &str = "scores.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    Json,
    Text,
    #[default]
    All,
}

impl ReportFormat {
    fn wants_json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::All)
    }

    fn wants_text(self) -> bool {
        matches!(self, ReportFormat::Text | ReportFormat::All)
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ReportFormat::Json),
            "text" => Ok(ReportFormat::Text),
            "all" => Ok(ReportFormat::All),
            other => Err(format!("unknown format: {other} (use json|text|all)")),
        }
    }
}

/// Writes the requested reports and returns the paths written.
pub fn write_reports(
    table: &GridTable,
    out_dir: &Path,
    format: ReportFormat,
) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let summary = summarize(table);
    let mut written = Vec::new();

    if format.wants_json() {
        let json = render_grid_json(table, &summary).map_err(std::io::Error::other)?;
        let path = out_dir.join(GRID_JSON);
        write_text(&path, &json)?;
        written.push(path);
    }
    if format.wants_text() {
        let path = out_dir.join(REPORT_TXT);
        write_text(&path, &render_grid_text(table, &summary))?;
        written.push(path);
    }

    tracing::info!(
        out_dir = %out_dir.display(),
        files = written.len(),
        scored = summary.n_scored,
        cells = summary.n_cells,
        "reports written"
    );
    Ok(written)
}

/// Writes the record list back in the host's `fieldData` shape.
pub fn write_scores(records: &[ScoreRecord], path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let shaped: Vec<HostScore<'_>> = records.iter().map(HostScore::from).collect();
    let json = serde_json::to_string_pretty(&shaped).map_err(std::io::Error::other)?;
    write_text(path, &json)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.write_all(b"\n")?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
