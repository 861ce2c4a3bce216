pub mod json;
pub mod text;

use serde::Serialize;

use crate::pipeline::stage3_group::GridTable;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSummary {
    pub tool_name: String,
    pub tool_version: String,
    pub n_groups: usize,
    pub n_items: usize,
    pub n_people: usize,
    pub n_cells: usize,
    pub n_scored: usize,
    pub n_staff: usize,
    pub n_self: usize,
    pub n_both: usize,
    pub scored_fraction: f32,
}

pub fn summarize(table: &GridTable) -> GridSummary {
    let mut summary = GridSummary {
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        n_groups: table.groups.len(),
        n_items: table.item_count(),
        n_people: table.people.len(),
        ..GridSummary::default()
    };
    for row in table.rows() {
        for cell in &row.cells {
            summary.n_cells += 1;
            if cell.is_scored() {
                summary.n_scored += 1;
            }
            if cell.staff_observation.is_some() {
                summary.n_staff += 1;
            }
            if cell.self_observation.is_some() {
                summary.n_self += 1;
            }
            if cell.has_both_channels() {
                summary.n_both += 1;
            }
        }
    }
    summary.scored_fraction = fraction(summary.n_scored, summary.n_cells);
    summary
}

pub fn fraction(count: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    count as f32 / total as f32
}

pub fn format_fraction(v: f32) -> String {
    format!("{:.3}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
