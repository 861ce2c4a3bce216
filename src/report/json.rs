use serde::Serialize;

use crate::model::Person;
use crate::pipeline::stage3_group::{GridGroup, GridTable};
use crate::report::GridSummary;

#[derive(Serialize)]
struct GridDocument<'a> {
    summary: &'a GridSummary,
    people: &'a [Person],
    groups: &'a [GridGroup],
}

pub fn render_grid_json(table: &GridTable, summary: &GridSummary) -> serde_json::Result<String> {
    let doc = GridDocument {
        summary,
        people: &table.people,
        groups: &table.groups,
    };
    serde_json::to_string_pretty(&doc)
}

/// Compact form handed back to the embedding page.
pub fn render_table_json(table: &GridTable) -> serde_json::Result<String> {
    serde_json::to_string(table)
}
