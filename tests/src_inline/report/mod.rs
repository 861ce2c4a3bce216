use super::*;
use crate::model::{Channel, ChannelTag, Item, ItemKind, Person, ScoreRecord};
use crate::pipeline::stage2_resolve::resolve;
use crate::pipeline::stage3_group::build_table;
use crate::report::json::{render_grid_json, render_table_json};
use crate::report::text::{cell_text, render_grid_text};

fn item(id: &str, header: &str, label: &str) -> Item {
    Item {
        id: id.to_string(),
        header: header.to_string(),
        label: label.to_string(),
        description: None,
        kind: ItemKind::MultipleChoice,
        options: Vec::new(),
        status_options: Vec::new(),
        meets_standard_options: Vec::new(),
        source_index: 0,
    }
}

fn record(item: &str, person: &str, channel: Channel, value: &str, ts: &str) -> ScoreRecord {
    ScoreRecord::new(
        item,
        person,
        ChannelTag::Explicit(channel),
        Some(value.to_string()),
        Some(ts.to_string()),
    )
}

fn sample_table() -> GridTable {
    let items = vec![
        item("assessment_0", "Kitchen", "Knife Safety"),
        item("assessment_1", "Kitchen", "Food Storage"),
        item("assessment_2", "Front", "Greeting"),
    ];
    let people = vec![Person::new("p1", "Pat"), Person::new("p2", "Sam")];
    let records = vec![
        record("assessment_0", "p1", Channel::Staff, "3", "2025-08-01T10:00:00Z")
            .with_author("Jo")
            .with_date("08/01/2025"),
        record("assessment_0", "p1", Channel::SelfReport, "2", "2025-08-02T10:00:00Z"),
        record("assessment_2", "p2", Channel::SelfReport, "1", "2025-08-03T10:00:00Z"),
    ];
    let resolution = resolve(&items, &people, &records);
    build_table(&items, &people, &resolution)
}

#[test]
fn test_fraction_zero_total() {
    assert_eq!(fraction(0, 0), 0.0);
    assert_eq!(fraction(1, 4), 0.25);
    assert_eq!(format_fraction(0.25), "0.250");
}

#[test]
fn test_summarize_counts_channels() {
    let summary = summarize(&sample_table());
    assert_eq!(summary.tool_name, "skillgrid");
    assert_eq!(summary.n_groups, 2);
    assert_eq!(summary.n_items, 3);
    assert_eq!(summary.n_people, 2);
    assert_eq!(summary.n_cells, 6);
    assert_eq!(summary.n_scored, 2);
    assert_eq!(summary.n_staff, 1);
    assert_eq!(summary.n_self, 2);
    assert_eq!(summary.n_both, 1);
    assert!((summary.scored_fraction - 2.0 / 6.0).abs() < 1e-6);
}

#[test]
fn test_summarize_empty_table() {
    let summary = summarize(&GridTable::default());
    assert_eq!(summary.n_cells, 0);
    assert_eq!(summary.scored_fraction, 0.0);
}

#[test]
fn test_cell_text_both_channels() {
    let table = sample_table();
    let cell = table.cell("assessment_0", "p1").unwrap();
    let text = cell_text(cell);
    assert!(text.starts_with("Staff: 3 / Self: 2"));
    assert!(text.contains("Staff Jo 08/01/2025"));
}

#[test]
fn test_cell_text_unscored_is_placeholder() {
    let table = sample_table();
    let cell = table.cell("assessment_1", "p2").unwrap();
    assert_eq!(cell_text(cell), "-");
}

#[test]
fn test_render_grid_text_layout() {
    let table = sample_table();
    let summary = summarize(&table);
    let text = render_grid_text(&table, &summary);
    assert!(text.starts_with("Skills Assessment Grid\n"));
    assert!(text.contains("People: Pat, Sam\n"));
    assert!(text.contains("Items: 3 in 2 groups\n"));
    assert!(text.contains("Scored cells: 2/6 (0.333)\n"));
    assert!(text.contains("1. Kitchen\n"));
    assert!(text.contains("2. Front\n"));
    let food = text.find("  Food Storage").unwrap();
    let knife = text.find("  Knife Safety").unwrap();
    assert!(food < knife);
}

#[test]
fn test_render_grid_text_no_people() {
    let table = GridTable::default();
    let text = render_grid_text(&table, &summarize(&table));
    assert!(text.contains("People: none\n"));
}

#[test]
fn test_render_grid_json_shape() {
    let table = sample_table();
    let summary = summarize(&table);
    let json = render_grid_json(&table, &summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["nItems"], 3);
    assert_eq!(value["people"][0]["id"], "p1");
    assert_eq!(value["groups"][0]["header"], "Kitchen");
    assert_eq!(value["groups"][0]["rows"][1]["cells"][0]["displayValue"], "2");
}

#[test]
fn test_render_table_json_is_compact() {
    let json = render_table_json(&sample_table()).unwrap();
    assert!(!json.contains('\n'));
    assert!(json.starts_with("{\"people\":"));
}
