use super::*;
use crate::model::{Channel, ChannelTag, Item, ItemKind, Person};
use crate::pipeline::stage2_resolve::resolve;
use crate::pipeline::stage3_group::build_table;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("skillgrid_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn sample_records() -> Vec<ScoreRecord> {
    vec![
        ScoreRecord::new(
            "assessment_0",
            "p1",
            ChannelTag::Explicit(Channel::SelfReport),
            Some("4".to_string()),
            Some("08/01/2025 09:30:00".to_string()),
        )
        .with_author("Pat"),
        ScoreRecord::new(
            "assessment_0",
            "p1",
            ChannelTag::Legacy,
            Some("3".to_string()),
            None,
        ),
    ]
}

fn sample_table() -> GridTable {
    let items = vec![Item {
        id: "assessment_0".to_string(),
        header: "Kitchen".to_string(),
        label: "Knife Safety".to_string(),
        description: None,
        kind: ItemKind::MultipleChoice,
        options: Vec::new(),
        status_options: Vec::new(),
        meets_standard_options: Vec::new(),
        source_index: 0,
    }];
    let people = vec![Person::new("p1", "Pat")];
    let records = sample_records();
    build_table(&items, &people, &resolve(&items, &people, &records))
}

#[test]
fn test_report_format_parse() {
    assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
    assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
    assert_eq!("all".parse::<ReportFormat>().unwrap(), ReportFormat::All);
    assert!("csv".parse::<ReportFormat>().is_err());
    assert_eq!(ReportFormat::default(), ReportFormat::All);
}

#[test]
fn test_write_reports_all() {
    let dir = make_temp_dir();
    let written = write_reports(&sample_table(), &dir, ReportFormat::All).unwrap();
    assert_eq!(written.len(), 2);

    let json = std::fs::read_to_string(dir.join(GRID_JSON)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["nScored"], 1);
    assert_eq!(value["groups"][0]["rows"][0]["cells"][0]["displayValue"], "4");

    let text = std::fs::read_to_string(dir.join(REPORT_TXT)).unwrap();
    assert!(text.contains("1. Kitchen"));
    assert!(text.contains("Pat: Staff: 3 / Self: 4"));
}

#[test]
fn test_write_reports_text_only() {
    let dir = make_temp_dir();
    let written = write_reports(&sample_table(), &dir, ReportFormat::Text).unwrap();
    assert_eq!(written, vec![dir.join(REPORT_TXT)]);
    assert!(!dir.join(GRID_JSON).exists());
}

#[test]
fn test_write_scores_host_shape() {
    let dir = make_temp_dir();
    let path = dir.join("nested").join(SCORES_JSON);
    write_scores(&sample_records(), &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["fieldData"]["Skill_ID"], "assessment_0");
    assert_eq!(entries[0]["fieldData"]["userType"], "Self");
    assert_eq!(entries[0]["fieldData"]["user"], "Pat");
    assert!(entries[1]["fieldData"].get("userType").is_none());

    let reloaded = crate::input::records_from_value(&value).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded[0].channel, ChannelTag::Explicit(Channel::SelfReport));
    assert_eq!(reloaded[1].channel, ChannelTag::Legacy);
}
