use serde_json::json;

use super::raw::{HostScore, RawItem};
use super::*;
use crate::model::{Channel, ChannelTag};

fn payloads<'a>(items: &'a str, people: &'a str, scores: &'a str) -> LoadPayloads<'a> {
    LoadPayloads {
        items: Some(items),
        people: Some(people),
        scores: Some(scores),
    }
}

#[test]
fn test_parse_payload_rejects_empty() {
    let err = parse_payload(None, Payload::Assessment).unwrap_err();
    assert_eq!(err, PayloadError::Empty(Payload::Assessment));
    assert_eq!(err.to_string(), "assessmentData is empty or null");

    let err = parse_payload(Some(""), Payload::Contact).unwrap_err();
    assert_eq!(err.payload(), Payload::Contact);
}

#[test]
fn test_parse_payload_rejects_non_json_prefix() {
    let err = parse_payload(Some("hello]"), Payload::Contact).unwrap_err();
    assert_eq!(
        err.to_string(),
        "contactData does not appear to be valid JSON (doesn't start with [ or {)"
    );
}

#[test]
fn test_parse_payload_rejects_truncated_text() {
    let err = parse_payload(Some("  [{\"a\": 1}, "), Payload::Score).unwrap_err();
    assert_eq!(
        err.to_string(),
        "scoreData appears to be incomplete JSON (doesn't end with ] or })"
    );
}

#[test]
fn test_parse_payload_reports_parser_message_and_preview() {
    let err = parse_payload(Some("[1, 2,, 3]"), Payload::Score).unwrap_err();
    match &err {
        PayloadError::Parse {
            payload,
            message,
            preview,
        } => {
            assert_eq!(*payload, Payload::Score);
            assert!(!message.is_empty());
            assert_eq!(preview, "[1, 2,, 3]");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("scoreData JSON parse error: "));
    assert!(err.to_string().ends_with("Content preview: [1, 2,, 3]..."));
}

#[test]
fn test_parse_payload_preview_is_truncated() {
    let long = format!("[\"{}\" oops]", "x".repeat(300));
    let err = parse_payload(Some(&long), Payload::Assessment).unwrap_err();
    let PayloadError::Parse { preview, .. } = err else {
        panic!("expected parse error");
    };
    assert_eq!(preview.chars().count(), 100);
}

#[test]
fn test_non_list_payload_is_shape_error() {
    let err = raw_items_from_value(&json!({"Type": "Free Text"})).unwrap_err();
    assert_eq!(err.payload, Payload::Assessment);
    assert_eq!(err.to_string(), "assessmentData is not a list");
}

#[test]
fn test_non_record_entry_is_shape_error() {
    let err = people_from_value(&json!([{"fieldData": {"contact_id": "c1"}}, 42])).unwrap_err();
    assert_eq!(err.payload, Payload::Contact);
    assert!(err.detail.contains("entry 1"));
}

#[test]
fn test_raw_items_accept_flat_and_wrapped_shapes() {
    let items = raw_items_from_value(&json!([
        {"Type": "Free Text", "Header": "Attendance"},
        {"fieldData": {"Type": "Multiple Choice", "Header": "Kitchen", "Subheader": "Knife Safety", "Question": "Q?"}}
    ]))
    .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].kind.as_deref(), Some("Free Text"));
    assert_eq!(items[1].subheader.as_deref(), Some("Knife Safety"));
}

#[test]
fn test_raw_item_fields_are_loosely_typed() {
    let items = raw_items_from_value(&json!([
        {"Type": "Multiple Choice", "Header": 7, "Option1": null, "StatusOptions": ["A", 2, null]}
    ]))
    .unwrap();
    let item: &RawItem = &items[0];
    assert_eq!(item.header.as_deref(), Some("7"));
    assert_eq!(item.option1, None);
    assert_eq!(item.status_options, vec!["A".to_string(), "2".to_string()]);
}

#[test]
fn test_people_dedupe_and_skip_missing_ids() {
    let people = people_from_value(&json!([
        {"fieldData": {"contact": "Ann", "contact_id": "c1"}},
        {"fieldData": {"contact": "No Id"}},
        {"fieldData": {"contact": "Ann again", "contact_id": "c1"}},
        {"contact": "Bo", "contact_id": "c2"}
    ]))
    .unwrap();
    let ids: Vec<&str> = people.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);
    assert_eq!(people[0].display_name, "Ann");
}

#[test]
fn test_records_resolve_current_field_names() {
    let records = records_from_value(&json!([
        {"fieldData": {
            "Skill_ID": "assessment_0",
            "Contact_ID": "c1",
            "Data": "2",
            "pass": 1,
            "user": "Teacher",
            "userType": "Self",
            "date": "08/20/2025",
            "zzCreatedAcct": "Admin",
            "zzCreatedName": "Admin Person",
            "zzCreatedTimestamp": "08/20/2025 16:41:59"
        }}
    ]))
    .unwrap();
    let r = &records[0];
    assert_eq!(r.item_id, "assessment_0");
    assert_eq!(r.person_id, "c1");
    assert_eq!(r.value.as_deref(), Some("2"));
    assert!(r.pass);
    assert_eq!(r.channel, ChannelTag::Explicit(Channel::SelfReport));
    assert_eq!(r.author.as_deref(), Some("Teacher"));
    assert_eq!(r.account.as_deref(), Some("Admin"));
    assert_eq!(r.created_name.as_deref(), Some("Admin Person"));
    assert_eq!(r.date.as_deref(), Some("08/20/2025"));
}

#[test]
fn test_records_resolve_legacy_field_names() {
    let records = records_from_value(&json!([
        {"fieldData": {
            "skillId": "assessment_1",
            "contact_id": "c2",
            "Score": 3,
            "Pass": "true",
            "Author": "Old Author",
            "LastUpdated": "2024-01-02"
        }}
    ]))
    .unwrap();
    let r = &records[0];
    assert_eq!(r.item_id, "assessment_1");
    assert_eq!(r.person_id, "c2");
    assert_eq!(r.value.as_deref(), Some("3"));
    assert!(r.pass);
    assert_eq!(r.channel, ChannelTag::Legacy);
    assert_eq!(r.channel.bucket(), Some(Channel::Staff));
    assert_eq!(r.author_or_account(), "Old Author");
    assert_eq!(r.date.as_deref(), Some("2024-01-02"));
}

#[test]
fn test_pass_flag_encodings() {
    let records = records_from_value(&json!([
        {"Skill_ID": "a", "Contact_ID": "c", "pass": true},
        {"Skill_ID": "a", "Contact_ID": "c", "pass": "1"},
        {"Skill_ID": "a", "Contact_ID": "c", "pass": "false"},
        {"Skill_ID": "a", "Contact_ID": "c", "pass": 0},
        {"Skill_ID": "a", "Contact_ID": "c"}
    ]))
    .unwrap();
    let flags: Vec<bool> = records.iter().map(|r| r.pass).collect();
    assert_eq!(flags, vec![true, true, false, false, false]);
}

#[test]
fn test_empty_data_falls_back_to_score() {
    let records = records_from_value(&json!([
        {"Skill_ID": "a", "Contact_ID": "c", "Data": "", "Score": "4"}
    ]))
    .unwrap();
    assert_eq!(records[0].value.as_deref(), Some("4"));
}

#[test]
fn test_unjoinable_records_are_dropped() {
    let records = records_from_value(&json!([
        {"Skill_ID": "a", "Data": "1"},
        {"Contact_ID": "c", "Data": "1"},
        {"Skill_ID": "a", "Contact_ID": "c", "Data": "1"}
    ]))
    .unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_unrecognized_user_type_is_kept_but_unbucketed() {
    let records = records_from_value(&json!([
        {"Skill_ID": "a", "Contact_ID": "c", "userType": "Admin"}
    ]))
    .unwrap();
    assert_eq!(
        records[0].channel,
        ChannelTag::Unrecognized("Admin".to_string())
    );
    assert_eq!(records[0].channel.bucket(), None);
}

#[test]
fn test_load_bundle_names_failing_payload() {
    let err = load_bundle(&payloads("[]", "[]", "{\"oops\": ")).unwrap_err();
    assert_eq!(err.payload(), Payload::Score);

    let err = load_bundle(&payloads("[]", "not json", "[]")).unwrap_err();
    assert_eq!(err.payload(), Payload::Contact);
}

#[test]
fn test_load_bundle_success() {
    let bundle = load_bundle(&payloads(
        r#"[{"Type": "Free Text", "Header": "Attendance"}]"#,
        r#"[{"fieldData": {"contact": "Ann", "contact_id": "c1"}}]"#,
        r#"[]"#,
    ))
    .unwrap();
    assert_eq!(bundle.raw_items.len(), 1);
    assert_eq!(bundle.people.len(), 1);
    assert!(bundle.records.is_empty());
}

#[test]
fn test_host_score_shape() {
    let records = records_from_value(&json!([
        {"Skill_ID": "assessment_0", "Contact_ID": "c1", "Data": "2", "userType": "Staff",
         "user": "T", "date": "08/01/2025", "zzCreatedTimestamp": "08/01/2025 10:00:00"}
    ]))
    .unwrap();
    let text = serde_json::to_string(&HostScore::from(&records[0])).unwrap();
    assert_eq!(
        text,
        r#"{"fieldData":{"Skill_ID":"assessment_0","Contact_ID":"c1","Data":"2","pass":0,"user":"T","userType":"Staff","date":"08/01/2025","zzCreatedTimestamp":"08/01/2025 10:00:00"}}"#
    );
}
