use super::*;

#[test]
fn test_parse_notes_host_shape() {
    let notes = parse_notes(
        r#"[
            {"author":"Admin","noteId":"1","noteText":"First","timestamp":"2025-08-20 16:58:34"},
            {"noteId":2,"note":"Older field","timestamp":"not a date"}
        ]"#,
    )
    .unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].author, "Admin");
    assert_eq!(notes[0].text, "First");
    assert_eq!(notes[0].display_timestamp, "08/20/2025 04:58 PM");
    assert_eq!(notes[1].author, "Unknown");
    assert_eq!(notes[1].note_id, "2");
    assert_eq!(notes[1].text, "Older field");
    assert_eq!(notes[1].display_timestamp, "not a date");
}

#[test]
fn test_parse_notes_empty_inputs() {
    assert!(parse_notes("").unwrap().is_empty());
    assert!(parse_notes("null").unwrap().is_empty());
    assert!(parse_notes("[]").unwrap().is_empty());
}

#[test]
fn test_parse_notes_missing_fields() {
    let notes = parse_notes("[{}]").unwrap();
    assert_eq!(notes[0].author, "Unknown");
    assert_eq!(notes[0].text, "");
    assert_eq!(notes[0].display_timestamp, "");
}

#[test]
fn test_parse_notes_rejects_garbage() {
    assert!(parse_notes("{not json").is_err());
}
