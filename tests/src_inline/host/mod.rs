use super::*;
use crate::host::envelope::MODE_LOAD_NOTES;

fn load_notes(group: &str) -> HostMessage {
    HostMessage::LoadNotes(LoadNotesEnvelope {
        group_name: group.to_string(),
        contact_id: "p1".to_string(),
        mode: MODE_LOAD_NOTES,
    })
}

#[test]
fn test_recording_notifier_keeps_order() {
    let mut notifier = RecordingNotifier::default();
    notifier.notify(&load_notes("A"));
    notifier.notify(&load_notes("B"));
    assert_eq!(notifier.messages, vec![load_notes("A"), load_notes("B")]);
}

#[test]
fn test_json_line_notifier_writes_lines() {
    let mut notifier = JsonLineNotifier::new(Vec::new());
    notifier.notify(&load_notes("A"));
    notifier.notify(&load_notes("B"));
    let text = String::from_utf8(notifier.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "{\"groupName\":\"A\",\"contactId\":\"p1\",\"mode\":\"loadNotes\"}"
    );
}
