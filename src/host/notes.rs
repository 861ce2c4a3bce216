use serde::{Deserialize, Serialize};

use crate::input::loose;
use crate::model::timestamp::format_display_datetime;

const UNKNOWN_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, Default, Deserialize)]
struct RawNote {
    #[serde(default, deserialize_with = "loose::string")]
    author: Option<String>,
    #[serde(rename = "noteId", default, deserialize_with = "loose::string")]
    note_id: Option<String>,
    #[serde(rename = "noteText", default, deserialize_with = "loose::string")]
    note_text: Option<String>,
    #[serde(default, deserialize_with = "loose::string")]
    note: Option<String>,
    #[serde(default, deserialize_with = "loose::string")]
    timestamp: Option<String>,
}

/// A note as delivered by the host's `displayNotes` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: String,
    pub author: String,
    pub text: String,
    pub timestamp: String,
    pub display_timestamp: String,
}

impl From<RawNote> for Note {
    fn from(raw: RawNote) -> Self {
        let timestamp = raw.timestamp.unwrap_or_default();
        let display_timestamp = if timestamp.is_empty() {
            String::new()
        } else {
            format_display_datetime(&timestamp)
        };
        Note {
            note_id: raw.note_id.unwrap_or_default(),
            author: raw
                .author
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            text: raw
                .note_text
                .filter(|t| !t.is_empty())
                .or(raw.note)
                .unwrap_or_default(),
            timestamp,
            display_timestamp,
        }
    }
}

/// Parses the notes list. `null` and an empty string both mean no notes.
pub fn parse_notes(text: &str) -> serde_json::Result<Vec<Note>> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let raw: Vec<RawNote> = serde_json::from_str(trimmed)?;
    Ok(raw.into_iter().map(Note::from).collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/host/notes.rs"]
mod tests;
