use serde::Serialize;

/// Score entry reported back to the host. Field order is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEnvelope {
    #[serde(rename = "conId")]
    pub con_id: String,
    #[serde(rename = "skillId")]
    pub skill_id: String,
    #[serde(rename = "skillName")]
    pub skill_name: String,
    #[serde(rename = "skillHeader")]
    pub skill_header: String,
    pub value: String,
    pub pass: bool,
    pub mode: &'static str,
    pub user: String,
    #[serde(rename = "userType")]
    pub user_type: String,
    pub date: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEnvelope {
    #[serde(rename = "groupName")]
    pub group_name: String,
    #[serde(rename = "contactId")]
    pub contact_id: String,
    #[serde(rename = "contactName")]
    pub contact_name: String,
    #[serde(rename = "noteText")]
    pub note_text: String,
    pub timestamp: String,
    pub author: String,
    pub mode: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadNotesEnvelope {
    #[serde(rename = "groupName")]
    pub group_name: String,
    #[serde(rename = "contactId")]
    pub contact_id: String,
    pub mode: &'static str,
}

pub const MODE_UPDATE_SCORE: &str = "updateScore";
pub const MODE_SAVE_NOTE: &str = "saveNote";
pub const MODE_LOAD_NOTES: &str = "loadNotes";

/// Any outbound message, serialized as one compact JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HostMessage {
    Score(ScoreEnvelope),
    Note(NoteEnvelope),
    LoadNotes(LoadNotesEnvelope),
}

impl HostMessage {
    pub fn mode(&self) -> &'static str {
        match self {
            HostMessage::Score(e) => e.mode,
            HostMessage::Note(e) => e.mode,
            HostMessage::LoadNotes(e) => e.mode,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/host/envelope.rs"]
mod tests;
