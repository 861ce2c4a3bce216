use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::timestamp::ordering_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Staff,
    #[serde(rename = "Self")]
    SelfReport,
}

impl Channel {
    pub fn label(self) -> &'static str {
        match self {
            Channel::Staff => "Staff",
            Channel::SelfReport => "Self",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Staff" => Ok(Channel::Staff),
            "Self" => Ok(Channel::SelfReport),
            other => Err(format!("unknown user type: {other} (use Staff|Self)")),
        }
    }
}

/// Authorship tag as found on a stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelTag {
    /// No `userType` on the record; predates self assessment.
    Legacy,
    Explicit(Channel),
    Unrecognized(String),
}

impl ChannelTag {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => ChannelTag::Legacy,
            Some(label) => match label.parse::<Channel>() {
                Ok(channel) => ChannelTag::Explicit(channel),
                Err(_) => ChannelTag::Unrecognized(label.to_string()),
            },
        }
    }

    /// The bucket a record is resolved in. Legacy records count as staff.
    pub fn bucket(&self) -> Option<Channel> {
        match self {
            ChannelTag::Legacy => Some(Channel::Staff),
            ChannelTag::Explicit(channel) => Some(*channel),
            ChannelTag::Unrecognized(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            ChannelTag::Legacy => None,
            ChannelTag::Explicit(channel) => Some(channel.label()),
            ChannelTag::Unrecognized(label) => Some(label.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub item_id: String,
    pub person_id: String,
    pub channel: ChannelTag,
    pub value: Option<String>,
    pub pass: bool,
    pub author: Option<String>,
    pub account: Option<String>,
    pub created_name: Option<String>,
    pub date: Option<String>,
    pub created_timestamp: Option<String>,
    pub recorded_at: NaiveDateTime,
}

impl ScoreRecord {
    pub fn new(
        item_id: impl Into<String>,
        person_id: impl Into<String>,
        channel: ChannelTag,
        value: Option<String>,
        created_timestamp: Option<String>,
    ) -> Self {
        let recorded_at = ordering_key(created_timestamp.as_deref());
        Self {
            item_id: item_id.into(),
            person_id: person_id.into(),
            channel,
            value,
            pass: false,
            author: None,
            account: None,
            created_name: None,
            date: None,
            created_timestamp,
            recorded_at,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn set_created_timestamp(&mut self, raw: String) {
        self.recorded_at = ordering_key(Some(&raw));
        self.created_timestamp = Some(raw);
    }

    pub fn matches(&self, item_id: &str, person_id: &str) -> bool {
        self.item_id == item_id && self.person_id == person_id
    }

    pub fn author_or_account(&self) -> &str {
        self.author
            .as_deref()
            .or(self.account.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/record.rs"]
mod tests;
