use serde::Serialize;

use crate::model::item::ItemKind;
use crate::model::readiness::display_readiness;
use crate::model::record::{Channel, ScoreRecord};
use crate::model::timestamp::format_display_date;

pub const PLACEHOLDER: &str = "-";

/// The most recent record of one authorship channel for a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub channel: Channel,
    pub value: String,
    pub display: String,
    pub author: String,
    pub date: String,
    pub timestamp: String,
}

impl Observation {
    pub fn from_record(record: &ScoreRecord, kind: ItemKind) -> Self {
        let value = record_value(record);
        Self {
            channel: record.channel.bucket().unwrap_or(Channel::Staff),
            display: display_value(&value, kind),
            value,
            author: record.author_or_account().to_string(),
            date: record_display_date(record),
            timestamp: record.created_timestamp.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellMetadata {
    pub author: String,
    pub last_updated: String,
    pub display_date: String,
    pub created_name: String,
    pub created_timestamp: String,
}

impl CellMetadata {
    pub fn from_record(record: &ScoreRecord) -> Self {
        Self {
            author: record.author_or_account().to_string(),
            last_updated: record.date.clone().unwrap_or_default(),
            display_date: record_display_date(record),
            created_name: record.created_name.clone().unwrap_or_default(),
            created_timestamp: record.created_timestamp.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCell {
    pub item_id: String,
    pub person_id: String,
    pub value: String,
    pub display_value: String,
    pub pass: bool,
    pub channel: Option<Channel>,
    pub metadata: Option<CellMetadata>,
    pub staff_observation: Option<Observation>,
    pub self_observation: Option<Observation>,
}

impl ResolvedCell {
    pub fn unscored(item_id: &str, person_id: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
            person_id: person_id.to_string(),
            value: PLACEHOLDER.to_string(),
            display_value: PLACEHOLDER.to_string(),
            pass: false,
            channel: None,
            metadata: None,
            staff_observation: None,
            self_observation: None,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.staff_observation.is_some() || self.self_observation.is_some()
    }

    pub fn has_both_channels(&self) -> bool {
        self.staff_observation.is_some() && self.self_observation.is_some()
    }

    pub fn observation(&self, channel: Channel) -> Option<&Observation> {
        match channel {
            Channel::Staff => self.staff_observation.as_ref(),
            Channel::SelfReport => self.self_observation.as_ref(),
        }
    }
}

pub fn record_value(record: &ScoreRecord) -> String {
    record
        .value
        .clone()
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn display_value(value: &str, kind: ItemKind) -> String {
    match kind {
        ItemKind::PersonalReadiness if value != PLACEHOLDER => display_readiness(value),
        _ => value.to_string(),
    }
}

fn record_display_date(record: &ScoreRecord) -> String {
    let raw = record
        .date
        .as_deref()
        .filter(|d| !d.is_empty())
        .or(record.created_timestamp.as_deref())
        .unwrap_or("");
    format_display_date(raw)
}
