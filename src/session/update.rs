use chrono::NaiveDateTime;

use crate::error::UpdateError;
use crate::model::timestamp::format_host_timestamp;
use crate::model::{Channel, ChannelTag, ReadinessValue, ScoreRecord};

/// A new observation entered for one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub item_id: String,
    pub person_id: String,
    pub value: String,
    pub pass: bool,
    pub author: String,
    /// Host display form, `MM/DD/YYYY`.
    pub date: String,
    /// Falls back to Staff when unset.
    pub channel: Option<Channel>,
}

impl ScoreUpdate {
    pub fn new(
        item_id: impl Into<String>,
        person_id: impl Into<String>,
        value: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            person_id: person_id.into(),
            value: value.into(),
            pass: false,
            author: author.into(),
            date: date.into(),
            channel: None,
        }
    }

    /// Personal readiness entries store their structured value as JSON.
    pub fn readiness(
        item_id: impl Into<String>,
        person_id: impl Into<String>,
        value: &ReadinessValue,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<Self, UpdateError> {
        Ok(Self::new(item_id, person_id, value.encode()?, author, date))
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn channel(&self) -> Channel {
        self.channel.unwrap_or(Channel::Staff)
    }
}

/// Applies one update to the working record list.
///
/// A record for the same item, person and explicit channel is overwritten in
/// place; untagged legacy records never match, so the first tagged update
/// appends next to them. The caller re-resolves afterwards.
pub fn apply_update(
    mut records: Vec<ScoreRecord>,
    update: &ScoreUpdate,
    now: NaiveDateTime,
) -> Vec<ScoreRecord> {
    let channel = update.channel();
    let tag = ChannelTag::Explicit(channel);
    let stamp = format_host_timestamp(now);

    let existing = records
        .iter_mut()
        .find(|r| r.matches(&update.item_id, &update.person_id) && r.channel == tag);

    match existing {
        Some(record) => {
            record.value = Some(update.value.clone());
            record.pass = update.pass;
            record.author = Some(update.author.clone());
            record.account = Some(update.author.clone());
            record.date = Some(update.date.clone());
            record.set_created_timestamp(stamp);
            tracing::debug!(
                item = %update.item_id,
                person = %update.person_id,
                channel = %channel,
                "score overwritten"
            );
        }
        None => {
            let mut record = ScoreRecord::new(
                update.item_id.as_str(),
                update.person_id.as_str(),
                tag,
                Some(update.value.clone()),
                Some(stamp),
            )
            .with_author(update.author.as_str())
            .with_date(update.date.as_str());
            record.pass = update.pass;
            record.account = Some(update.author.clone());
            record.created_name = Some(update.author.clone());
            records.push(record);
            tracing::debug!(
                item = %update.item_id,
                person = %update.person_id,
                channel = %channel,
                "score appended"
            );
        }
    }
    records
}

/// Replaces the value of the first record for the pair, whatever its channel.
/// Returns false when the pair has no record.
pub fn patch_value(
    records: &mut [ScoreRecord],
    person_id: &str,
    item_id: &str,
    value: &str,
) -> bool {
    match records.iter_mut().find(|r| r.matches(item_id, person_id)) {
        Some(record) => {
            record.value = Some(value.to_string());
            true
        }
        None => false,
    }
}

/// Clears the pass flag of the first record for the pair.
pub fn clear_pass(records: &mut [ScoreRecord], person_id: &str, item_id: &str) -> bool {
    match records.iter_mut().find(|r| r.matches(item_id, person_id)) {
        Some(record) => {
            record.pass = false;
            true
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/session/update.rs"]
mod tests;
