use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod loose;
pub mod raw;

use crate::error::{Payload, PayloadError, ShapeError};
use crate::model::{Person, ScoreRecord};
use raw::{HostShape, RawItem, RawPerson, RawScore};

const PREVIEW_CHARS: usize = 100;

/// The three JSON strings handed over by the host on a load call.
#[derive(Debug, Clone, Copy)]
pub struct LoadPayloads<'a> {
    pub items: Option<&'a str>,
    pub people: Option<&'a str>,
    pub scores: Option<&'a str>,
}

/// Everything a load needs, adapted from the host's shapes.
#[derive(Debug, Clone, Default)]
pub struct InputBundle {
    pub raw_items: Vec<RawItem>,
    pub people: Vec<Person>,
    pub records: Vec<ScoreRecord>,
}

pub fn load_bundle(payloads: &LoadPayloads<'_>) -> Result<InputBundle, PayloadError> {
    let items_value = parse_payload(payloads.items, Payload::Assessment)?;
    let people_value = parse_payload(payloads.people, Payload::Contact)?;
    let scores_value = parse_payload(payloads.scores, Payload::Score)?;

    let raw_items = raw_items_from_value(&items_value)?;
    let people = people_from_value(&people_value)?;
    let records = records_from_value(&scores_value)?;

    tracing::info!(
        items = raw_items.len(),
        people = people.len(),
        records = records.len(),
        "payloads parsed"
    );

    Ok(InputBundle {
        raw_items,
        people,
        records,
    })
}

/// Cheap bracket checks first so a truncated host string gets a clear message.
pub fn parse_payload(text: Option<&str>, payload: Payload) -> Result<Value, PayloadError> {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return Err(PayloadError::Empty(payload)),
    };
    let trimmed = text.trim();
    if !trimmed.starts_with('[') && !trimmed.starts_with('{') {
        return Err(PayloadError::NotJson(payload));
    }
    if !trimmed.ends_with(']') && !trimmed.ends_with('}') {
        return Err(PayloadError::Incomplete(payload));
    }
    serde_json::from_str(text).map_err(|e| PayloadError::Parse {
        payload,
        message: e.to_string(),
        preview: text.chars().take(PREVIEW_CHARS).collect(),
    })
}

pub fn raw_items_from_value(value: &Value) -> Result<Vec<RawItem>, ShapeError> {
    records_of::<RawItem>(value, Payload::Assessment)
}

pub fn people_from_value(value: &Value) -> Result<Vec<Person>, ShapeError> {
    let raw = records_of::<RawPerson>(value, Payload::Contact)?;
    let mut seen = HashSet::new();
    let mut people = Vec::with_capacity(raw.len());
    for (idx, entry) in raw.into_iter().enumerate() {
        let Some(person) = entry.into_person() else {
            tracing::warn!(index = idx, "contact without contact_id; skipping");
            continue;
        };
        if !seen.insert(person.id.clone()) {
            tracing::warn!(
                index = idx,
                contact_id = %person.id,
                "duplicate contact_id; keeping first"
            );
            continue;
        }
        people.push(person);
    }
    Ok(people)
}

pub fn records_from_value(value: &Value) -> Result<Vec<ScoreRecord>, ShapeError> {
    let raw = records_of::<RawScore>(value, Payload::Score)?;
    let total = raw.len();
    let records: Vec<ScoreRecord> = raw.into_iter().filter_map(RawScore::into_record).collect();
    if records.len() < total {
        tracing::debug!(
            dropped = total - records.len(),
            "score records without skill or contact id"
        );
    }
    Ok(records)
}

fn records_of<T: DeserializeOwned>(value: &Value, payload: Payload) -> Result<Vec<T>, ShapeError> {
    let Value::Array(entries) = value else {
        return Err(ShapeError::new(payload, "is not a list"));
    };
    let mut out = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            return Err(ShapeError::new(
                payload,
                format!("entry {idx} is not a record"),
            ));
        }
        let shaped: HostShape<T> = serde_json::from_value(entry.clone())
            .map_err(|e| ShapeError::new(payload, format!("entry {idx}: {e}")))?;
        out.push(shaped.into_inner());
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
