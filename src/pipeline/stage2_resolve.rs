use std::collections::HashMap;

use crate::model::cell::{display_value, record_value};
use crate::model::{CellMetadata, Channel, Item, Observation, Person, ResolvedCell, ScoreRecord};

/// Resolved cells keyed by `(item_id, person_id)`.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    cells: HashMap<(String, String), ResolvedCell>,
}

impl Resolution {
    pub fn get(&self, item_id: &str, person_id: &str) -> Option<&ResolvedCell> {
        self.cells
            .get(&(item_id.to_string(), person_id.to_string()))
    }

    /// The cell for a pair, or an unscored one when the pair was never resolved.
    pub fn cell_or_unscored(&self, item_id: &str, person_id: &str) -> ResolvedCell {
        self.get(item_id, person_id)
            .cloned()
            .unwrap_or_else(|| ResolvedCell::unscored(item_id, person_id))
    }
}

pub fn resolve(items: &[Item], people: &[Person], records: &[ScoreRecord]) -> Resolution {
    let mut by_pair: HashMap<(&str, &str), Vec<&ScoreRecord>> = HashMap::new();
    let mut unbucketed = 0usize;
    for record in records {
        if record.channel.bucket().is_none() {
            unbucketed += 1;
            continue;
        }
        by_pair
            .entry((record.item_id.as_str(), record.person_id.as_str()))
            .or_default()
            .push(record);
    }
    if unbucketed > 0 {
        tracing::debug!(unbucketed, "records with unrecognized userType ignored");
    }

    let mut cells = HashMap::with_capacity(items.len() * people.len());
    for item in items {
        for person in people {
            let joined = by_pair
                .get(&(item.id.as_str(), person.id.as_str()))
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let cell = resolve_cell(item, &person.id, joined);
            cells.insert((item.id.clone(), person.id.clone()), cell);
        }
    }

    Resolution { cells }
}

/// Resolves one pair from the records already joined to it.
pub fn resolve_cell(item: &Item, person_id: &str, joined: &[&ScoreRecord]) -> ResolvedCell {
    let staff = most_recent(joined, Channel::Staff);
    let own = most_recent(joined, Channel::SelfReport);

    let primary = match (staff, own) {
        (Some(s), Some(o)) => Some(if s.recorded_at >= o.recorded_at { s } else { o }),
        (Some(s), None) => Some(s),
        (None, Some(o)) => Some(o),
        (None, None) => None,
    };
    let Some(primary) = primary else {
        return ResolvedCell::unscored(&item.id, person_id);
    };

    let value = record_value(primary);
    ResolvedCell {
        item_id: item.id.clone(),
        person_id: person_id.to_string(),
        display_value: display_value(&value, item.kind),
        value,
        pass: primary.pass,
        channel: primary.channel.bucket(),
        metadata: Some(CellMetadata::from_record(primary)),
        staff_observation: staff.map(|r| Observation::from_record(r, item.kind)),
        self_observation: own.map(|r| Observation::from_record(r, item.kind)),
    }
}

/// Latest record in a channel bucket; the first one wins among equals.
pub fn most_recent<'a>(records: &[&'a ScoreRecord], channel: Channel) -> Option<&'a ScoreRecord> {
    let mut best: Option<&'a ScoreRecord> = None;
    for &record in records {
        if record.channel.bucket() != Some(channel) {
            continue;
        }
        match best {
            Some(current) if record.recorded_at <= current.recorded_at => {}
            _ => best = Some(record),
        }
    }
    best
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_resolve.rs"]
mod tests;
