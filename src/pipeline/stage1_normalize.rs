use serde_json::Value;

use crate::error::ShapeError;
use crate::input::raw::RawItem;
use crate::input::raw_items_from_value;
use crate::model::item::{DEFAULT_HEADER, MAX_OPTIONS, item_id};
use crate::model::{Item, ItemKind, ItemOption, KindSet};

/// Filters raw items to the selected, complete ones and gives each a
/// positional id. Ids follow the retained order, so the same raw list and
/// kind selection always yields the same ids.
pub fn normalize(raw_items: &[RawItem], kinds: &KindSet) -> Vec<Item> {
    let mut items = Vec::with_capacity(raw_items.len());
    let mut dropped = 0usize;

    for (source_index, raw) in raw_items.iter().enumerate() {
        let Some(kind) = raw.kind.as_deref().and_then(ItemKind::from_label) else {
            dropped += 1;
            continue;
        };
        if !kinds.contains(kind) || !is_complete(raw, kind) {
            dropped += 1;
            continue;
        }
        items.push(build_item(raw, kind, items.len(), source_index));
    }

    if dropped > 0 {
        tracing::debug!(dropped, retained = items.len(), "items filtered out");
    }
    items
}

pub fn normalize_value(value: &Value, kinds: &KindSet) -> Result<Vec<Item>, ShapeError> {
    let raw_items = raw_items_from_value(value)?;
    Ok(normalize(&raw_items, kinds))
}

fn is_complete(raw: &RawItem, kind: ItemKind) -> bool {
    if kind.header_only() {
        non_empty(&raw.header).is_some()
    } else {
        non_empty(&raw.subheader).is_some() && non_empty(&raw.question).is_some()
    }
}

fn build_item(raw: &RawItem, kind: ItemKind, position: usize, source_index: usize) -> Item {
    let header = non_empty(&raw.header).unwrap_or(DEFAULT_HEADER).to_string();
    let label = non_empty(&raw.subheader)
        .or(non_empty(&raw.question))
        .unwrap_or(header.as_str())
        .to_string();
    let description = non_empty(&raw.question)
        .or(non_empty(&raw.header_instruction))
        .map(str::to_string);

    let options = if kind == ItemKind::MultipleChoice {
        build_options(raw)
    } else {
        Vec::new()
    };
    let (status_options, meets_standard_options) = if kind == ItemKind::PersonalReadiness {
        (
            raw.status_options.clone(),
            raw.meets_standard_options.clone(),
        )
    } else {
        (Vec::new(), Vec::new())
    };

    Item {
        id: item_id(position),
        header,
        label,
        description,
        kind,
        options,
        status_options,
        meets_standard_options,
        source_index,
    }
}

fn build_options(raw: &RawItem) -> Vec<ItemOption> {
    let mut options = Vec::with_capacity(MAX_OPTIONS);
    for (slot, (title, description)) in raw.option_slots().into_iter().enumerate() {
        let Some(title) = non_empty(title) else {
            continue;
        };
        options.push(ItemOption {
            value: (slot + 1).to_string(),
            title: title.to_string(),
            description: non_empty(description).map(str::to_string),
        });
    }
    options
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;
