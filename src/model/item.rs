use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_HEADER: &str = "General Assessment";
pub const ITEM_ID_PREFIX: &str = "assessment_";
pub const MAX_OPTIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    #[serde(rename = "Multiple Choice")]
    MultipleChoice,
    #[serde(rename = "Free Text")]
    FreeText,
    #[serde(rename = "Drop Down")]
    DropDown,
    #[serde(rename = "Personal Readiness")]
    PersonalReadiness,
}

impl ItemKind {
    pub fn all() -> &'static [ItemKind] {
        &[
            ItemKind::MultipleChoice,
            ItemKind::FreeText,
            ItemKind::DropDown,
            ItemKind::PersonalReadiness,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::MultipleChoice => "Multiple Choice",
            ItemKind::FreeText => "Free Text",
            ItemKind::DropDown => "Drop Down",
            ItemKind::PersonalReadiness => "Personal Readiness",
        }
    }

    pub fn from_label(label: &str) -> Option<ItemKind> {
        ItemKind::all().iter().copied().find(|k| k.label() == label)
    }

    /// Free text and readiness items are complete with only a header.
    pub fn header_only(self) -> bool {
        matches!(self, ItemKind::FreeText | ItemKind::PersonalReadiness)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The kinds a caller has selected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSet {
    kinds: Vec<ItemKind>,
}

impl KindSet {
    pub fn new(kinds: impl IntoIterator<Item = ItemKind>) -> Self {
        let mut out: Vec<ItemKind> = Vec::new();
        for kind in kinds {
            if !out.contains(&kind) {
                out.push(kind);
            }
        }
        Self { kinds: out }
    }

    pub fn everything() -> Self {
        Self::new(ItemKind::all().iter().copied())
    }

    pub fn contains(&self, kind: ItemKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn kinds(&self) -> &[ItemKind] {
        &self.kinds
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for KindSet {
    fn default() -> Self {
        Self::new([
            ItemKind::MultipleChoice,
            ItemKind::FreeText,
            ItemKind::PersonalReadiness,
        ])
    }
}

impl FromStr for KindSet {
    type Err = String;

    /// Comma separated wire labels, e.g. `Multiple Choice,Free Text`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut kinds = Vec::new();
        for part in s.split(',') {
            let label = part.trim();
            if label.is_empty() {
                continue;
            }
            match ItemKind::from_label(label) {
                Some(kind) => kinds.push(kind),
                None => return Err(format!("unknown item type: {label}")),
            }
        }
        Ok(KindSet::new(kinds))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOption {
    pub value: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub header: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: ItemKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ItemOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status_options: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meets_standard_options: Vec<String>,
    pub source_index: usize,
}

pub fn item_id(position: usize) -> String {
    format!("{ITEM_ID_PREFIX}{position}")
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/item.rs"]
mod tests;
