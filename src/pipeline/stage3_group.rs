use std::cmp::Ordering;

use serde::Serialize;

use crate::model::{Item, Person, ResolvedCell};
use crate::pipeline::stage2_resolve::Resolution;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRow {
    pub item: Item,
    pub cells: Vec<ResolvedCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridGroup {
    pub header: String,
    pub rows: Vec<GridRow>,
}

/// Display-ready table: one group per header, one cell per person in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GridTable {
    pub people: Vec<Person>,
    pub groups: Vec<GridGroup>,
}

impl GridTable {
    pub fn rows(&self) -> impl Iterator<Item = &GridRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }

    pub fn find_item(&self, item_id: &str) -> Option<&Item> {
        self.rows().map(|r| &r.item).find(|i| i.id == item_id)
    }

    pub fn cell(&self, item_id: &str, person_id: &str) -> Option<&ResolvedCell> {
        let row = self.rows().find(|r| r.item.id == item_id)?;
        row.cells.iter().find(|c| c.person_id == person_id)
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }
}

/// Groups items by header in first-seen order, each group sorted by label.
pub fn group_items(items: &[Item]) -> Vec<(String, Vec<&Item>)> {
    let mut groups: Vec<(String, Vec<&Item>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(header, _)| *header == item.header) {
            Some((_, members)) => members.push(item),
            None => groups.push((item.header.clone(), vec![item])),
        }
    }
    for (_, members) in groups.iter_mut() {
        members.sort_by(|a, b| locale_cmp(&a.label, &b.label));
    }
    groups
}

pub fn build_table(items: &[Item], people: &[Person], resolution: &Resolution) -> GridTable {
    let groups = group_items(items)
        .into_iter()
        .map(|(header, members)| GridGroup {
            header,
            rows: members
                .into_iter()
                .map(|item| GridRow {
                    item: item.clone(),
                    cells: people
                        .iter()
                        .map(|p| resolution.cell_or_unscored(&item.id, &p.id))
                        .collect(),
                })
                .collect(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        groups = groups.len(),
        people = people.len(),
        "grid assembled"
    );

    GridTable {
        people: people.to_vec(),
        groups,
    }
}

/// Label ordering close to a default locale collation: letters compare
/// case-insensitively, lowercase sorts before uppercase on ties, then code
/// points decide.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }
    let case = a
        .chars()
        .map(|c| c.is_uppercase())
        .cmp(b.chars().map(|c| c.is_uppercase()));
    if case != Ordering::Equal {
        return case;
    }
    a.cmp(b)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_group.rs"]
mod tests;
