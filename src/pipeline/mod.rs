pub mod stage1_normalize;
pub mod stage2_resolve;
pub mod stage3_group;
pub mod stage4_report;

use crate::input::raw::RawItem;
use crate::model::{Item, KindSet, Person, ScoreRecord};
use stage3_group::GridTable;

/// Normalizes, resolves and groups in one pass. Returns the retained items
/// alongside the table so callers can look items up by id.
pub fn build_grid(
    raw_items: &[RawItem],
    people: &[Person],
    records: &[ScoreRecord],
    kinds: &KindSet,
) -> (Vec<Item>, GridTable) {
    let items = stage1_normalize::normalize(raw_items, kinds);
    let resolution = stage2_resolve::resolve(&items, people, records);
    let table = stage3_group::build_table(&items, people, &resolution);
    (items, table)
}
