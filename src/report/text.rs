use crate::model::{Channel, ResolvedCell};
use crate::pipeline::stage3_group::GridTable;
use crate::report::{GridSummary, format_fraction};

pub fn render_grid_text(table: &GridTable, summary: &GridSummary) -> String {
    let mut out = String::new();

    out.push_str("Skills Assessment Grid\n");
    out.push_str("======================\n\n");

    out.push_str(&format!(
        "People: {}\n",
        if table.people.is_empty() {
            "none".to_string()
        } else {
            table
                .people
                .iter()
                .map(|p| p.display_name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    ));
    out.push_str(&format!(
        "Items: {} in {} groups\n",
        summary.n_items, summary.n_groups
    ));
    out.push_str(&format!(
        "Scored cells: {}/{} ({})\n",
        summary.n_scored,
        summary.n_cells,
        format_fraction(summary.scored_fraction)
    ));
    out.push_str(&format!(
        "Staff: {}, Self: {}, both: {}\n\n",
        summary.n_staff, summary.n_self, summary.n_both
    ));

    for (idx, group) in table.groups.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, group.header));
        for row in &group.rows {
            out.push_str(&format!("  {}\n", row.item.label));
            for (person, cell) in table.people.iter().zip(&row.cells) {
                out.push_str(&format!(
                    "    {}: {}\n",
                    person.display_name,
                    cell_text(cell)
                ));
            }
        }
        out.push('\n');
    }

    out
}

/// Both channels are shown side by side when present, otherwise the headline value.
pub fn cell_text(cell: &ResolvedCell) -> String {
    let mut text = match (&cell.staff_observation, &cell.self_observation) {
        (Some(staff), Some(own)) => format!("Staff: {} / Self: {}", staff.display, own.display),
        _ => cell.display_value.clone(),
    };
    let authors: Vec<String> = [Channel::Staff, Channel::SelfReport]
        .into_iter()
        .filter_map(|channel| cell.observation(channel))
        .filter(|o| !o.author.is_empty() || !o.date.is_empty())
        .map(|o| {
            [o.channel.label(), o.author.as_str(), o.date.as_str()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    if !authors.is_empty() {
        text.push_str(&format!(" [{}]", authors.join("; ")));
    }
    text
}
