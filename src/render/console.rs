//! Fixed-width text grid for the console.

use crate::render::layout::{display_len, Column};
use crate::store::Item;

fn pad(value: &str, width: usize) -> String {
    let mut out = value.to_string();
    let len = display_len(value);
    if width > len {
        out.extend(std::iter::repeat(' ').take(width - len));
    }
    out
}

/// Render items as console lines: border, header, border, one line per item, border.
///
/// A row carries one cell per attribute of its own item, so items with short
/// attribute lists produce rows with fewer cells than the header.
pub fn render_console(items: &[Item], columns: &[Column]) -> Vec<String> {
    let header = format!(
        "| {} |",
        columns
            .iter()
            .map(|c| pad(&c.header, c.width))
            .collect::<Vec<_>>()
            .join(" | ")
    );
    let border = "-".repeat(display_len(&header));

    let mut lines = Vec::with_capacity(items.len() + 4);
    lines.push(border.clone());
    lines.push(header);
    lines.push(border.clone());

    let id_width = columns.first().map_or(0, |c| c.width);
    for item in items {
        let mut row = format!("| {} |", pad(&item.name, id_width));
        for (i, attr) in item.attributes.iter().enumerate() {
            let width = columns.get(i + 1).map_or(0, |c| c.width);
            row.push(' ');
            row.push_str(&pad(&attr.value, width));
            row.push_str(" |");
        }
        lines.push(row);
    }

    lines.push(border);
    lines
}
