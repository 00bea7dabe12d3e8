//! Column layout calculator.
//!
//! Columns are aligned by attribute position, not by attribute name: column `i`
//! (for `i >= 1`) holds whatever attribute sits at index `i - 1` of each item. The
//! header comes from the first item that reaches that position and is never replaced;
//! later items only widen the column.

use crate::store::Item;
use serde::Serialize;

/// Header of the identity column.
pub const ITEM_NAME_HEADER: &str = "ItemName";

/// A display column: header text and the width needed by everything placed in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub header: String,
    pub width: usize,
}

/// Display length of a value, counted in chars.
pub fn display_len(s: &str) -> usize {
    s.chars().count()
}

/// Compute the column set and widths for a result set.
///
/// Always returns at least the identity column. The column count is one more than
/// the longest attribute list among `items`.
pub fn compute_columns(items: &[Item]) -> Vec<Column> {
    let id_width = items
        .iter()
        .map(|item| display_len(&item.name))
        .fold(display_len(ITEM_NAME_HEADER), usize::max);

    let mut columns = vec![Column {
        header: ITEM_NAME_HEADER.to_string(),
        width: id_width,
    }];

    for item in items {
        for (i, attr) in item.attributes.iter().enumerate() {
            let col = i + 1;
            if col >= columns.len() {
                columns.push(Column {
                    header: attr.name.clone(),
                    width: 0,
                });
            }
            let column = &mut columns[col];
            column.width = column
                .width
                .max(display_len(&attr.name))
                .max(display_len(&attr.value));
        }
    }

    columns
}
