//! Neutral table structure handed to the HTML templates.

use crate::render::layout::{compute_columns, Column};
use crate::store::Item;
use serde::Serialize;

/// One body row: the item name followed by its attribute values in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub name: String,
    pub cells: Vec<String>,
}

/// Columns plus rows for one result set. Rows are not padded to the column count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub columns: Vec<Column>,
    pub rows: Vec<RowView>,
}

impl TableView {
    pub fn new(items: &[Item]) -> Self {
        Self {
            columns: compute_columns(items),
            rows: items
                .iter()
                .map(|item| RowView {
                    name: item.name.clone(),
                    cells: item.attributes.iter().map(|a| a.value.clone()).collect(),
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
