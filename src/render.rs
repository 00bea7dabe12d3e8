//! Result shaping: column layout for schema-less result sets and the table forms
//! consumed by the console and the web viewer. Pure functions only.

mod console;
mod layout;
mod view;

pub use console::render_console;
pub use layout::{compute_columns, display_len, Column, ITEM_NAME_HEADER};
pub use view::{RowView, TableView};
