/// Columnar rendering: header line plus one aligned line per row.
use std::collections::HashMap;

use comfy_table::{Table, presets::NOTHING};

/// One row: column title → display string.
pub type Row = HashMap<&'static str, String>;

/// A column definition: header title plus how to extract the cell from an item.
pub struct Column<T> {
    pub title: &'static str,
    pub value: fn(&T) -> String,
}

/// Values that can be rendered as a table.
pub trait TableView {
    /// Column titles, in display order.
    fn columns(&self) -> Vec<&'static str>;

    /// Rows in source order.
    fn rows(&self) -> Vec<Row>;
}

/// Titles of a column set.
#[must_use]
pub fn titles<T>(columns: &[Column<T>]) -> Vec<&'static str> {
    columns.iter().map(|c| c.title).collect()
}

/// Build rows for `items` from a column set.
#[must_use]
pub fn rows<T>(items: &[T], columns: &[Column<T>]) -> Vec<Row> {
    items
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|c| (c.title, (c.value)(item)))
                .collect()
        })
        .collect()
}

/// Gap between aligned columns.
const GUTTER: u16 = 2;

/// Render a table view into newline-terminated lines.
///
/// Keys missing from a row render as empty cells so every line keeps the
/// header's column positions. Control characters in titles and cells are
/// replaced by spaces, so each row stays on one line.
#[must_use]
pub fn write_table(view: &dyn TableView) -> String {
    let columns = view.columns();

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(columns.iter().map(|col| single_line(col)));

    for row in view.rows() {
        table.add_row(
            columns
                .iter()
                .map(|col| row.get(col).map_or_else(String::new, |cell| single_line(cell))),
        );
    }

    for column in table.column_iter_mut() {
        column.set_padding((0, GUTTER));
    }

    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Replace newlines, tabs and other control characters with spaces.
fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Render a boolean the way list views show it.
#[must_use]
pub fn yes_no(b: bool) -> String {
    if b { "yes" } else { "no" }.to_owned()
}

/// Shorten `s` to at most `len` characters, marking the cut with `...`.
#[must_use]
pub fn truncate(s: &str, len: usize) -> String {
    match s.char_indices().nth(len) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_owned(),
    }
}
