//! Table assembly
//!
//! Turns a buffered run of pipe-delimited lines into a [Table]. Each line is split on `|`,
//! cells are trimmed and empty cells dropped; only rows left with more than one cell are
//! kept. Short rows are padded on the right so every row has `column_count` cells.
//!
//! When no row survives there is no table, and the caller must re-emit the buffered lines
//! as ordinary content.

use super::line_classification::split_cells;
use crate::answer::ast::Table;

/// Assemble buffered candidate lines into a table, or `None` if no row has two cells
pub fn assemble_table<S: AsRef<str>>(candidate_lines: &[S]) -> Option<Table> {
    let rows: Vec<Vec<String>> = candidate_lines
        .iter()
        .map(|line| split_cells(line.as_ref()))
        .filter(|cells| cells.len() > 1)
        .map(|cells| cells.into_iter().map(str::to_string).collect())
        .collect();

    if rows.is_empty() {
        return None;
    }

    Some(Table::from_rows(rows))
}
