//! Block element definitions
//!
//!     A Block is one classified structural unit of a section. Blocks keep the relative
//!     order of the lines that produced them; a Table replaces the whole contiguous run of
//!     pipe-delimited lines it was assembled from.
//!
//!     Variants:
//!         - Heading: `## text` style line, level 2..=4, inline spans
//!         - CalloutHeading: capitalised line ending in a colon, with a semantic tag
//!         - Bullet: `- text` or `* text`, inline spans
//!         - Table: normalised grid of cell texts
//!         - Paragraph: anything else that is not blank, revealed incrementally

use super::span::{flatten, Span};
use super::tag::SemanticTag;
use crate::answer::inlines::parse_spans;
use serde::{Deserialize, Serialize};

/// One structural unit of a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Heading { level: u8, spans: Vec<Span> },
    CalloutHeading { text: String, tag: SemanticTag },
    Bullet { spans: Vec<Span> },
    Table(Table),
    Paragraph { text: String },
}

impl Block {
    /// Text content with formatting markers removed
    ///
    /// Table cells are joined with single spaces, rows with newlines. Padding cells are
    /// skipped.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { spans, .. } | Block::Bullet { spans } => flatten(spans),
            Block::CalloutHeading { text, .. } | Block::Paragraph { text } => text.clone(),
            Block::Table(table) => table
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .filter(|cell| !cell.is_empty())
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// The source text of a paragraph, the only block type that is revealed over time
    pub fn as_paragraph(&self) -> Option<&str> {
        match self {
            Block::Paragraph { text } => Some(text),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// A normalised grid: every row holds exactly `column_count` cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
    pub column_count: usize,
}

impl Table {
    /// Build a table from ragged rows, padding short rows on the right with empty cells
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(column_count, String::new());
        }
        Table { rows, column_count }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Inline spans for a cell; out-of-range coordinates yield no spans
    pub fn cell_spans(&self, row: usize, column: usize) -> Vec<Span> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(|cell| parse_spans(cell))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_table_pads_short_rows() {
        let table = Table::from_rows(vec![row(&["a", "b", "c"]), row(&["d", "e"])]);
        assert_eq!(table.column_count, 3);
        assert_eq!(table.rows[1], row(&["d", "e", ""]));
    }

    #[test]
    fn test_cell_spans_parse_inline_markers() {
        let table = Table::from_rows(vec![row(&["**Cell**", "plain"])]);
        assert_eq!(table.cell_spans(0, 0), vec![Span::bold("Cell")]);
        assert_eq!(table.cell_spans(0, 1), vec![Span::plain("plain")]);
        assert!(table.cell_spans(3, 0).is_empty());
    }

    #[test]
    fn test_block_plain_text() {
        let heading = Block::Heading {
            level: 2,
            spans: vec![Span::plain("Key "), Span::bold("Findings")],
        };
        assert_eq!(heading.plain_text(), "Key Findings");

        let table = Block::Table(Table::from_rows(vec![row(&["a", "b"]), row(&["c"])]));
        assert_eq!(table.plain_text(), "a b\nc");
    }

    #[test]
    fn test_block_serializes_with_type_tag() {
        let block = Block::Paragraph {
            text: "Hello".to_string(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "paragraph");
        assert_eq!(json["text"], "Hello");
    }

    #[test]
    fn test_as_paragraph() {
        let para = Block::Paragraph {
            text: "Hi".to_string(),
        };
        assert_eq!(para.as_paragraph(), Some("Hi"));
        assert!(Block::Bullet { spans: vec![] }.as_paragraph().is_none());
    }
}
