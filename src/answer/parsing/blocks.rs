//! Block classification for a single section
//!
//!     Lines are processed in order with one piece of buffered state: the pending run of
//!     table row candidates. Any non-candidate line flushes the buffer before it is handled
//!     itself, so two table runs separated by prose never merge into one table.
//!
//!     Flushing tries to assemble the buffer into a table. When that fails the buffered lines
//!     are demoted and classified again as ordinary lines (heading, callout, bullet,
//!     paragraph), in their original order, before the current line is handled.
//!
//!     Blank lines produce no block.

use super::line_classification::{classify_content_line, is_table_row_candidate, LineType};
use super::table::assemble_table;
use crate::answer::ast::Block;
use crate::answer::inlines::parse_spans;
use crate::answer::tagging;
use tracing::debug;

/// Classify a section's text into blocks
pub fn classify_section(section_text: &str) -> Vec<Block> {
    let mut classifier = BlockClassifier::new();
    for line in section_text.lines() {
        classifier.push_line(line);
    }
    classifier.finish()
}

/// Line-at-a-time block builder
///
/// Holds the blocks emitted so far and the pending table buffer. Feed it lines with
/// [BlockClassifier::push_line] and collect the result with [BlockClassifier::finish].
#[derive(Debug, Default)]
pub struct BlockClassifier<'a> {
    pending: Vec<&'a str>,
    blocks: Vec<Block>,
}

impl<'a> BlockClassifier<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one line; trailing whitespace is ignored
    pub fn push_line(&mut self, line: &'a str) {
        let line = line.trim_end();

        if is_table_row_candidate(line) {
            self.pending.push(line);
            return;
        }

        self.flush_pending();
        self.emit_line(line);
    }

    /// Flush any pending table rows and return the blocks
    pub fn finish(mut self) -> Vec<Block> {
        self.flush_pending();
        self.blocks
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let lines = std::mem::take(&mut self.pending);
        match assemble_table(&lines) {
            Some(table) => self.blocks.push(Block::Table(table)),
            None => {
                debug!(
                    lines = lines.len(),
                    "table buffer did not assemble, demoting to ordinary lines"
                );
                for line in lines {
                    self.emit_line(line);
                }
            }
        }
    }

    fn emit_line(&mut self, line: &str) {
        let block = match classify_content_line(line) {
            LineType::Blank => return,
            LineType::Heading { level, content } => Block::Heading {
                level,
                spans: parse_spans(content),
            },
            LineType::Callout => Block::CalloutHeading {
                text: line.to_string(),
                tag: tagging::classify(line),
            },
            LineType::Bullet { content } => Block::Bullet {
                spans: parse_spans(content),
            },
            LineType::Paragraph | LineType::TableRow => Block::Paragraph {
                text: line.to_string(),
            },
        };
        self.blocks.push(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::ast::{SemanticTag, Span};

    #[test]
    fn test_mixed_section() {
        let blocks = classify_section(
            "## Overview\nKey Findings:\n- **Sales** rose\nSales grew steadily.\n\n",
        );
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 2,
                    spans: vec![Span::plain("Overview")],
                },
                Block::CalloutHeading {
                    text: "Key Findings:".into(),
                    tag: SemanticTag::Default,
                },
                Block::Bullet {
                    spans: vec![Span::bold("Sales"), Span::plain(" rose")],
                },
                Block::Paragraph {
                    text: "Sales grew steadily.".into(),
                },
            ]
        );
    }

    #[test]
    fn test_table_run_becomes_one_block() {
        let blocks = classify_section("Intro\n| A | B |\n| 1 | 2 |\nOutro");
        assert_eq!(blocks.len(), 3);
        let table = blocks[1].as_table().unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(blocks[2].as_paragraph(), Some("Outro"));
    }

    #[test]
    fn test_intervening_line_splits_tables() {
        let blocks = classify_section("A | B\nnot a table line\nC | D");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].as_table().unwrap().rows, vec![vec!["A", "B"]]);
        assert_eq!(blocks[1].as_paragraph(), Some("not a table line"));
        assert_eq!(blocks[2].as_table().unwrap().rows, vec![vec!["C", "D"]]);
    }

    #[test]
    fn test_table_at_end_is_flushed() {
        let blocks = classify_section("x | y");
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].as_table().is_some());
    }

    #[test]
    fn test_blank_lines_separate_but_do_not_emit() {
        let blocks = classify_section("a | b\n\nc | d");
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.as_table().is_some()));
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        let blocks = classify_section("Plain line   \r\n");
        assert_eq!(blocks[0].as_paragraph(), Some("Plain line"));
    }

    #[test]
    fn test_empty_section() {
        assert!(classify_section("").is_empty());
        assert!(classify_section("\n  \n\t\n").is_empty());
    }

    #[test]
    fn test_demotion_keeps_every_line() {
        // Drive the fallback directly: a buffer that cannot assemble.
        let mut classifier = BlockClassifier::new();
        classifier.pending = vec!["| lonely |", "- listed |"];
        classifier.push_line("tail");
        let blocks = classifier.finish();
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    text: "| lonely |".into()
                },
                Block::Bullet {
                    spans: vec![Span::plain("listed |")]
                },
                Block::Paragraph {
                    text: "tail".into()
                },
            ]
        );
    }
}
