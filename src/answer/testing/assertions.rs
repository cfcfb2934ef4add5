//! Fluent assertion API for documents

use crate::answer::ast::elements::span::flatten;
use crate::answer::ast::{AstNode, Block, Document, Section, SemanticTag, Span};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of sections in the document
    pub fn section_count(self, expected: usize) -> Self {
        let actual = self.doc.sections.len();
        assert_eq!(
            actual, expected,
            "Expected {} sections, found {}",
            expected, actual
        );
        self
    }

    /// Assert on a specific section by index
    pub fn section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        assert!(
            index < self.doc.sections.len(),
            "Section index {} out of bounds (document has {} sections)",
            index,
            self.doc.sections.len()
        );
        assertion(SectionAssertion {
            section: &self.doc.sections[index],
            context: format!("sections[{}]", index),
        });
        self
    }

    /// Assert the total number of blocks across all sections
    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.doc.block_count();
        assert_eq!(
            actual, expected,
            "Expected {} blocks in document, found {}",
            expected, actual
        );
        self
    }
}

// ============================================================================
// Section Assertions
// ============================================================================

pub struct SectionAssertion<'a> {
    section: &'a Section,
    context: String,
}

impl<'a> SectionAssertion<'a> {
    /// Assert the number of blocks in this section
    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.section.blocks.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} blocks, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_blocks(&self.section.blocks)
        );
        self
    }

    /// Assert on a specific block by index
    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.section.blocks.len(),
            "{}: Block index {} out of bounds (section has {} blocks)",
            self.context,
            index,
            self.section.blocks.len()
        );
        assertion(BlockAssertion {
            block: &self.section.blocks[index],
            context: format!("{}.blocks[{}]", self.context, index),
        });
        self
    }

    /// Assert the block types in order, e.g. `["Heading", "Paragraph"]`
    pub fn block_types(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.section.blocks.iter().map(|b| b.node_type()).collect();
        assert_eq!(actual, expected, "{}: block types differ", self.context);
        self
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    fn wrong_type(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {} ({})",
            self.context,
            expected,
            self.block.node_type(),
            self.block.display_label()
        )
    }

    /// Assert this is a paragraph with exactly this text
    pub fn paragraph(self, expected: &str) -> Self {
        match self.block {
            Block::Paragraph { text } => assert_eq!(
                text, expected,
                "{}: paragraph text differs",
                self.context
            ),
            _ => self.wrong_type("Paragraph"),
        }
        self
    }

    /// Assert this is a markdown heading of the given level and flattened text
    pub fn heading(self, level: u8, expected: &str) -> Self {
        match self.block {
            Block::Heading {
                level: actual,
                spans,
            } => {
                assert_eq!(*actual, level, "{}: heading level differs", self.context);
                assert_eq!(
                    flatten(spans),
                    expected,
                    "{}: heading text differs",
                    self.context
                );
            }
            _ => self.wrong_type("Heading"),
        }
        self
    }

    /// Assert this is a callout heading with this text and tag
    pub fn callout(self, expected: &str, tag: SemanticTag) -> Self {
        match self.block {
            Block::CalloutHeading {
                text,
                tag: actual_tag,
            } => {
                assert_eq!(text, expected, "{}: callout text differs", self.context);
                assert_eq!(*actual_tag, tag, "{}: callout tag differs", self.context);
            }
            _ => self.wrong_type("CalloutHeading"),
        }
        self
    }

    /// Assert this is a bullet with exactly these spans
    pub fn bullet(self, expected: &[Span]) -> Self {
        match self.block {
            Block::Bullet { spans } => {
                assert_eq!(spans, expected, "{}: bullet spans differ", self.context)
            }
            _ => self.wrong_type("Bullet"),
        }
        self
    }

    /// Assert this is a table with these rows (after padding)
    pub fn table(self, expected: &[&[&str]]) -> Self {
        match self.block {
            Block::Table(table) => {
                let actual: Vec<Vec<&str>> = table
                    .rows
                    .iter()
                    .map(|row| row.iter().map(String::as_str).collect())
                    .collect();
                let expected: Vec<Vec<&str>> = expected.iter().map(|row| row.to_vec()).collect();
                assert_eq!(actual, expected, "{}: table rows differ", self.context);
            }
            _ => self.wrong_type("Table"),
        }
        self
    }
}

fn summarize_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| block.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}
