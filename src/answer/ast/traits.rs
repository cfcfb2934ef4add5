//! Shared node interface used by the text formatters

use super::elements::span::flatten;
use super::elements::{Block, Document, Section};

/// Common interface for every node in the document tree
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!("{} sections", self.sections.len())
    }
}

impl AstNode for Section {
    fn node_type(&self) -> &'static str {
        "Section"
    }

    fn display_label(&self) -> String {
        format!("{} blocks", self.blocks.len())
    }
}

impl AstNode for Block {
    fn node_type(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::CalloutHeading { .. } => "CalloutHeading",
            Block::Bullet { .. } => "Bullet",
            Block::Table(_) => "Table",
            Block::Paragraph { .. } => "Paragraph",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Block::Heading { level, spans } => format!("h{} {}", level, flatten(spans)),
            Block::CalloutHeading { text, tag } => format!("[{}] {}", tag, text),
            Block::Bullet { spans } => flatten(spans),
            Block::Table(table) => format!("{}x{} table", table.row_count(), table.column_count),
            Block::Paragraph { text } => text.clone(),
        }
    }
}
