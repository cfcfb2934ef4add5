//! Document and section elements

use super::block::Block;
use serde::{Deserialize, Serialize};

/// Address of a block within a document: section index, then block index in that section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockKey {
    pub section: usize,
    pub block: usize,
}

impl BlockKey {
    pub fn new(section: usize, block: usize) -> Self {
        Self { section, block }
    }
}

/// A delimiter-separated group of blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// The structured form of one raw text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn block_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    pub fn block(&self, key: BlockKey) -> Option<&Block> {
        self.sections.get(key.section)?.blocks.get(key.block)
    }

    /// All blocks in document order, each with its address
    pub fn blocks(&self) -> impl Iterator<Item = (BlockKey, &Block)> + '_ {
        self.sections.iter().enumerate().flat_map(|(s, section)| {
            section
                .blocks
                .iter()
                .enumerate()
                .map(move |(b, block)| (BlockKey::new(s, b), block))
        })
    }

    /// Every paragraph's address and source text, in document order
    pub fn paragraphs(&self) -> impl Iterator<Item = (BlockKey, &str)> + '_ {
        self.blocks()
            .filter_map(|(key, block)| block.as_paragraph().map(|text| (key, text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::ast::Span;

    fn sample() -> Document {
        Document::new(vec![
            Section::new(vec![
                Block::Paragraph {
                    text: "One".into(),
                },
                Block::Bullet {
                    spans: vec![Span::plain("Two")],
                },
            ]),
            Section::new(vec![Block::Paragraph {
                text: "Three".into(),
            }]),
        ])
    }

    #[test]
    fn test_block_addressing() {
        let doc = sample();
        assert_eq!(doc.block_count(), 3);
        assert_eq!(
            doc.block(BlockKey::new(1, 0)).and_then(Block::as_paragraph),
            Some("Three")
        );
        assert!(doc.block(BlockKey::new(2, 0)).is_none());
        assert!(doc.block(BlockKey::new(0, 5)).is_none());
    }

    #[test]
    fn test_paragraphs_in_order() {
        let doc = sample();
        let paragraphs: Vec<_> = doc.paragraphs().collect();
        assert_eq!(
            paragraphs,
            vec![(BlockKey::new(0, 0), "One"), (BlockKey::new(1, 0), "Three")]
        );
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert_eq!(doc.paragraphs().count(), 0);
    }
}
