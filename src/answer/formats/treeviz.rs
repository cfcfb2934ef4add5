//! Treeviz formatter
//!
//! Treeviz is a one-line-per-node view of the document tree, which makes it quick to scan a
//! classified answer. Nesting is drawn with box connectors, two columns per level, and each
//! label is truncated to 30 characters.
//!
//! Example:
//!
//! ```text
//! ├─ Section: 3 blocks
//! │ ├─ CalloutHeading: [summary] Summary:
//! │ ├─ Bullet: Sales rose
//! │ └─ Table: 2x2 table
//! └─ Section: 1 blocks
//!   └─ Paragraph: Details follow
//! ```

use crate::answer::ast::{AstNode, Document};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn append_node(result: &mut String, node: &dyn AstNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        truncate(&node.display_label(), LABEL_WIDTH)
    ));
}

/// Render the document tree, one node per line
pub fn to_treeviz_str(doc: &Document) -> String {
    let mut result = String::new();
    for (i, section) in doc.sections.iter().enumerate() {
        let is_last = i == doc.sections.len() - 1;
        append_node(&mut result, section, "", is_last);

        let child_prefix = if is_last { "  " } else { "│ " };
        for (j, block) in section.blocks.iter().enumerate() {
            append_node(
                &mut result,
                block,
                child_prefix,
                j == section.blocks.len() - 1,
            );
        }
    }
    result
}
