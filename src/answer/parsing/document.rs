//! Document assembly
//!
//! Splits a raw text into sections on runs of three or more `-` and classifies each section
//! on its own. Pieces are trimmed and empty pieces discarded; a text without a delimiter
//! yields exactly one section, and an empty or all-whitespace text yields none.
//!
//! The delimiter matches anywhere, not only on a line of its own, so a markdown table
//! separator such as `|---|---|` also splits the text.

use super::blocks::classify_section;
use crate::answer::ast::{Document, Section};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static SECTION_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-{3,}").expect("section delimiter pattern is valid"));

/// Split a raw text into trimmed, non-empty section texts
pub fn split_sections(raw_text: &str) -> Vec<&str> {
    SECTION_DELIMITER
        .split(raw_text)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Assemble a raw text into a document
pub fn assemble_document(raw_text: &str) -> Document {
    let sections: Vec<Section> = split_sections(raw_text)
        .into_iter()
        .map(|piece| Section::new(classify_section(piece)))
        .collect();

    debug!(
        sections = sections.len(),
        bytes = raw_text.len(),
        "assembled document"
    );
    Document::new(sections)
}
