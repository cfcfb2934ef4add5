//! # answer-render
//!
//! Turns the raw text of an assistant answer into a structured document and reveals its
//! paragraphs a character at a time.
//!
//! The raw text is split into sections on `---` runs. Each line of a section becomes a block:
//! a markdown heading, a callout heading tagged with a semantic category, a bullet, a row of a
//! pipe-delimited table, or a paragraph. Bold and italic markers inside headings and bullets
//! become inline spans.
//!
//! ## Testing
//!
//! Structural assertions on documents go through the fluent API in
//! [testing module](answer::testing).

pub mod answer;

pub use answer::ast::{Block, Document, Section, SemanticTag, Span, SpanKind, Table};
pub use answer::inlines::parse_spans;
pub use answer::parsing::assemble_document;
pub use answer::reveal::{RevealBoard, RevealState, Revealer};
pub use answer::tagging::classify;
