//! Parsing raw model output into a document
//!
//!     The pipeline is pure and synchronous. It runs over a complete raw text; there is no
//!     streaming or partial classification.
//!
//!     Stages, leaf first:
//!         1. [line_classification]: decide what a single right-trimmed line is
//!         2. [table]: turn a run of pipe-delimited lines into a normalised grid
//!         3. [blocks]: walk a section's lines, buffering table rows, emitting blocks
//!         4. [document]: split the raw text on `---` runs and classify each section
//!
//!     Every stage is total over UTF-8 input. Malformed tables and unterminated emphasis
//!     markers are recovered locally (demoted to ordinary lines, kept as plain text), so no
//!     input line is ever dropped except blank ones.

pub mod blocks;
pub mod document;
pub mod line_classification;
pub mod table;

pub use blocks::{classify_section, BlockClassifier};
pub use document::{assemble_document, split_sections};
pub use line_classification::{classify_line, is_table_row_candidate, LineType};
pub use table::assemble_table;
