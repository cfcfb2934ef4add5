//! Testing utilities for documents
//!
//!     Tests should assert on the structure of a document through the fluent API in
//!     [assertions] rather than poking at `sections[i].blocks[j]` by hand. Failures then
//!     report where in the tree the mismatch is and what the section actually held.
//!
//!         use answer_render::answer::testing::assert_doc;
//!
//!         let doc = assemble_document("Intro\n---\nDetails");
//!         assert_doc(&doc)
//!             .section_count(2)
//!             .section(0, |s| {
//!                 s.block_count(1).block(0, |b| {
//!                     b.paragraph("Intro");
//!                 });
//!             });

pub mod assertions;

pub use assertions::{assert_doc, BlockAssertion, DocumentAssertion, SectionAssertion};
