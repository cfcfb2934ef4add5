//! Document tree produced from raw model output
//!
//!     The tree is deliberately shallow: a Document holds Sections, a Section holds Blocks,
//!     and a few Block variants carry inline Spans. Nothing here is mutable after assembly;
//!     the whole tree can be shared between renderers.
//!
//!     Element types live in [elements], the shared node interface in [traits].

pub mod elements;
pub mod traits;

pub use elements::{Block, BlockKey, Document, Section, SemanticTag, Span, SpanKind, Table};
pub use traits::AstNode;
