//! Element definitions for the document tree

pub mod block;
pub mod document;
pub mod span;
pub mod tag;

pub use block::{Block, Table};
pub use document::{BlockKey, Document, Section};
pub use span::{Span, SpanKind};
pub use tag::SemanticTag;
