//! Output format implementations for document serialization
//!
//! This module contains the formats a [Document](crate::answer::ast::Document) can be written
//! to:
//! - tag: XML-like tree with inline span elements
//! - treeviz: one line per node, for quick scanning
//! - json / yaml: serde data formats for downstream renderers
//!
//! [OutputFormat] selects between them.

pub mod data;
pub mod output;
pub mod tag;
pub mod treeviz;

pub use data::{to_json, to_yaml};
pub use output::{FormatError, OutputFormat};
pub use tag::serialize_document as serialize_tag;
pub use treeviz::to_treeviz_str;
