//! The closed set of output formats
//!
//! [OutputFormat] names every way a classified answer can be written out. It implements
//! [clap::ValueEnum], so the CLI parses `--format` straight into it and an unknown name is
//! rejected during argument parsing instead of at serialization time.

use super::{data, tag, treeviz};
use crate::answer::ast::Document;
use clap::builder::PossibleValue;
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Tag,
    Treeviz,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Tag,
        OutputFormat::Treeviz,
        OutputFormat::Json,
        OutputFormat::Yaml,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Tag => "XML-like tree with inline bold/italic elements",
            OutputFormat::Treeviz => "One line per node with box-drawing connectors",
            OutputFormat::Json => "Pretty-printed JSON document",
            OutputFormat::Yaml => "YAML document",
        }
    }

    /// Write `doc` in this format
    ///
    /// Only the serde-backed formats can fail.
    pub fn serialize(self, doc: &Document) -> Result<String, FormatError> {
        match self {
            OutputFormat::Tag => Ok(tag::serialize_document(doc)),
            OutputFormat::Treeviz => Ok(treeviz::to_treeviz_str(doc)),
            OutputFormat::Json => data::to_json(doc),
            OutputFormat::Yaml => data::to_yaml(doc),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.name()).help(self.description()))
    }
}

/// A serde backend refused the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub format: OutputFormat,
    pub message: String,
}

impl FormatError {
    pub(crate) fn new(format: OutputFormat, err: impl fmt::Display) -> Self {
        FormatError {
            format,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not write {} output: {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}
