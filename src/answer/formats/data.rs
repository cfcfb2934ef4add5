//! Data formats backed by serde
//!
//! These hand the whole document to a downstream renderer. Block variants carry a `type`
//! field (`heading`, `callout-heading`, `bullet`, `table`, `paragraph`).

use super::output::{FormatError, OutputFormat};
use crate::answer::ast::Document;

/// Pretty-printed JSON with a trailing newline
pub fn to_json(doc: &Document) -> Result<String, FormatError> {
    let mut json =
        serde_json::to_string_pretty(doc).map_err(|e| FormatError::new(OutputFormat::Json, e))?;
    json.push('\n');
    Ok(json)
}

pub fn to_yaml(doc: &Document) -> Result<String, FormatError> {
    serde_yaml::to_string(doc).map_err(|e| FormatError::new(OutputFormat::Yaml, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::parsing::assemble_document;

    #[test]
    fn test_json_round_trips() {
        let doc = assemble_document("## Totals\n| a | b |\nIssue found:\n---\nDone");
        let json = to_json(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_json_shape() {
        let doc = assemble_document("Issue found:");
        let json = to_json(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let block = &value["sections"][0]["blocks"][0];
        assert_eq!(block["type"], "callout-heading");
        assert_eq!(block["tag"], "issue");
    }

    #[test]
    fn test_yaml_round_trips() {
        let doc = assemble_document("- **one**\n- _two_");
        let yaml = to_yaml(&doc).unwrap();
        let back: Document = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, doc);
    }
}
