//! Assistant messages and their cached documents
//!
//!     An assistant message carries up to two content parts: an optional "thought" (shown
//!     collapsed until the reader expands it) and the "answer". Messages from older backends
//!     only fill `text`, which then stands in for the answer.
//!
//!     A [MessageView] owns one message and derives each part's [Document] at most once. The
//!     document is pure and deterministic, so it is cached for the lifetime of the view and
//!     handed out by reference.

use crate::answer::ast::Document;
use crate::answer::parsing::assemble_document;
use crate::answer::tagging::PaletteChoice;
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which content part of a message to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentPart {
    Thought,
    #[default]
    Answer,
}

impl ContentPart {
    /// Palette a part is painted with unless configuration says otherwise
    pub fn default_palette(&self) -> PaletteChoice {
        match self {
            ContentPart::Thought => PaletteChoice::Thought,
            ContentPart::Answer => PaletteChoice::Answer,
        }
    }
}

impl fmt::Display for ContentPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentPart::Thought => write!(f, "thought"),
            ContentPart::Answer => write!(f, "answer"),
        }
    }
}

/// One assistant message as delivered by the chat backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantMessage {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub thought: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl AssistantMessage {
    pub fn new(id: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            answer: Some(answer.into()),
            ..Self::default()
        }
    }

    pub fn with_thought(mut self, thought: impl Into<String>) -> Self {
        self.thought = Some(thought.into());
        self
    }

    /// A message standing in for a failed completion; the error text is its answer
    pub fn error(text: impl Into<String>) -> Self {
        Self::new("error-bot", text)
    }

    /// The answer, falling back to `text` when the answer is missing or empty
    pub fn answer_text(&self) -> &str {
        match self.answer.as_deref() {
            Some(answer) if !answer.is_empty() => answer,
            _ => &self.text,
        }
    }

    /// The thought, if present and non-empty
    pub fn thought_text(&self) -> Option<&str> {
        self.thought.as_deref().filter(|t| !t.is_empty())
    }
}

/// A message together with its lazily derived documents
#[derive(Debug)]
pub struct MessageView {
    message: AssistantMessage,
    thought: OnceCell<Option<Document>>,
    answer: OnceCell<Document>,
    thought_expanded: bool,
}

impl MessageView {
    pub fn new(message: AssistantMessage) -> Self {
        Self {
            message,
            thought: OnceCell::new(),
            answer: OnceCell::new(),
            thought_expanded: false,
        }
    }

    pub fn message(&self) -> &AssistantMessage {
        &self.message
    }

    pub fn answer(&self) -> &Document {
        self.answer
            .get_or_init(|| assemble_document(self.message.answer_text()))
    }

    pub fn thought(&self) -> Option<&Document> {
        self.thought
            .get_or_init(|| self.message.thought_text().map(assemble_document))
            .as_ref()
    }

    pub fn document(&self, part: ContentPart) -> Option<&Document> {
        match part {
            ContentPart::Thought => self.thought(),
            ContentPart::Answer => Some(self.answer()),
        }
    }

    pub fn has_thought(&self) -> bool {
        self.message.thought_text().is_some()
    }

    pub fn thought_expanded(&self) -> bool {
        self.thought_expanded
    }

    /// Flip the collapsed state of the thought; returns the new state
    pub fn toggle_thought(&mut self) -> bool {
        self.thought_expanded = !self.thought_expanded;
        self.thought_expanded
    }
}

impl From<AssistantMessage> for MessageView {
    fn from(message: AssistantMessage) -> Self {
        MessageView::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_falls_back_to_text() {
        let message = AssistantMessage {
            text: "legacy".into(),
            answer: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(message.answer_text(), "legacy");

        let message = AssistantMessage::new("m1", "fresh");
        assert_eq!(message.answer_text(), "fresh");
    }

    #[test]
    fn test_deserializes_backend_shape() {
        let json = r#"{"_id":"abc","sender":"assistant","thought":"Plan:","answer":"Done"}"#;
        let message: AssistantMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.id, "abc");
        assert_eq!(message.thought_text(), Some("Plan:"));
        assert_eq!(message.answer_text(), "Done");
    }

    #[test]
    fn test_missing_fields_default() {
        let message: AssistantMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(message.answer_text(), "");
        assert!(message.thought_text().is_none());
    }

    #[test]
    fn test_documents_are_cached() {
        let view = MessageView::new(AssistantMessage::new("m", "Intro\n---\nDetails"));
        let first = view.answer() as *const Document;
        let second = view.answer() as *const Document;
        assert_eq!(first, second);
        assert_eq!(view.answer().section_count(), 2);
    }

    #[test]
    fn test_thought_document() {
        let view = MessageView::new(AssistantMessage::new("m", "A").with_thought("Summary:"));
        assert!(view.has_thought());
        assert_eq!(view.thought().unwrap().block_count(), 1);

        let bare = MessageView::new(AssistantMessage::new("m", "A"));
        assert!(bare.thought().is_none());
        assert!(bare.document(ContentPart::Thought).is_none());
    }

    #[test]
    fn test_toggle_thought() {
        let mut view = MessageView::new(AssistantMessage::new("m", "A").with_thought("t"));
        assert!(!view.thought_expanded());
        assert!(view.toggle_thought());
        assert!(!view.toggle_thought());
    }

    #[test]
    fn test_error_message_renders_as_answer() {
        let view = MessageView::new(AssistantMessage::error("Error generating response."));
        assert_eq!(
            view.answer().sections[0].blocks[0].as_paragraph(),
            Some("Error generating response.")
        );
    }
}
