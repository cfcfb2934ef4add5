//! Single-text reveal state machine
//!
//! The reveal unit is one `char`, so every snapshot is a valid `&str` prefix of the source.

use serde::Serialize;
use std::fmt;
use tracing::trace;

/// Where a revealer is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    /// Nothing shown yet
    Idle,
    /// Some but not all characters shown
    Revealing,
    /// Whole text shown; further ticks do nothing
    Complete,
}

impl fmt::Display for RevealState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealState::Idle => write!(f, "idle"),
            RevealState::Revealing => write!(f, "revealing"),
            RevealState::Complete => write!(f, "complete"),
        }
    }
}

/// Progressive reveal of one fixed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revealer {
    source: String,
    total_chars: usize,
    revealed_chars: usize,
    revealed_bytes: usize,
}

impl Revealer {
    pub fn new(text: impl Into<String>) -> Self {
        let source = text.into();
        let total_chars = source.chars().count();
        Self {
            source,
            total_chars,
            revealed_chars: 0,
            revealed_bytes: 0,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Characters currently shown
    pub fn revealed_len(&self) -> usize {
        self.revealed_chars
    }

    pub fn state(&self) -> RevealState {
        if self.revealed_chars == self.total_chars {
            RevealState::Complete
        } else if self.revealed_chars == 0 {
            RevealState::Idle
        } else {
            RevealState::Revealing
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == RevealState::Complete
    }

    /// The currently shown prefix
    pub fn visible(&self) -> &str {
        &self.source[..self.revealed_bytes]
    }

    /// Show one more character and return the new prefix
    ///
    /// Returns `None` once the whole text is shown. An empty text is complete from the
    /// start and never yields a snapshot.
    pub fn tick(&mut self) -> Option<&str> {
        let next = self.source[self.revealed_bytes..].chars().next()?;
        self.revealed_bytes += next.len_utf8();
        self.revealed_chars += 1;
        trace!(
            revealed = self.revealed_chars,
            total = self.total_chars,
            "reveal tick"
        );
        Some(self.visible())
    }

    /// Show the whole text at once
    pub fn finish(&mut self) {
        self.revealed_bytes = self.source.len();
        self.revealed_chars = self.total_chars;
    }
}

/// Every snapshot of a full reveal, shortest first
///
/// Yields exactly one prefix per character, ending with the whole text.
pub fn reveal(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.char_indices()
        .map(move |(start, c)| &text[..start + c.len_utf8()])
}
