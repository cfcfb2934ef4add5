//! Reveal board: one revealer per mounted paragraph
//!
//! The board is the rendering session's view of which paragraphs are on screen. Mounting a
//! slot with the text it already shows keeps its progress; mounting it with different text
//! starts over from zero. Unmounting drops the revealer, so nothing can tick it afterwards.

use super::revealer::{RevealState, Revealer};
use crate::answer::ast::{BlockKey, Document};
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

#[derive(Debug, Default)]
pub struct RevealBoard {
    slots: BTreeMap<BlockKey, Revealer>,
}

impl RevealBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a paragraph's text in a slot
    ///
    /// Returns `true` when a fresh revealer was created.
    pub fn mount(&mut self, key: BlockKey, text: &str) -> bool {
        if let Some(existing) = self.slots.get(&key) {
            if existing.source() == text {
                return false;
            }
            trace!(?key, "paragraph text replaced, restarting reveal");
        }
        self.slots.insert(key, Revealer::new(text));
        true
    }

    /// Tear down a slot; returns whether anything was mounted there
    pub fn unmount(&mut self, key: BlockKey) -> bool {
        let removed = self.slots.remove(&key).is_some();
        if removed {
            trace!(?key, "reveal torn down");
        }
        removed
    }

    /// Drop every slot whose key is not listed
    pub fn retain<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = BlockKey>,
    {
        let keep: BTreeSet<BlockKey> = keys.into_iter().collect();
        self.slots.retain(|key, _| keep.contains(key));
    }

    /// Mount every paragraph of a document and drop slots it no longer has
    pub fn sync_document(&mut self, document: &Document) {
        let mut mounted = Vec::new();
        for (key, text) in document.paragraphs() {
            self.mount(key, text);
            mounted.push(key);
        }
        self.retain(mounted);
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Advance every mounted revealer by one character
    ///
    /// Returns how many revealers changed.
    pub fn tick_all(&mut self) -> usize {
        self.slots
            .values_mut()
            .filter_map(|revealer| revealer.tick().map(|_| ()))
            .count()
    }

    /// Show every mounted text in full
    pub fn finish_all(&mut self) {
        for revealer in self.slots.values_mut() {
            revealer.finish();
        }
    }

    pub fn visible(&self, key: BlockKey) -> Option<&str> {
        self.slots.get(&key).map(Revealer::visible)
    }

    pub fn state(&self, key: BlockKey) -> Option<RevealState> {
        self.slots.get(&key).map(Revealer::state)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether every mounted reveal is complete (vacuously true when empty)
    pub fn all_complete(&self) -> bool {
        self.slots.values().all(Revealer::is_complete)
    }
}
