//! Main application state and event handling
//!
//! The App struct brings together:
//! - the message view (cached documents for the thought and answer parts)
//! - one reveal board per part, so both parts can reveal at the same time
//! - the palettes each part is painted with
//! - how far the message body is scrolled
//!
//! The thought part starts collapsed. Collapsing it tears its reveals down; expanding it
//! mounts them again from zero.

use answer_render::answer::config::AnswerConfig;
use answer_render::answer::message::{ContentPart, MessageView};
use answer_render::answer::reveal::RevealBoard;
use answer_render::answer::tagging::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

const PAGE_LINES: usize = 10;

/// The main application
pub struct App {
    pub view: MessageView,
    pub answer_board: RevealBoard,
    pub thought_board: RevealBoard,
    pub answer_palette: Palette,
    pub thought_palette: Palette,
    pub tick_interval: Duration,
    pub should_quit: bool,
    /// How many body lines are scrolled off the top
    scroll_offset: usize,
}

impl App {
    pub fn new(view: MessageView, config: &AnswerConfig) -> Self {
        let mut app = App {
            view,
            answer_board: RevealBoard::new(),
            thought_board: RevealBoard::new(),
            answer_palette: config.palette_for(ContentPart::Answer),
            thought_palette: config.palette_for(ContentPart::Thought),
            tick_interval: config.reveal.tick_interval(),
            should_quit: false,
            scroll_offset: 0,
        };
        app.sync_boards();
        app
    }

    /// Mount the paragraphs of every visible part
    fn sync_boards(&mut self) {
        self.answer_board.sync_document(self.view.answer());
        match self.view.thought() {
            Some(thought) if self.view.thought_expanded() => {
                self.thought_board.sync_document(thought)
            }
            _ => self.thought_board.clear(),
        }
    }

    /// Advance every visible reveal by one character; returns whether anything changed
    pub fn on_tick(&mut self) -> bool {
        let changed = self.answer_board.tick_all() + self.thought_board.tick_all();
        changed > 0
    }

    pub fn toggle_thought(&mut self) {
        if self.view.has_thought() {
            self.view.toggle_thought();
            self.sync_boards();
        }
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Keep at least the last body line on screen
    pub fn clamp_scroll(&mut self, body_lines: usize) {
        self.scroll_offset = self.scroll_offset.min(body_lines.saturating_sub(1));
    }

    /// Start every visible reveal over from the first character, back at the top
    pub fn restart(&mut self) {
        self.scroll_offset = 0;
        self.answer_board.clear();
        self.thought_board.clear();
        self.sync_boards();
    }

    /// Handle a keyboard event
    ///
    /// Returns whether the state changed (needed for re-rendering)
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('t') => {
                self.toggle_thought();
                true
            }
            KeyCode::Char('r') => {
                self.restart();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down(1);
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up(1);
                true
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.scroll_down(PAGE_LINES);
                true
            }
            KeyCode::PageUp => {
                self.scroll_up(PAGE_LINES);
                true
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll_offset = 0;
                true
            }
            _ => false,
        }
    }
}
