//! Incremental reveal of paragraph text
//!
//!     A finished paragraph is shown character by character, as if it were being typed. Each
//!     paragraph owns its own reveal; reveals never wait on each other.
//!
//!     The reveal is an explicit state object advanced by an external tick, not a sleeping
//!     loop, so any number of paragraphs can reveal on one thread:
//!
//!         - [Revealer]: the `Idle -> Revealing -> Complete` state machine for one text
//!         - [RevealBoard]: one revealer per mounted paragraph, ticked together
//!         - [spawn_reveal]: a tokio task driving one revealer from an interval timer
//!
//!     A revealer never changes text. When a paragraph's text is replaced the old revealer is
//!     dropped and a fresh one starts from zero, so a partial reveal of old text can never
//!     leak into new text. Dropping the owner stops the reveal; there is nothing left to tick.

pub mod board;
pub mod revealer;
pub mod task;

pub use board::RevealBoard;
pub use revealer::{reveal, RevealState, Revealer};
pub use task::{spawn_reveal, RevealError, RevealHandle};
