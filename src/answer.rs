//! Main module for answer rendering functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod inlines;
pub mod message;
pub mod parsing;
pub mod reveal;
pub mod tagging;
pub mod testing;
