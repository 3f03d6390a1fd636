//! Keystroke sources for the calculator.
//!
//! This module contains:
//! - keys.rs - raw keystrokes from the terminal via crossterm
//! - lines.rs - line-buffered fallback over any reader

mod keys;
mod lines;

pub use keys::TerminalKeys;
pub use lines::LineKeys;
