//! REPL and command-line entry point for Satchel.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop over the game
//! - [`ReplConfig`] - Prompt, response marker, quit word, banner
//! - [`LineEditor`] - Swappable line input, backed by rustyline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod repl;

pub use config::ReplConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Repl, Reply};
