//! Command parsing and dispatch for Satchel.
//!
//! This crate turns a line like "take keys" into a change of game state and
//! a line of text for the player.
//!
//! # Architecture
//!
//! ```text
//! "move hallway"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["move", "hallway"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ACTION          │  → "move" → walk handler
//! │ REGISTRY        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ HANDLER         │  → mutates Game, returns text or Error
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DISPATCHER      │  → errors flattened to their display text
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Split raw input into a command line
//! - [`action`] - Verb registry and the look/move/take handlers
//! - [`dispatch`] - Routing a line to its handler

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod dispatch;
pub mod tokenizer;

// Re-export main types for convenience
pub use action::{Action, ActionRegistry, Handler};
pub use dispatch::Dispatcher;
pub use tokenizer::{CommandLine, InputTokenizer};
