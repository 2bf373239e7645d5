//! Satchel - a minimal text adventure
//!
//! This crate re-exports all layers of the Satchel system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: satchel_runtime    - REPL, line editing, CLI
//! Layer 2: satchel_parser     - Tokenizer, verb registry, handlers, dispatcher
//! Layer 1: satchel_storage    - World graph, items, player, game state
//! Layer 0: satchel_foundation - Ids and errors
//! ```

pub use satchel_foundation as foundation;
pub use satchel_parser as parser;
pub use satchel_runtime as runtime;
pub use satchel_storage as storage;
