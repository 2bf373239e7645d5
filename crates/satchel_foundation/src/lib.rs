//! Core identifiers and error types for Satchel.
//!
//! This crate provides:
//! - [`LocationId`] / [`ItemId`] - Stable arena indices into the world
//! - [`Error`] - Game errors with optional diagnostic context
//! - [`Result`] - Crate-wide result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use id::{ItemId, LocationId};
