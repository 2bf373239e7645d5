//! World graph, item placement, and player state for Satchel.
//!
//! This crate provides:
//! - [`World`] - Arena of locations and items with a symmetric adjacency graph
//! - [`Location`] / [`Description`] - Places and their verb-keyed text
//! - [`Item`] - Named, non-consumable objects
//! - [`Player`] - Current location and inventory
//! - [`Game`] - World and player bundled as one explicit context
//! - [`homestead`] - The fixed four-room flat the game ships with

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod game;
pub mod homestead;
pub mod item;
pub mod location;
pub mod player;
pub mod world;

pub use game::Game;
pub use item::Item;
pub use location::{Description, DescriptionKey, Location};
pub use player::Player;
pub use world::World;
