//! The fixed game content: a small flat and the street outside.
//!
//! ```text
//!   kitchen ── hallway ── room
//!                 │
//!               street
//! ```
//!
//! The room holds the keys, the notes, and the backpack. Nothing else can be
//! picked up.

use satchel_foundation::Result;

use crate::location::{Description, DescriptionKey};
use crate::world::World;

/// Name of the kitchen.
pub const KITCHEN: &str = "kitchen";
/// Name of the player's room.
pub const ROOM: &str = "room";
/// Name of the hallway.
pub const HALLWAY: &str = "hallway";
/// Name of the street.
pub const STREET: &str = "street";

/// Where a new player wakes up.
pub const START: &str = KITCHEN;

/// Items on the room's table, in listing order.
pub const ROOM_ITEMS: [&str; 3] = ["keys", "notes", "backpack"];

/// Builds the homestead world.
///
/// # Errors
///
/// Returns an error only if the content below is inconsistent.
pub fn build() -> Result<World> {
    let mut world = World::new();

    let kitchen = world.add_location(KITCHEN)?;
    world.describe(
        kitchen,
        DescriptionKey::Look,
        Description::fixed(
            "you are in the kitchen, you need to pack your backpack and go to university. \
             you can go to - hallway",
        ),
    )?;
    world.describe(
        kitchen,
        DescriptionKey::Arrival,
        Description::fixed("kitchen, nothing interesting. you can go to - hallway"),
    )?;

    let room = world.add_location(ROOM)?;
    world.describe(
        room,
        DescriptionKey::Look,
        Description::UnclaimedItems {
            heading: "on the table".to_string(),
            empty: "empty room".to_string(),
            exits: "you can go to - hallway".to_string(),
        },
    )?;
    world.describe(
        room,
        DescriptionKey::Arrival,
        Description::fixed("you are in your room. you can go to - hallway"),
    )?;
    for name in ROOM_ITEMS {
        world.add_item(room, name)?;
    }

    let hallway = world.add_location(HALLWAY)?;
    world.describe_all(
        hallway,
        &Description::fixed("nothing interesting. you can go to - kitchen, room, street"),
    )?;

    let street = world.add_location(STREET)?;
    world.describe_all(
        street,
        &Description::fixed("it is spring outside. you can go to - home"),
    )?;

    world.connect(kitchen, hallway)?;
    world.connect(hallway, room)?;
    world.connect(hallway, street)?;

    Ok(world)
}
