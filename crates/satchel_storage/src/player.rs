//! Player state: where the player stands and what they carry.

use satchel_foundation::{Error, ItemId, LocationId, Result};

use crate::world::World;

/// The single actor of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    location: LocationId,
    /// Taken items, in pickup order. Ids only; the world keeps the items.
    inventory: Vec<ItemId>,
}

impl Player {
    /// Creates a player standing at `location` with an empty inventory.
    #[must_use]
    pub fn new(name: impl Into<String>, location: LocationId) -> Self {
        Self {
            name: name.into(),
            location,
            inventory: Vec::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current location.
    #[must_use]
    pub const fn location(&self) -> LocationId {
        self.location
    }

    /// Returns the taken items in pickup order.
    #[must_use]
    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    /// Returns true if the item has been taken.
    #[must_use]
    pub fn carries(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    /// Items at the current location that are not in the inventory, in the
    /// location's order. Compared by id, never by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the current location is not part of `world`.
    pub fn unclaimed_items(&self, world: &World) -> Result<Vec<ItemId>> {
        let here = world.location(self.location)?;
        Ok(here
            .items()
            .iter()
            .copied()
            .filter(|&item| !self.carries(item))
            .collect())
    }

    /// Walks to the adjacent location called `destination`.
    ///
    /// An unknown name and a known but unreachable place fail the same way.
    ///
    /// # Errors
    ///
    /// Returns `NoPath` if there is no direct connection to `destination`.
    pub fn walk(&mut self, world: &World, destination: &str) -> Result<LocationId> {
        let target = world
            .find_location(destination)
            .filter(|&id| world.are_adjacent(self.location, id))
            .ok_or_else(|| Error::no_path(destination))?;

        tracing::info!(from = ?self.location, to = ?target, "player moved");
        self.location = target;
        Ok(target)
    }

    /// Picks up the first unclaimed item here whose name is exactly `name`.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if no such item is lying here.
    pub fn take(&mut self, world: &World, name: &str) -> Result<ItemId> {
        let mut found = None;
        for id in self.unclaimed_items(world)? {
            if world.item(id)?.name() == name {
                found = Some(id);
                break;
            }
        }

        let item = found.ok_or_else(|| Error::item_not_found(name))?;
        self.inventory.push(item);
        Ok(item)
    }

    /// Names of the carried items, in pickup order.
    ///
    /// # Errors
    ///
    /// Returns an error if an inventory id is not part of `world`.
    pub fn inventory_names<'w>(&self, world: &'w World) -> Result<Vec<&'w str>> {
        self.inventory
            .iter()
            .map(|&id| world.item(id).map(crate::Item::name))
            .collect()
    }

    pub(crate) fn reset(&mut self, location: LocationId) {
        self.location = location;
        self.inventory.clear();
    }
}
