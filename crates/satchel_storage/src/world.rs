//! The world graph: locations, items, and adjacency.
//!
//! The `World` owns every [`Location`] and [`Item`]. Everything else refers
//! to them by id. It is assembled once at startup and read-only afterwards.

use std::collections::HashMap;

use satchel_foundation::{Error, ItemId, LocationId, Result};

use crate::item::Item;
use crate::location::{Description, DescriptionKey, Location};

/// Arena of locations and items.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    locations: Vec<Location>,
    items: Vec<Item>,
    /// Location name -> id
    names: HashMap<String, LocationId>,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the fixed four-room flat. See [`crate::homestead`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in content is inconsistent.
    pub fn homestead() -> Result<Self> {
        crate::homestead::build()
    }

    /// Adds a location with a unique name.
    ///
    /// # Errors
    ///
    /// Returns an error if a location with this name already exists.
    pub fn add_location(&mut self, name: impl Into<String>) -> Result<LocationId> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(Error::internal(format!("duplicate location: {name}")));
        }

        let id = LocationId::new(next_index(self.locations.len())?);
        self.names.insert(name.clone(), id);
        self.locations.push(Location::new(id, name));
        Ok(id)
    }

    /// Creates an item and places it at `location`, after any items already
    /// there.
    ///
    /// # Errors
    ///
    /// Returns an error if `location` is not part of this world.
    pub fn add_item(&mut self, location: LocationId, name: impl Into<String>) -> Result<ItemId> {
        let id = ItemId::new(next_index(self.items.len())?);
        self.location_mut(location)?.place_item(id);
        self.items.push(Item::new(id, name));
        Ok(id)
    }

    /// Sets the description shown for `key` at `location`.
    ///
    /// # Errors
    ///
    /// Returns an error if `location` is not part of this world.
    pub fn describe(
        &mut self,
        location: LocationId,
        key: DescriptionKey,
        description: Description,
    ) -> Result<()> {
        self.location_mut(location)?.set_description(key, description);
        Ok(())
    }

    /// Sets the same description for every [`DescriptionKey`].
    ///
    /// # Errors
    ///
    /// Returns an error if `location` is not part of this world.
    pub fn describe_all(&mut self, location: LocationId, description: &Description) -> Result<()> {
        for key in [DescriptionKey::Look, DescriptionKey::Arrival] {
            self.describe(location, key, description.clone())?;
        }
        Ok(())
    }

    /// Connects two locations in both directions.
    ///
    /// Connecting an already connected pair is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if either location is not part of this world.
    pub fn connect(&mut self, a: LocationId, b: LocationId) -> Result<()> {
        // Both ends must exist before either side is linked.
        self.location(a)?;
        self.location(b)?;

        self.location_mut(a)?.add_neighbor(b);
        self.location_mut(b)?.add_neighbor(a);
        Ok(())
    }

    /// Returns the location with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this world.
    pub fn location(&self, id: LocationId) -> Result<&Location> {
        self.locations
            .get(id.index())
            .ok_or_else(|| Error::internal(format!("dangling location reference: {id:?}")))
    }

    fn location_mut(&mut self, id: LocationId) -> Result<&mut Location> {
        self.locations
            .get_mut(id.index())
            .ok_or_else(|| Error::internal(format!("dangling location reference: {id:?}")))
    }

    /// Returns the item with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this world.
    pub fn item(&self, id: ItemId) -> Result<&Item> {
        self.items
            .get(id.index())
            .ok_or_else(|| Error::internal(format!("dangling item reference: {id:?}")))
    }

    /// Looks up a location by exact name.
    #[must_use]
    pub fn find_location(&self, name: &str) -> Option<LocationId> {
        self.names.get(name).copied()
    }

    /// Returns true if the two locations are directly connected.
    #[must_use]
    pub fn are_adjacent(&self, a: LocationId, b: LocationId) -> bool {
        self.location(a).is_ok_and(|loc| loc.is_adjacent_to(b))
    }

    /// Iterates over all locations in creation order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Iterates over all items in creation order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Returns the number of locations.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Returns the number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

fn next_index(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::internal("world arena is full"))
}
