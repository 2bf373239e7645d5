//! Locations and their descriptions.
//!
//! A location's text depends on how the player got to see it: looking around
//! and arriving can read differently. Descriptions are plain data, rendered
//! against the current game state only when a handler asks for them.

use std::collections::HashMap;

use satchel_foundation::{ItemId, LocationId};

/// Which command revealed the location.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DescriptionKey {
    /// Text shown by `look`.
    Look,
    /// Text shown after a successful `move` into the location.
    Arrival,
}

/// How a location's text is produced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Description {
    /// Fixed text.
    Static(String),
    /// Lists the items here that the player has not taken yet.
    ///
    /// Renders as `"{heading}: a, b, c. {exits}"`, or `"{empty}. {exits}"`
    /// once everything has been picked up.
    UnclaimedItems {
        /// Lead-in before the item list, e.g. "on the table".
        heading: String,
        /// Replacement text when nothing is left.
        empty: String,
        /// Trailing exits sentence.
        exits: String,
    },
}

impl Description {
    /// Creates a static description.
    #[must_use]
    pub fn fixed(text: impl Into<String>) -> Self {
        Self::Static(text.into())
    }

    /// Renders the description given the names of the unclaimed items here,
    /// in the location's stored order.
    #[must_use]
    pub fn render(&self, unclaimed: &[&str]) -> String {
        match self {
            Self::Static(text) => text.clone(),
            Self::UnclaimedItems {
                heading,
                empty,
                exits,
            } => {
                if unclaimed.is_empty() {
                    format!("{empty}. {exits}")
                } else {
                    format!("{heading}: {}. {exits}", unclaimed.join(", "))
                }
            }
        }
    }

    /// Returns true if the rendered text depends on the player's inventory.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::UnclaimedItems { .. })
    }
}

/// A named place in the world graph.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    id: LocationId,
    name: String,
    descriptions: HashMap<DescriptionKey, Description>,
    /// Adjacent locations, in connection order. Kept symmetric by
    /// [`World::connect`](crate::World::connect).
    neighbors: Vec<LocationId>,
    /// Items placed here at startup. Never shrinks: taking an item only
    /// records it in the inventory.
    items: Vec<ItemId>,
}

impl Location {
    pub(crate) fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            descriptions: HashMap::new(),
            neighbors: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Returns the location's arena id.
    #[must_use]
    pub const fn id(&self) -> LocationId {
        self.id
    }

    /// Returns the location's unique name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description for the given key, if one was set.
    #[must_use]
    pub fn description(&self, key: DescriptionKey) -> Option<&Description> {
        self.descriptions.get(&key)
    }

    /// Returns the adjacent locations.
    #[must_use]
    pub fn neighbors(&self) -> &[LocationId] {
        &self.neighbors
    }

    /// Returns the items placed here, claimed or not.
    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Returns true if `other` is directly reachable from here.
    #[must_use]
    pub fn is_adjacent_to(&self, other: LocationId) -> bool {
        self.neighbors.contains(&other)
    }

    pub(crate) fn set_description(&mut self, key: DescriptionKey, description: Description) {
        self.descriptions.insert(key, description);
    }

    pub(crate) fn add_neighbor(&mut self, other: LocationId) {
        if !self.neighbors.contains(&other) {
            self.neighbors.push(other);
        }
    }

    pub(crate) fn place_item(&mut self, item: ItemId) {
        self.items.push(item);
    }
}
