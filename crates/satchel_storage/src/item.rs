//! Items that can lie in a location or sit in the player's inventory.

use satchel_foundation::ItemId;

/// A named object. Identity is its [`ItemId`], not its name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    id: ItemId,
    name: String,
}

impl Item {
    pub(crate) fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the item's arena id.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the item's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
