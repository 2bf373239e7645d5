//! Game state: one world and the player walking through it.
//!
//! `Game` is the explicit context every command handler receives. Building a
//! fresh one per test keeps tests isolated from each other.

use satchel_foundation::{Error, Result};

use crate::homestead;
use crate::location::{DescriptionKey, Location};
use crate::player::Player;
use crate::world::World;

/// Default name given to the player.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// World plus player.
#[derive(Clone, Debug)]
pub struct Game {
    world: World,
    player: Player,
}

impl Game {
    /// Starts a new game in the homestead, in the kitchen, empty-handed.
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in content is inconsistent.
    pub fn new() -> Result<Self> {
        Self::with_world(homestead::build()?, homestead::START)
    }

    /// Starts a game in an arbitrary world at the named location.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not a location of `world`.
    pub fn with_world(world: World, start: &str) -> Result<Self> {
        let start = world
            .find_location(start)
            .ok_or_else(|| Error::internal(format!("unknown start location: {start}")))?;
        Ok(Self {
            world,
            player: Player::new(DEFAULT_PLAYER_NAME, start),
        })
    }

    /// Rebuilds the homestead and puts the player back at the start with an
    /// empty inventory, discarding all progress.
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in content is inconsistent.
    pub fn reset(&mut self) -> Result<()> {
        let world = homestead::build()?;
        let start = world
            .find_location(homestead::START)
            .ok_or_else(|| Error::internal("homestead has no start location"))?;

        self.world = world;
        self.player.reset(start);
        tracing::info!("game reset");
        Ok(())
    }

    /// Returns the world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Borrows the world and the player at once so the player can be moved
    /// or handed items while the world is read.
    pub fn split_mut(&mut self) -> (&World, &mut Player) {
        (&self.world, &mut self.player)
    }

    /// Returns the location the player stands in.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's location is not part of the world.
    pub fn current_location(&self) -> Result<&Location> {
        self.world.location(self.player.location())
    }

    /// Renders the current location's text for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the location has no text for `key` or refers to
    /// items outside the world.
    pub fn describe(&self, key: DescriptionKey) -> Result<String> {
        let here = self.current_location()?;
        let description = here.description(key).ok_or_else(|| {
            tracing::error!(location = here.name(), ?key, "missing description");
            Error::internal(format!("{} has no {key:?} description", here.name()))
        })?;

        let unclaimed = if description.is_dynamic() {
            self.player
                .unclaimed_items(&self.world)?
                .into_iter()
                .map(|id| self.world.item(id).map(crate::Item::name))
                .collect::<Result<Vec<_>>>()?
        } else {
            Vec::new()
        };

        Ok(description.render(&unclaimed))
    }
}
