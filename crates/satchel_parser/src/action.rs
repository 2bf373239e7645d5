//! Action registry and the built-in command handlers.
//!
//! A handler receives the whole token list with the verb at `args[0]`, checks
//! its own arity, and either returns the text to show or an [`Error`].

use std::collections::HashMap;
use std::fmt;

use satchel_foundation::{Error, Result};
use satchel_storage::{DescriptionKey, Game};

/// Signature shared by all command handlers.
pub type Handler = fn(&mut Game, &[&str]) -> Result<String>;

/// A verb bound to its handler.
#[derive(Clone)]
pub struct Action {
    /// The verb word, matched exactly.
    pub verb: String,
    /// Expected form, shown in arity errors and the banner.
    pub usage: String,
    /// The handler to run.
    pub handler: Handler,
}

impl Action {
    /// Creates an action.
    #[must_use]
    pub fn new(verb: impl Into<String>, usage: impl Into<String>, handler: Handler) -> Self {
        Self {
            verb: verb.into(),
            usage: usage.into(),
            handler,
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("verb", &self.verb)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

/// Verb -> action mapping.
#[derive(Clone, Debug, Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Action>,
    /// Registration order, for stable help output.
    order: Vec<String>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with `look`, `move`, and `take`.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Action::new(LOOK, LOOK_USAGE, look));
        registry.register(Action::new(MOVE, MOVE_USAGE, walk));
        registry.register(Action::new(TAKE, TAKE_USAGE, take));
        registry
    }

    /// Registers an action, replacing any previous action for the same verb.
    pub fn register(&mut self, action: Action) {
        if !self.actions.contains_key(&action.verb) {
            self.order.push(action.verb.clone());
        }
        self.actions.insert(action.verb.clone(), action);
    }

    /// Looks up the action for an exact verb.
    #[must_use]
    pub fn get(&self, verb: &str) -> Option<&Action> {
        self.actions.get(verb)
    }

    /// Iterates over actions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.order.iter().filter_map(|verb| self.actions.get(verb))
    }

    /// Returns the number of registered verbs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if no verbs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Look around.
pub const LOOK: &str = "look";
/// Walk to an adjacent place.
pub const MOVE: &str = "move";
/// Pick up an item.
pub const TAKE: &str = "take";

const LOOK_USAGE: &str = "look";
const MOVE_USAGE: &str = "move <place>";
const TAKE_USAGE: &str = "take <item>";

fn expect_arity(args: &[&str], count: usize, usage: &str) -> Result<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(Error::invalid_arity(usage))
    }
}

/// `look`: describe the current location.
///
/// # Errors
///
/// Returns `InvalidArity` if anything follows the verb.
pub fn look(game: &mut Game, args: &[&str]) -> Result<String> {
    expect_arity(args, 1, LOOK_USAGE)?;
    game.describe(DescriptionKey::Look)
}

/// `move <place>`: walk to an adjacent location and describe the arrival.
///
/// # Errors
///
/// Returns `InvalidArity` unless exactly one place is given, and `NoPath`
/// if the place is unknown or not adjacent.
pub fn walk(game: &mut Game, args: &[&str]) -> Result<String> {
    expect_arity(args, 2, MOVE_USAGE)?;
    let (world, player) = game.split_mut();
    player.walk(world, args[1])?;
    game.describe(DescriptionKey::Arrival)
}

/// `take <item>`: pick up an unclaimed item here.
///
/// # Errors
///
/// Returns `InvalidArity` unless exactly one item is given, and
/// `ItemNotFound` if no such item is lying here.
pub fn take(game: &mut Game, args: &[&str]) -> Result<String> {
    expect_arity(args, 2, TAKE_USAGE)?;
    let (world, player) = game.split_mut();
    player.take(world, args[1])?;
    let inventory = player.inventory_names(world)?;
    tracing::info!(item = args[1], ?inventory, "item taken");
    Ok(format!("item added to inventory: {}", args[1]))
}
