//! Routing a raw command line to its handler.

use satchel_foundation::{Error, ErrorContext, Result};
use satchel_storage::Game;

use crate::action::ActionRegistry;
use crate::tokenizer::InputTokenizer;

/// Looks up the handler for a line's verb and runs it.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    registry: ActionRegistry,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Creates a dispatcher with the standard `look`/`move`/`take` verbs.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(ActionRegistry::standard())
    }

    /// Creates a dispatcher over a custom registry.
    #[must_use]
    pub fn with_registry(registry: ActionRegistry) -> Self {
        Self { registry }
    }

    /// Returns the verb registry.
    #[must_use]
    pub const fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Runs one command line and returns the text to show the player.
    ///
    /// Success and failure both come back as plain text. An empty line or an
    /// unrecognized verb yields "unknown command".
    pub fn dispatch(&self, game: &mut Game, line: &str) -> String {
        self.execute(game, line).unwrap_or_else(|error| error.to_string())
    }

    /// Runs one command line, keeping success and failure apart.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVerb` for an empty line or an unrecognized verb, or
    /// whatever the handler failed with. Errors carry the verb and the raw
    /// line as context.
    pub fn execute(&self, game: &mut Game, line: &str) -> Result<String> {
        let command = InputTokenizer::tokenize(line);
        let Some(verb) = command.verb() else {
            tracing::debug!("empty command line");
            return Err(Error::unknown_verb("").with_context(ErrorContext::new().with_input(line)));
        };

        let Some(action) = self.registry.get(verb) else {
            tracing::debug!(verb, "unknown verb");
            return Err(Error::unknown_verb(verb)
                .with_context(ErrorContext::new().with_verb(verb).with_input(line)));
        };

        tracing::debug!(verb, args = ?command.args(), "dispatching");
        (action.handler)(game, command.tokens()).map_err(|error| {
            if !error.is_recoverable() {
                tracing::error!(%error, verb, "command failed");
            }
            error.with_context(ErrorContext::new().with_verb(verb).with_input(line))
        })
    }
}
