//! The main REPL implementation.

use std::io::{self, Write};

use satchel_foundation::Result;
use satchel_parser::Dispatcher;
use satchel_storage::Game;

use crate::config::ReplConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// What the REPL does with one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this response.
    Text(String),
    /// End the session.
    Quit,
}

/// The interactive game loop.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// World and player.
    game: Game,

    /// Routes lines to handlers.
    dispatcher: Dispatcher,

    /// Prompt, marker, quit word, banner.
    config: ReplConfig,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default configuration and rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or the game fails to initialize.
    pub fn new() -> Result<Self> {
        Self::with_config(ReplConfig::default())
    }

    /// Creates a new REPL with the rustyline editor and the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or the game fails to initialize.
    pub fn with_config(config: ReplConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        Self::with_editor(editor, config)
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL over the given editor, starting a fresh game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game fails to initialize.
    pub fn with_editor(mut editor: E, config: ReplConfig) -> Result<Self> {
        let game = Game::new()?;
        let dispatcher = Dispatcher::new();
        editor.set_keywords(completion_words(&dispatcher, &game));

        Ok(Self {
            editor,
            game,
            dispatcher,
            config,
        })
    }

    /// Returns the game state.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Runs the loop until the quit word or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        tracing::debug!("session ended");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.config.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if !line.trim().is_empty() {
            self.editor.add_history(&line);
        }

        match self.eval(&line) {
            Reply::Quit => Ok(false),
            Reply::Text(text) => {
                println!("{}", self.format_response(&text));
                Ok(true)
            }
        }
    }

    /// Evaluates one line against the game.
    pub fn eval(&mut self, line: &str) -> Reply {
        if line.trim() == self.config.quit_word {
            return Reply::Quit;
        }
        Reply::Text(self.dispatcher.dispatch(&mut self.game, line))
    }

    /// Prefixes a response with the configured marker.
    #[must_use]
    pub fn format_response(&self, text: &str) -> String {
        format!("{}{text}", self.config.marker)
    }

    /// Returns the usage banner.
    #[must_use]
    pub fn banner(&self) -> String {
        let mut banner = format!("write a command, or `{}` to exit\n", self.config.quit_word);
        for action in self.dispatcher.registry().iter() {
            banner.push_str("    ");
            banner.push_str(&action.usage);
            banner.push('\n');
        }
        banner
    }

    /// Prints the usage banner.
    fn print_banner(&self) {
        print!("{}", self.banner());
        let _ = io::stdout().flush();
    }
}

/// Verbs, place names, and item names, for tab completion.
fn completion_words(dispatcher: &Dispatcher, game: &Game) -> Vec<String> {
    let world = game.world();
    let mut words: Vec<String> = dispatcher
        .registry()
        .iter()
        .map(|action| action.verb.clone())
        .chain(world.locations().map(|loc| loc.name().to_string()))
        .chain(world.items().map(|item| item.name().to_string()))
        .collect();
    words.sort();
    words.dedup();
    words
}
