//! Configuration for the REPL.

/// Controls how the REPL reads and prints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Prompt shown before each input line.
    pub prompt: String,

    /// Printed before every response.
    pub marker: String,

    /// A line equal to this (after trimming) ends the session.
    pub quit_word: String,

    /// Whether to print the usage banner on startup.
    pub show_banner: bool,

    /// Number of lines kept in the editor history.
    pub history_size: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            marker: "> ".to_string(),
            quit_word: "quit".to_string(),
            show_banner: true,
            history_size: 100,
        }
    }
}

impl ReplConfig {
    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the response marker.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Builder method to set the quit word.
    #[must_use]
    pub fn with_quit_word(mut self, word: impl Into<String>) -> Self {
        self.quit_word = word.into();
        self
    }

    /// Builder method to enable/disable the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set the history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }
}
