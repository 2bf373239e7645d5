//! Input tokenization.
//!
//! Splits a raw line on whitespace. Case and punctuation are kept: item and
//! place names match exactly.

/// A tokenized command line. The first token, if any, is the verb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> CommandLine<'a> {
    /// Returns the verb, or `None` for an empty line.
    #[must_use]
    pub fn verb(&self) -> Option<&'a str> {
        self.tokens.first().copied()
    }

    /// Returns every token, verb included at index 0.
    #[must_use]
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Returns the tokens after the verb.
    #[must_use]
    pub fn args(&self) -> &[&'a str] {
        self.tokens.get(1..).unwrap_or_default()
    }

    /// Returns true if the line held nothing but whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string.
    #[must_use]
    pub fn tokenize(input: &str) -> CommandLine<'_> {
        CommandLine {
            tokens: input.split_whitespace().collect(),
        }
    }
}
