//! Error types for Satchel.
//!
//! Uses `thiserror` for ergonomic error definition. Every game error is
//! recoverable: its `Display` text is exactly what the player sees.

use std::fmt;

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Satchel operations.
///
/// Displays as its [`ErrorKind`] only; the attached [`ErrorContext`] is for
/// logs and never leaks into player-facing text.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about which command produced the error.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an arity error carrying the expected command form.
    #[must_use]
    pub fn invalid_arity(usage: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArity {
            usage: usage.into(),
        })
    }

    /// Creates an unknown verb error.
    #[must_use]
    pub fn unknown_verb(verb: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownVerb(verb.into()))
    }

    /// Creates a no-path error for the given destination name.
    #[must_use]
    pub fn no_path(destination: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoPath(destination.into()))
    }

    /// Creates an item-not-found error.
    #[must_use]
    pub fn item_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::ItemNotFound(name.into()))
    }

    /// Creates an internal error (broken invariant or terminal failure).
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true for errors caused by player input rather than the engine.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.kind, ErrorKind::Internal(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong number of arguments for the verb.
    #[error("invalid command, expected: {usage}")]
    InvalidArity {
        /// The expected command form, e.g. `move <place>`.
        usage: String,
    },

    /// First token is not a recognized verb. The verb itself is kept for
    /// diagnostics only.
    #[error("unknown command")]
    UnknownVerb(String),

    /// Destination is unknown or not adjacent to the current location.
    #[error("no path to {0}")]
    NoPath(String),

    /// Requested item is not unclaimed at the current location.
    #[error("no such item")]
    ItemNotFound(String),

    /// Internal error (should not happen with a well-formed world).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about which command produced an error.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The verb that was dispatched.
    pub verb: Option<String>,
    /// The raw input line.
    pub input: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dispatched verb.
    #[must_use]
    pub fn with_verb(mut self, verb: impl Into<String>) -> Self {
        self.verb = Some(verb.into());
        self
    }

    /// Sets the raw input line.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.verb, &self.input) {
            (Some(verb), Some(input)) => write!(f, "in `{verb}` from {input:?}"),
            (Some(verb), None) => write!(f, "in `{verb}`"),
            (None, Some(input)) => write!(f, "from {input:?}"),
            (None, None) => Ok(()),
        }
    }
}
