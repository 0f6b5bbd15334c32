//! Error types for the kvconf library

use thiserror::Error;

/// Result type alias for kvconf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the kvconf library
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Line Reader Errors
    // -------------------------------------------------------------------------
    #[error("no equals (=) sign on non-blank line")]
    MissingEquals,

    /// A line-level or node-level failure, attributed to its 1-based source line.
    #[error("{source} (at line {line})")]
    Parse {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    /// The key on the left-hand side of a config line is not registered.
    #[error("unknown key \"{key}\" at line {line}")]
    UnknownKey { line: usize, key: String },

    // -------------------------------------------------------------------------
    // Value Validation Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    InvalidInt(#[from] std::num::ParseIntError),

    #[error(transparent)]
    InvalidFloat(#[from] std::num::ParseFloatError),

    // -------------------------------------------------------------------------
    // User Directory Errors
    // -------------------------------------------------------------------------
    /// The stored user value is empty; distinct from a uid of 0.
    #[error("no user value set")]
    UserUnset,

    #[error("user not found: {0}")]
    UserNotFound(String),

    // -------------------------------------------------------------------------
    // Stream Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this is a line-attributed parse failure
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Check if this is an unknown-key error
    #[must_use]
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, Error::UnknownKey { .. })
    }

    /// The 1-based source line this error was attributed to, if any
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { line, .. } | Error::UnknownKey { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Wrap this error with the source line it occurred on
    pub(crate) fn at_line(self, line: usize) -> Error {
        Error::Parse {
            line,
            source: Box::new(self),
        }
    }
}
