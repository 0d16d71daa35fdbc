//! Error types.
//!
//! `Close` and `Interrupted` are control flow rather than failures: they unwind
//! out of handlers and are caught at the session boundary.

use std::fmt;

use thiserror::Error;

/// What kind of name a failed lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Component,
    View,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Component => f.write_str("component"),
            Lookup::View => f.write_str("view"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{kind} not found: {name}")]
    NotFound { kind: Lookup, name: String },

    #[error("{name} is not a {expected}")]
    TypeMismatch { name: String, expected: &'static str },

    #[error("{0}")]
    Close(String),

    #[error("interrupted")]
    Interrupted,

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Close the session with a human-readable reason.
    pub fn close(reason: impl Into<String>) -> Self {
        Error::Close(reason.into())
    }

    pub(crate) fn component_not_found(name: &str) -> Self {
        Error::NotFound {
            kind: Lookup::Component,
            name: name.to_string(),
        }
    }

    pub(crate) fn view_not_found(name: &str) -> Self {
        Error::NotFound {
            kind: Lookup::View,
            name: name.to_string(),
        }
    }

    /// True for `NotFound` errors of any kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
