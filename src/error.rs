//! Error taxonomy for layout parsing and field-name lookup.

use core::fmt;
use thiserror::Error as ThisError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ErrorKind {
    /// The input string does not match the pattern built from the layout.
    #[error("input does not match the layout")]
    NoMatch,
    /// The layout's literal text broke the pattern: it either fails
    /// to compile or registers capture groups of its own.
    #[error("layout does not produce a usable pattern")]
    BadLayout,
    /// A field name outside the recognised vocabulary.
    #[error("unknown calendar field")]
    UnknownField,
}

/// Error type pairing a category with the offending text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} ({})", self.kind, self.context)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
