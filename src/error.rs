//! Error taxonomy for font selection and glyph building.
//!
//! Attribute commands report `Range` and leave state untouched; id lookups
//! report `NotFound` without disturbing the previously selected font;
//! `Configuration` is reserved for startup failures that end the session.

use std::fmt;

use crate::path::PathError;

/// Errors produced by the font subsystem.
#[derive(Debug, Clone, PartialEq)]
pub enum FontError {
    /// A command parameter is outside the protocol-defined bounds.
    Range(&'static str),
    /// No font with the requested numeric id exists in any collection.
    NotFound(u32),
    /// The command is recognized but deliberately not implemented.
    Unimplemented(&'static str),
    /// No usable font source: the session cannot start.
    Configuration(String),
    /// The stick/arc renderer only works with an identity font matrix.
    UnsupportedTransform,
    /// An external font collection failed while being queried.
    Collection(String),
    /// The path sink rejected a segment; the glyph was abandoned.
    Path(PathError),
}

impl FontError {
    /// Whether the error must end the interpreter session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Collection(_))
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(what) => write!(f, "{what} out of range"),
            Self::NotFound(id) => write!(f, "no font with id {id}"),
            Self::Unimplemented(what) => write!(f, "{what} is not implemented"),
            Self::Configuration(msg) => write!(f, "font configuration error: {msg}"),
            Self::UnsupportedTransform => {
                write!(f, "stick and arc fonts require an identity font matrix")
            }
            Self::Collection(msg) => write!(f, "font collection error: {msg}"),
            Self::Path(e) => write!(f, "path construction failed: {e}"),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Path(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PathError> for FontError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}
