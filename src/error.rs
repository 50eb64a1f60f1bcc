//! Error types.

use thiserror::Error;

use crate::game::InvariantViolation;

/// Errors raised by the engine and by face catalog providers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A face was requested from a catalog with no faces.
    #[error("face catalog is empty")]
    EmptyCatalog,

    /// A provider could not produce a catalog.
    #[error("face source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// A board handed to the engine has a different token count.
    #[error("board has {found} tokens, engine plays with {expected}")]
    BoardSizeMismatch { expected: usize, found: usize },

    /// A board handed to the engine is internally inconsistent.
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] InvariantViolation),
}

impl Error {
    /// Build a `SourceUnavailable` from anything displayable.
    pub fn source_unavailable(reason: impl std::fmt::Display) -> Self {
        Self::SourceUnavailable {
            reason: reason.to_string(),
        }
    }
}

#[cfg(feature = "pokeapi")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::source_unavailable(err)
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
