//! Error types for the game engine and word source

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must contain only ASCII characters")]
    NonAscii,
}

/// Errors raised while loading words or playing a round
#[derive(Debug, Error)]
pub enum GameError {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("word list entry on line {line} is invalid: {source}")]
    InvalidEntry {
        line: usize,
        #[source]
        source: WordError,
    },

    #[error("failed to read word list '{}'", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid secret word: {0}")]
    InvalidSecret(#[from] WordError),

    #[error("no character given")]
    EmptyGuess,

    #[error("the round is already over")]
    RoundOver,
}

impl GameError {
    /// Whether this error comes from a bad word list and should abort the program
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::EmptyWordList
                | Self::InvalidEntry { .. }
                | Self::Unreadable { .. }
                | Self::InvalidSecret(_)
        )
    }
}
