//! Core game types for hangman
//!
//! The round engine: secret word, revealed letters, lives and win/loss
//! detection. No terminal I/O happens here.

mod error;
mod round;
mod secret;

pub use error::{GameError, WordError};
pub use round::{GuessOutcome, PLACEHOLDER, Round, RoundState, STARTING_LIVES};
pub use secret::SecretWord;
