//! Hangman
//!
//! A very simple terminal hangman game: guess the secret word one character
//! at a time before the six lives run out.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GuessOutcome, Round, RoundState};
//!
//! let mut round = Round::with_secret("cat").unwrap();
//! assert_eq!(round.apply_guess("c").unwrap(), GuessOutcome::Hit);
//! assert_eq!(round.revealed(), "c__");
//!
//! round.apply_guess("a").unwrap();
//! round.apply_guess("t").unwrap();
//! assert_eq!(round.status(), RoundState::Won);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
