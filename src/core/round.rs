//! Round state machine
//!
//! A `Round` tracks one playthrough: the secret word, what the player has
//! uncovered so far and how many lives remain.

use super::error::GameError;
use super::secret::SecretWord;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Lives the player starts every round with
pub const STARTING_LIVES: u8 = 6;

/// Character shown for letters that have not been guessed yet
pub const PLACEHOLDER: u8 = b'_';

/// Result of applying a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The character occurs in the secret word
    Hit,
    /// The character does not occur; one life was lost
    Miss,
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Lives remain and letters are still hidden
    InProgress,
    /// Every letter has been revealed
    Won,
    /// No lives left
    Lost,
}

impl RoundState {
    /// `Won` and `Lost` end the round
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One playthrough of hangman
#[derive(Debug, Clone)]
pub struct Round {
    secret: SecretWord,
    revealed: Vec<u8>,
    lives: u8,
}

impl Round {
    /// Start a round with a word picked uniformly at random from `words`
    ///
    /// Every entry is reachable: the pick covers the full index range.
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty, or
    /// `GameError::InvalidSecret` if the picked word is empty or non-ASCII.
    pub fn start<S, R>(words: &[S], rng: &mut R) -> Result<Self, GameError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let word = words.choose(rng).ok_or(GameError::EmptyWordList)?;
        let round = Self::with_secret(word.as_ref())?;

        log::debug!("round started with a {}-letter word", round.secret.len());
        log::trace!("secret word is {:?}", round.secret.text());

        Ok(round)
    }

    /// Start a round with a known secret word
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecret` if the word is empty or non-ASCII.
    pub fn with_secret(secret: &str) -> Result<Self, GameError> {
        let secret = SecretWord::new(secret)?;
        let revealed = vec![PLACEHOLDER; secret.len()];

        Ok(Self {
            secret,
            revealed,
            lives: STARTING_LIVES,
        })
    }

    /// Apply the player's guess
    ///
    /// Only the first character of `input` counts; the rest is ignored. A hit
    /// reveals every occurrence at once. A miss costs one life, even when the
    /// same wrong character was guessed before.
    ///
    /// # Errors
    /// Returns `GameError::EmptyGuess` for empty input and
    /// `GameError::RoundOver` once the round is won or lost. Neither changes
    /// the round.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessOutcome, Round};
    ///
    /// let mut round = Round::with_secret("sheep").unwrap();
    /// assert_eq!(round.apply_guess("e").unwrap(), GuessOutcome::Hit);
    /// assert_eq!(round.revealed(), "__ee_");
    /// assert_eq!(round.apply_guess("x").unwrap(), GuessOutcome::Miss);
    /// assert_eq!(round.lives(), 5);
    /// ```
    pub fn apply_guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        let guess = input.chars().next().ok_or(GameError::EmptyGuess)?;

        if self.status().is_over() {
            return Err(GameError::RoundOver);
        }

        let hit = u8::try_from(guess)
            .ok()
            .filter(|&letter| self.secret.has_letter(letter));

        let outcome = if let Some(letter) = hit {
            for &i in self.secret.positions_of(letter) {
                self.revealed[i] = letter;
            }
            GuessOutcome::Hit
        } else {
            self.lives -= 1;
            GuessOutcome::Miss
        };

        log::trace!("guess {guess:?}: {outcome:?}, {} lives left", self.lives);

        Ok(outcome)
    }

    /// Current state of the round
    ///
    /// Running out of lives is checked before a completed word.
    #[must_use]
    pub fn status(&self) -> RoundState {
        if self.lives == 0 {
            RoundState::Lost
        } else if self.revealed == self.secret.text().as_bytes() {
            RoundState::Won
        } else {
            RoundState::InProgress
        }
    }

    /// The word being guessed
    #[must_use]
    pub fn secret(&self) -> &str {
        self.secret.text()
    }

    /// The word as the player sees it, with placeholders for hidden letters
    #[must_use]
    pub fn revealed(&self) -> String {
        self.revealed.iter().map(|&b| char::from(b)).collect()
    }

    /// Lives left, from `STARTING_LIVES` down to 0
    #[must_use]
    pub const fn lives(&self) -> u8 {
        self.lives
    }
}
