//! Secret word representation
//!
//! A `SecretWord` stores the chosen word along with letter position indices so
//! a correct guess can be revealed everywhere in one lookup.

use super::error::WordError;
use rustc_hash::FxHashMap;
use std::fmt;

/// The word the player is trying to guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

impl SecretWord {
    /// Create a new secret word
    ///
    /// Case is preserved: guesses are matched byte for byte.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains non-ASCII characters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("sheep").unwrap();
    /// assert_eq!(word.positions_of(b'e'), &[2, 3]);
    ///
    /// assert!(SecretWord::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in text.as_bytes().iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected on construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_creation_valid() {
        let word = SecretWord::new("rustic").unwrap();
        assert_eq!(word.text(), "rustic");
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
    }

    #[test]
    fn secret_preserves_case() {
        let word = SecretWord::new("Keen").unwrap();
        assert_eq!(word.text(), "Keen");
        assert!(word.has_letter(b'K'));
        assert!(!word.has_letter(b'k'));
    }

    #[test]
    fn secret_rejects_empty() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
    }

    #[test]
    fn secret_rejects_non_ascii() {
        assert_eq!(SecretWord::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn secret_positions_of_duplicates() {
        let word = SecretWord::new("guarantee").unwrap();
        assert_eq!(word.positions_of(b'a'), &[2, 4]);
        assert_eq!(word.positions_of(b'e'), &[7, 8]);
        assert_eq!(word.positions_of(b'g'), &[0]);
        assert_eq!(word.positions_of(b'z'), &[]);
    }

    #[test]
    fn secret_display() {
        let word = SecretWord::new("soda").unwrap();
        assert_eq!(format!("{word}"), "soda");
    }
}
