//! Word lists for hangman
//!
//! A validated `WordList` is built once at startup, either from a file or
//! from the embedded list, and never changes afterwards.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN, BUILTIN_COUNT};

use crate::core::{GameError, SecretWord};

/// Non-empty list of candidate secret words
///
/// Every entry is non-empty ASCII, so any pick can start a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Validate and wrap a list of words
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty, or
    /// `GameError::InvalidEntry` with the 1-based position of the first bad
    /// entry.
    pub fn new(words: Vec<String>) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }

        for (i, word) in words.iter().enumerate() {
            SecretWord::new(word.as_str())
                .map_err(|source| GameError::InvalidEntry { line: i + 1, source })?;
        }

        Ok(Self { words })
    }

    /// The words in file order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Number of words, at least one
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: empty lists are rejected on construction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    #[test]
    fn builtin_count_matches_const() {
        assert_eq!(BUILTIN.len(), BUILTIN_COUNT);
    }

    #[test]
    fn builtin_words_are_lowercase_ascii() {
        for &word in BUILTIN {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = BUILTIN.iter().collect();
        assert_eq!(unique.len(), BUILTIN.len());
    }

    #[test]
    fn expected_builtin_count() {
        assert_eq!(BUILTIN_COUNT, 24, "Expected 24 built-in words");
    }

    #[test]
    fn word_list_rejects_empty() {
        assert!(matches!(
            WordList::new(Vec::new()),
            Err(GameError::EmptyWordList)
        ));
    }

    #[test]
    fn word_list_reports_bad_entry_position() {
        let words = vec!["soda".to_string(), "naïve".to_string()];

        assert!(matches!(
            WordList::new(words),
            Err(GameError::InvalidEntry {
                line: 2,
                source: WordError::NonAscii
            })
        ));
    }

    #[test]
    fn word_list_keeps_order() {
        let list = WordList::new(vec!["keen".to_string(), "fry".to_string()]).unwrap();
        assert_eq!(list.as_slice(), ["keen", "fry"]);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
    }
}
