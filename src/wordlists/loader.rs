//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordList;
use crate::core::GameError;
use std::fs;
use std::path::Path;

/// Load words from a file, one word per line
///
/// # Errors
///
/// Returns `GameError::Unreadable` if the file cannot be read, and the
/// errors of [`parse_word_list`] for bad contents.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, GameError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content)?;
    log::info!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Parse newline-delimited words
///
/// Line endings are stripped and nothing else: blank lines are not skipped,
/// so a blank line in the middle of the text is rejected as an empty word.
///
/// # Errors
///
/// Returns `GameError::EmptyWordList` for text without any line and
/// `GameError::InvalidEntry` for the first empty or non-ASCII line.
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("sheep\nhoney\n").unwrap();
/// assert_eq!(words.as_slice(), ["sheep", "honey"]);
///
/// assert!(parse_word_list("sheep\n\nhoney\n").is_err());
/// ```
pub fn parse_word_list(content: &str) -> Result<WordList, GameError> {
    WordList::new(content.lines().map(str::to_string).collect())
}

/// Convert embedded string slice to a word list
///
/// # Errors
///
/// Same as [`WordList::new`].
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::BUILTIN;
///
/// let words = words_from_slice(BUILTIN).unwrap();
/// assert_eq!(words.len(), BUILTIN.len());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<WordList, GameError> {
    WordList::new(slice.iter().map(ToString::to_string).collect())
}
