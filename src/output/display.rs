//! Display functions for the game board
//!
//! Everything is written to a caller-supplied writer so the same code serves
//! the terminal and tests.

use super::gallows::gallows;
use crate::core::{Round, RoundState};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Clear the terminal and move the cursor to the top-left corner
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Print remaining lives, the revealed word and the gallows
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn print_board<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(out, "Lives: {}", round.lives())?;
    writeln!(out, "{}\n", round.revealed())?;
    write!(out, "{}", gallows(round.lives()))
}

/// Print the end-of-round banner
///
/// Nothing is printed while the round is still in progress.
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn print_outcome<W: Write>(out: &mut W, round: &Round, colored: bool) -> io::Result<()> {
    match round.status() {
        RoundState::Won => {
            let banner = "You won!";
            if colored {
                writeln!(out, "{}", banner.green().bold())
            } else {
                writeln!(out, "{banner}")
            }
        }
        RoundState::Lost => {
            let banner = "You lost!";
            if colored {
                writeln!(out, "{}", banner.red().bold())?;
            } else {
                writeln!(out, "{banner}")?;
            }
            writeln!(out, "The correct word was: {}", round.secret())
        }
        RoundState::InProgress => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_shows_lives_word_and_gallows() {
        let mut round = Round::with_secret("soda").unwrap();
        round.apply_guess("o").unwrap();
        round.apply_guess("x").unwrap();

        let text = render(|out| print_board(out, &round));

        assert!(text.starts_with("Lives: 5\n_o__\n\n"));
        assert!(text.ends_with(gallows(5)));
    }

    #[test]
    fn won_banner() {
        let mut round = Round::with_secret("fry").unwrap();
        for guess in ["f", "r", "y"] {
            round.apply_guess(guess).unwrap();
        }

        let text = render(|out| print_outcome(out, &round, false));
        assert_eq!(text, "You won!\n");
    }

    #[test]
    fn lost_banner_reveals_word() {
        let mut round = Round::with_secret("fry").unwrap();
        for _ in 0..6 {
            round.apply_guess("z").unwrap();
        }

        let text = render(|out| print_outcome(out, &round, false));
        assert_eq!(text, "You lost!\nThe correct word was: fry\n");
    }

    #[test]
    fn in_progress_prints_nothing() {
        let round = Round::with_secret("fry").unwrap();

        let text = render(|out| print_outcome(out, &round, false));
        assert!(text.is_empty());
    }

    #[test]
    fn colored_banner_keeps_text() {
        let mut round = Round::with_secret("fry").unwrap();
        for _ in 0..6 {
            round.apply_guess("z").unwrap();
        }

        let text = render(|out| print_outcome(out, &round, true));
        assert!(text.contains("You lost!"));
        assert!(text.ends_with("The correct word was: fry\n"));
    }

    #[test]
    fn clear_screen_writes_escape_sequence() {
        let text = render(clear_screen::<Vec<u8>>);
        assert!(text.starts_with('\u{1b}'));
    }
}
