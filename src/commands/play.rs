//! Interactive play mode
//!
//! Line-based read/print loop around the round engine. Rounds are played
//! back to back until the player declines another one or input runs out.

use crate::core::{GameError, Round, RoundState};
use crate::output::{clear_screen, print_board, print_outcome};
use crate::wordlists::WordList;
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Line printed before every round
pub const WELCOME: &str = "A very simple hangman game.";

/// Prompt shown before reading a guess
pub const GUESS_PROMPT: &str = "Give a character: ";

/// Question asked after each round; only the exact answer `yes` continues
pub const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? (yes/no)";

/// Terminal options for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    /// Clear the screen when a round starts
    pub clear_screen: bool,
    /// Colorize the end-of-round banner
    pub colored: bool,
}

impl PlayConfig {
    /// No screen clearing and no colors, for piped output
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            clear_screen: false,
            colored: false,
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            colored: true,
        }
    }
}

/// Rounds played during one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

impl SessionSummary {
    fn record(&mut self, state: RoundState) {
        self.rounds_played += 1;
        if state == RoundState::Won {
            self.rounds_won += 1;
        }
    }
}

/// Play rounds until the player stops
///
/// Each round picks a fresh word from `words` using `rng`. After a round the
/// player is asked whether to play again; anything but `yes` ends the
/// session, as does end of input at any prompt.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R, W, G>(
    words: &WordList,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
    config: PlayConfig,
) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut summary = SessionSummary::default();

    loop {
        let mut round = Round::start(words.as_slice(), rng)?;

        let Some(state) = play_round(&mut round, input, out, config)? else {
            log::debug!("input closed during a round");
            break;
        };
        summary.record(state);

        writeln!(out, "\n\n{PLAY_AGAIN_PROMPT}")?;
        out.flush()?;

        if read_line(input)?.as_deref() != Some("yes") {
            break;
        }
    }

    log::info!(
        "session over: won {} of {} rounds",
        summary.rounds_won,
        summary.rounds_played
    );

    Ok(summary)
}

/// Play a single round to completion
///
/// Returns the final state, or `None` if input ended before the round did.
/// An empty guess line is answered with a reminder and costs nothing.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_round<R: BufRead, W: Write>(
    round: &mut Round,
    input: &mut R,
    out: &mut W,
    config: PlayConfig,
) -> Result<Option<RoundState>> {
    if config.clear_screen {
        clear_screen(out)?;
    }
    writeln!(out, "{WELCOME}")?;

    loop {
        print_board(out, round)?;
        write!(out, "{GUESS_PROMPT}")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match round.apply_guess(&line) {
            Ok(_) => {}
            Err(GameError::EmptyGuess) => {
                writeln!(out, "Please give a character.\n")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        }
        writeln!(out)?;

        let state = round.status();
        if state.is_over() {
            print_board(out, round)?;
            print_outcome(out, round, config.colored)?;
            log::debug!("round finished: {state:?}");
            return Ok(Some(state));
        }
    }
}

/// Read one line without its line ending; `None` at end of input
///
/// Bytes that are not valid UTF-8 become U+FFFD, which never matches a
/// secret word, so such a guess is a plain miss.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }

    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&line).into_owned()))
}
