//! Hangman - CLI
//!
//! Plays hangman rounds on the terminal until the player stops.

use anyhow::{Context, Result};
use clap::Parser;
use hangman::{
    commands::{PlayConfig, run_session},
    logging,
    wordlists::{BUILTIN, WordList, loader},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal};

/// Word list file read when no other is given
const DEFAULT_WORDLIST: &str = "words.txt";

#[derive(Parser)]
#[command(name = "hangman", about = "A very simple hangman game", version)]
struct Cli {
    /// Word list: path to a file with one word per line, or 'builtin'
    #[arg(short = 'w', long, default_value = DEFAULT_WORDLIST)]
    wordlist: String,

    /// Seed for picking words (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Do not clear the screen when a round starts
    #[arg(long)]
    no_clear: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<WordList> {
    match wordlist {
        "builtin" => {
            let words = loader::words_from_slice(BUILTIN)?;
            log::info!("using {} built-in words", words.len());
            Ok(words)
        }
        path => loader::load_from_file(path).context("cannot start without a word list"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let words = load_wordlist(&cli.wordlist)?;

    let mut rng = match cli.seed {
        Some(seed) => {
            log::info!("using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let config = PlayConfig {
        clear_screen: !cli.no_clear,
        colored: !cli.no_color && io::stdout().is_terminal(),
    };

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    run_session(&words, &mut rng, &mut input, &mut out, config)?;

    Ok(())
}
