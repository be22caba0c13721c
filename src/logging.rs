//! Logger setup
//!
//! Logs go to stderr through `env_logger` so they never mix with the game on
//! stdout. `RUST_LOG` takes precedence over the verbosity flag.

use log::LevelFilter;

/// Map the number of `-v` flags to a level filter
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// Calling this more than once keeps the first logger.
pub fn init(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .try_init()
        .unwrap_or(());
}
