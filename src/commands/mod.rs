//! Command implementations

pub mod play;

pub use play::{PlayConfig, SessionSummary, play_round, run_session};
