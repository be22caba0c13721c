//! Terminal output formatting
//!
//! Board rendering, end-of-round banners and the gallows drawings.

pub mod display;
pub mod gallows;

pub use display::{clear_screen, print_board, print_outcome};
pub use gallows::gallows;
