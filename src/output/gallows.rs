//! ASCII-art gallows
//!
//! One drawing per number of lives left, from an empty gallows to the
//! complete figure.

/// Gallows drawings indexed by lives left
const GALLOWS: [&str; 7] = [
    // 0 lives
    " ------\n |    |\n\\O/   |\n |    |\n/ \\   |\n      |\n--------\n",
    // 1 life
    " ------\n |    |\n\\O/   |\n |    |\n/     |\n      |\n--------\n",
    // 2 lives
    " ------\n |    |\n\\O/   |\n |    |\n      |\n      |\n--------\n",
    // 3 lives
    " ------\n |    |\n\\O    |\n |    |\n      |\n      |\n--------\n",
    // 4 lives
    " ------\n |    |\n O    |\n |    |\n      |\n      |\n--------\n",
    // 5 lives
    " ------\n |    |\n O    |\n      |\n      |\n      |\n--------\n",
    // 6 lives
    " ------\n |    |\n      |\n      |\n      |\n      |\n--------\n",
];

/// The drawing for the given number of lives
///
/// Values above the starting lives draw the empty gallows.
#[must_use]
pub fn gallows(lives: u8) -> &'static str {
    GALLOWS[usize::from(lives).min(GALLOWS.len() - 1)]
}
