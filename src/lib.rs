// # Advent of Code 2022
//
// Shared puzzle logic lives here; each day under `src/bin/` is a thin
// shell that reads its input file, calls into the library, and prints
// the two answers. Nothing runs at load time, so every piece is
// testable on its own.

/// The three-hand cyclic dominance set.
pub mod hand;

/// Round outcomes and their fixed scores.
pub mod outcome;

/// The resolver: classify a pair of hands, or work backwards from a
/// wanted outcome to the hand that produces it.
pub mod duel;

/// Token tables and round-line parsing for the strategy guide input.
pub mod parse;

pub mod calories;
pub mod input;

pub use hand::Hand;
pub use outcome::Outcome;
