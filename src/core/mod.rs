//! Core domain types for Spelling Bee
//!
//! Puzzle validation, word admissibility and scoring. Everything here is pure:
//! no I/O, no session state.

mod judge;
mod puzzle;
mod score;

pub use judge::{MIN_WORD_LEN, is_admissible};
pub use puzzle::{PUZZLE_SIZE, Puzzle, PuzzleError, validate};
pub use score::{PANGRAM_BONUS, is_pangram, score};
