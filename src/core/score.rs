//! Word scoring
//!
//! Four-letter words earn 1 point, longer words earn one point per letter,
//! and a pangram earns a flat bonus on top.

use super::judge::{MIN_WORD_LEN, word_mask};
use super::puzzle::Puzzle;

/// Bonus for using every puzzle letter at least once
pub const PANGRAM_BONUS: u32 = 7;

/// Check whether a word uses exactly the puzzle's seven letters
///
/// The distinct letters of the word, case-folded, must equal the puzzle's
/// letter set.
#[must_use]
pub fn is_pangram(word: &str, puzzle: &Puzzle) -> bool {
    word_mask(word) == Some(puzzle.letter_mask())
}

/// Point value of a word
///
/// Meant for admissible words, for which it is always at least 1.
///
/// # Examples
/// ```
/// use spelling_bee::core::{score, validate};
///
/// let puzzle = validate("ABCDEFG").unwrap();
/// assert_eq!(score("abcd", &puzzle), 1);
/// assert_eq!(score("abcde", &puzzle), 5);
/// assert_eq!(score("abcdefg", &puzzle), 14);
/// ```
#[must_use]
pub fn score(word: &str, puzzle: &Puzzle) -> u32 {
    let len = word.chars().count();
    let base = if len == MIN_WORD_LEN { 1 } else { len as u32 };

    if is_pangram(word, puzzle) {
        base + PANGRAM_BONUS
    } else {
        base
    }
}
