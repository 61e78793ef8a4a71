//! Word admissibility rules

use super::puzzle::{Puzzle, letter_bit};

/// Shortest word that can be a solution
pub const MIN_WORD_LEN: usize = 4;

/// Check whether a word is a solution for the puzzle
///
/// A word is admissible when it has at least four letters, contains the
/// center letter, and uses no letter outside the puzzle. Letters may repeat.
/// Comparison ignores case.
///
/// # Examples
/// ```
/// use spelling_bee::core::{is_admissible, validate};
///
/// let puzzle = validate("PLANETS").unwrap();
/// assert!(is_admissible("plant", &puzzle));
/// assert!(!is_admissible("pepper", &puzzle));
/// assert!(!is_admissible("lane", &puzzle));
/// ```
#[must_use]
pub fn is_admissible(word: &str, puzzle: &Puzzle) -> bool {
    if word.chars().count() < MIN_WORD_LEN {
        return false;
    }

    let allowed = puzzle.letter_mask();
    let Some(used) = word_mask(word) else {
        return false;
    };

    used & letter_bit(puzzle.letters()[0]) != 0 && used & !allowed == 0
}

/// Set of letters used by a word, or `None` if it has a non-letter
pub(crate) fn word_mask(word: &str) -> Option<u32> {
    word.chars().try_fold(0u32, |mask, c| {
        c.is_ascii_alphabetic().then(|| mask | letter_bit(c as u8))
    })
}
