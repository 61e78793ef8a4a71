//! Puzzle solving command
//!
//! Lists every admissible dictionary word for a puzzle with its score.

use crate::core::{Puzzle, PuzzleError, is_admissible, is_pangram, score, validate};
use crate::wordlists::{DictionaryError, DictionarySource};
use thiserror::Error;

/// Why a one-shot solve could not run
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("Invalid puzzle: {0}")]
    Puzzle(#[from] PuzzleError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub puzzle: Puzzle,
    pub words: Vec<ScoredWord>,
    pub total_score: u32,
}

/// A single solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub points: u32,
    pub pangram: bool,
}

impl SolveResult {
    /// Solutions that use all seven letters
    pub fn pangrams(&self) -> impl Iterator<Item = &ScoredWord> {
        self.words.iter().filter(|w| w.pangram)
    }
}

/// Solve a puzzle against a dictionary
///
/// Unlike the interactive game, a missing dictionary is an error here.
///
/// # Errors
///
/// Returns an error if:
/// - The puzzle is not seven distinct letters
/// - The dictionary cannot be loaded
pub fn solve_puzzle<D: DictionarySource>(
    letters: &str,
    dictionary: &D,
) -> Result<SolveResult, SolveError> {
    let puzzle = validate(letters)?;
    let dictionary = dictionary.load()?;

    let mut words: Vec<ScoredWord> = dictionary
        .iter()
        .filter(|word| is_admissible(word, &puzzle))
        .map(|word| ScoredWord {
            word: word.to_string(),
            points: score(word, &puzzle),
            pangram: is_pangram(word, &puzzle),
        })
        .collect();
    words.sort_unstable_by(|a, b| a.word.cmp(&b.word));

    let total_score = words.iter().map(|w| w.points).sum();

    Ok(SolveResult {
        puzzle,
        words,
        total_score,
    })
}
