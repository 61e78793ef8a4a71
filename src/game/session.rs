//! Per-puzzle game state

use crate::core::{Puzzle, is_pangram, score};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Points awarded for a credited word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credit {
    pub points: u32,
    pub pangram: bool,
}

/// Current puzzle, found words, score and hint pool
#[derive(Debug, Default)]
pub struct Session {
    puzzle: Option<Puzzle>,
    found: FxHashSet<String>,
    score: u32,
    valid_words: Vec<String>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start over with a new puzzle
    ///
    /// Clears found words, score and the hint pool.
    pub fn reset_for_new_puzzle(&mut self, puzzle: Puzzle) {
        self.puzzle = Some(puzzle);
        self.found.clear();
        self.score = 0;
        self.valid_words.clear();
    }

    /// Replace the puzzle letters without touching progress
    ///
    /// Only valid for a rearrangement of the same letter set.
    pub fn rearrange(&mut self, puzzle: Puzzle) {
        debug_assert!(
            self.puzzle.is_none_or(|p| {
                p.letter_mask() == puzzle.letter_mask() && p.center() == puzzle.center()
            }),
            "rearrange must keep the same letters"
        );
        self.puzzle = Some(puzzle);
    }

    /// Zero the score and forget found words and hints before a full solve
    pub fn restart_solve(&mut self) {
        self.found.clear();
        self.score = 0;
        self.valid_words.clear();
    }

    /// Award a word and add it to the found set
    pub fn credit_word(&mut self, word: &str, puzzle: &Puzzle) -> Credit {
        let credit = Credit {
            points: score(word, puzzle),
            pangram: is_pangram(word, puzzle),
        };

        self.found.insert(word.to_string());
        self.score += credit.points;
        credit
    }

    /// Add a word to the hint pool
    pub fn record_valid_word(&mut self, word: &str) {
        self.valid_words.push(word.to_string());
    }

    /// Pick a uniformly random word from the hint pool
    pub fn draw_hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.valid_words.choose(rng).map(String::as_str)
    }

    #[must_use]
    pub const fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Found words, sorted
    #[must_use]
    pub fn found_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.found.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    #[must_use]
    pub fn valid_words(&self) -> &[String] {
        &self.valid_words
    }
}
