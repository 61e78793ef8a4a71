//! Spelling Bee puzzle representation
//!
//! A Puzzle stores seven distinct uppercase letters. Index 0 is the center
//! letter, which every solution must contain; indices 1-6 are the outer ring.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in a puzzle
pub const PUZZLE_SIZE: usize = 7;

/// A validated seven-letter puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Puzzle {
    letters: [u8; PUZZLE_SIZE],
}

/// Reasons a raw puzzle string is rejected, checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("Puzzle must contain exactly seven letters.")]
    InvalidLength(usize),
    #[error("Puzzle must contain only letters (A-Z).")]
    NonLetter,
    #[error("Puzzle must not contain duplicate letters.")]
    DuplicateLetter(char),
}

/// Validate a raw puzzle string
///
/// Rules are applied in order and the first failure wins: exactly seven
/// characters, only ASCII letters, no letter repeated. Input is
/// case-insensitive and normalized to uppercase.
///
/// # Errors
/// Returns the `PuzzleError` for the first rule the input breaks.
///
/// # Examples
/// ```
/// use spelling_bee::core::validate;
///
/// let puzzle = validate("planets").unwrap();
/// assert_eq!(puzzle.to_string(), "PLANETS");
/// assert_eq!(puzzle.center(), 'P');
///
/// assert!(validate("plane").is_err());
/// assert!(validate("pl4nets").is_err());
/// assert!(validate("planeta").is_err());
/// ```
pub fn validate(raw: &str) -> Result<Puzzle, PuzzleError> {
    let count = raw.chars().count();
    if count != PUZZLE_SIZE {
        return Err(PuzzleError::InvalidLength(count));
    }

    if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(PuzzleError::NonLetter);
    }

    // ASCII confirmed, so every char is one byte
    let mut letters = [0u8; PUZZLE_SIZE];
    let mut seen = 0u32;
    for (slot, byte) in letters.iter_mut().zip(raw.bytes()) {
        let upper = byte.to_ascii_uppercase();
        let bit = letter_bit(upper);
        if seen & bit != 0 {
            return Err(PuzzleError::DuplicateLetter(char::from(upper)));
        }
        seen |= bit;
        *slot = upper;
    }

    Ok(Puzzle { letters })
}

/// Bit for an ASCII letter in a 26-bit set, case-insensitive
#[inline]
pub(crate) const fn letter_bit(letter: u8) -> u32 {
    1 << (letter.to_ascii_uppercase() - b'A')
}

impl Puzzle {
    /// The mandatory center letter, uppercase
    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.letters[0] as char
    }

    /// The six outer letters in display order
    #[inline]
    #[must_use]
    pub fn outer(&self) -> &[u8] {
        &self.letters[1..]
    }

    /// All seven letters, center first
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; PUZZLE_SIZE] {
        &self.letters
    }

    /// Set of the puzzle's letters as a 26-bit mask (bit 0 = 'A')
    #[must_use]
    pub fn letter_mask(&self) -> u32 {
        self.letters.iter().fold(0, |mask, &l| mask | letter_bit(l))
    }

    /// Check whether a letter belongs to the puzzle, ignoring case
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        letter.is_ascii_alphabetic() && self.letter_mask() & letter_bit(letter as u8) != 0
    }

    /// Same center, outer ring in a uniformly random order
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut letters = self.letters;
        letters[1..].shuffle(rng);
        Self { letters }
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
