//! Formatting utilities for terminal output

use crate::core::PUZZLE_SIZE;

/// Letter index at each cell of a 5-row, 3-column honeycomb grid
///
/// Index 0 is the center; 1-6 walk the outer ring counter-clockwise from the
/// upper right.
pub const HONEYCOMB: [[Option<usize>; 3]; 5] = [
    [None, Some(2), None],
    [Some(3), None, Some(1)],
    [None, Some(0), None],
    [Some(4), None, Some(6)],
    [None, Some(5), None],
];

/// Placeholder shown before a puzzle is entered
pub const EMPTY_CELL: char = '·';

/// Word list entry, e.g. `plant (+5)`
#[must_use]
pub fn word_entry(word: &str, points: u32) -> String {
    format!("{word} (+{points})")
}

/// Letter for a honeycomb cell, or the placeholder if no puzzle is shown
#[must_use]
pub fn cell_letter(letters: &str, index: usize) -> char {
    if letters.chars().count() == PUZZLE_SIZE {
        letters.chars().nth(index).unwrap_or(EMPTY_CELL)
    } else {
        EMPTY_CELL
    }
}

/// Honeycomb as plain text rows
#[must_use]
pub fn honeycomb_rows(letters: &str) -> Vec<String> {
    HONEYCOMB
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Some(index) => format!(" {} ", cell_letter(letters, *index)),
                    None => "   ".to_string(),
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}
