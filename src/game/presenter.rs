//! Display and input contract between the game and its front end

use crate::core::Puzzle;

/// Colors the game asks the front end to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Blue,
    Green,
    Red,
    Purple,
}

/// Named text inputs the front end exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Puzzle,
    Word,
}

impl Field {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Puzzle => "Puzzle",
            Self::Word => "Word",
        }
    }
}

/// Everything the game controller needs from a front end
///
/// Implementations own all rendering; the controller only calls these methods.
pub trait Presenter {
    /// Show the puzzle letters, center first
    fn display_letters(&mut self, puzzle: &Puzzle);

    /// Letters currently shown, uppercase, or empty before the first puzzle
    ///
    /// For front ends and tests only. The controller never reads the board
    /// back; the session's puzzle is authoritative.
    fn read_letters(&self) -> String;

    /// Replace the feedback line
    fn show_message(&mut self, text: &str, color: Color);

    /// Remove every entry from the word list
    fn clear_word_display(&mut self);

    /// Add an entry at the end of the word list
    fn append_word_display(&mut self, text: &str, color: Color);

    /// Current contents of a text input
    fn read_text_field(&self, field: Field) -> String;
}
