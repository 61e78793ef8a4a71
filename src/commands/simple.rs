//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::core::Puzzle;
use crate::game::{Color, Field, GameController, Presenter};
use crate::output::{print_honeycomb, print_message, print_word};
use crate::wordlists::DictionarySource;
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Prefix that marks a line as a command rather than a guess
pub const COMMAND_PREFIX: char = ':';

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Puzzle(String),
    Solve,
    Shuffle,
    Hint,
    Show,
    Help,
    Quit,
    Unknown(String),
    Word(String),
    Empty,
}

impl Command {
    /// Parse a line
    ///
    /// Commands start with `:`; every other line is a word guess, so words
    /// like "solve" or "quit" can still be checked.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line == "?" {
            return Self::Help;
        }
        let Some(command) = line.strip_prefix(COMMAND_PREFIX) else {
            return if line.is_empty() {
                Self::Empty
            } else {
                Self::Word(line.to_string())
            };
        };

        let (head, rest) = command
            .trim_start()
            .split_once(char::is_whitespace)
            .map_or((command.trim_start(), ""), |(h, r)| (h, r.trim()));

        match head.to_lowercase().as_str() {
            "puzzle" | "p" => Self::Puzzle(rest.to_string()),
            "solve" | "s" if rest.is_empty() => Self::Solve,
            "shuffle" | "x" if rest.is_empty() => Self::Shuffle,
            "hint" | "h" if rest.is_empty() => Self::Hint,
            "show" | "letters" if rest.is_empty() => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Presenter that prints straight to stdout
#[derive(Debug, Default)]
pub struct LinePresenter {
    letters: String,
    puzzle_field: String,
    word_field: String,
    shown_words: usize,
}

impl LinePresenter {
    /// Fill a text field before dispatching to the controller
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Puzzle => self.puzzle_field = value.to_string(),
            Field::Word => self.word_field = value.to_string(),
        }
    }

    #[must_use]
    pub const fn shown_words(&self) -> usize {
        self.shown_words
    }
}

impl Presenter for LinePresenter {
    fn display_letters(&mut self, puzzle: &Puzzle) {
        self.letters = puzzle.to_string();
        print_honeycomb(&self.letters);
    }

    fn read_letters(&self) -> String {
        self.letters.clone()
    }

    fn show_message(&mut self, text: &str, color: Color) {
        print_message(text, color);
    }

    fn clear_word_display(&mut self) {
        self.shown_words = 0;
    }

    fn append_word_display(&mut self, text: &str, color: Color) {
        self.shown_words += 1;
        print_word(text, color);
    }

    fn read_text_field(&self, field: Field) -> String {
        match field {
            Field::Puzzle => self.puzzle_field.clone(),
            Field::Word => self.word_field.clone(),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<D: DictionarySource, R: Rng>(dictionary: D, rng: R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Spelling Bee - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_help();

    let mut game = GameController::new(LinePresenter::default(), dictionary, rng);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}> ", game.presenter().read_letters());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };

        match Command::parse(&line?) {
            Command::Puzzle(letters) => {
                game.presenter_mut().set_field(Field::Puzzle, &letters);
                game.puzzle_entered();
            }
            Command::Solve => {
                game.solve_all();
            }
            Command::Shuffle => {
                game.shuffle();
            }
            Command::Hint => {
                game.hint();
            }
            Command::Show => {
                print_honeycomb(&game.presenter().read_letters());
                let session = game.session();
                println!(
                    "Score: {} | Found: {}",
                    session.score(),
                    session.found_words().join(", ")
                );
            }
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown(input) => {
                print_message(&format!("Unknown command: {input} (type :help)"), Color::Red);
            }
            Command::Word(word) => {
                game.presenter_mut().set_field(Field::Word, &word);
                game.word_entered();
            }
            Command::Empty => {}
        }
    }

    println!("\n👋 Thanks for playing! Final score: {}\n", game.session().score());
    Ok(())
}

fn print_help() {
    println!("Find words of four or more letters using the puzzle letters.");
    println!("Every word must contain the center letter; letters may repeat.\n");
    println!("  :puzzle <letters>  start a puzzle (center letter first)");
    println!("  :solve             list every solution");
    println!("  :shuffle           rearrange the outer letters");
    println!("  :hint              reveal a random solution (after solve)");
    println!("  :show              show letters, score and found words");
    println!("  :help              show this help");
    println!("  :quit              exit");
    println!("  <word>             check a word\n");
}
