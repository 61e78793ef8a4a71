//! TUI application state and logic

use crate::core::{PUZZLE_SIZE, Puzzle};
use crate::game::{Color, Field, GameController, Presenter};
use crate::wordlists::DictionarySource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest word the word field accepts
const MAX_WORD_INPUT: usize = 24;

/// Application state shown on screen
///
/// This is the `Presenter` the game controller drives; key handling only
/// edits the text fields and dispatches actions.
pub struct App {
    pub letters: String,
    pub message: Option<Message>,
    pub words: Vec<WordEntry>,
    pub puzzle_input: String,
    pub word_input: String,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Puzzle,
    Word,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct WordEntry {
    pub text: String,
    pub color: Color,
}

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SubmitPuzzle,
    CheckWord,
    Solve,
    Shuffle,
    Hint,
    Quit,
    None,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            letters: String::new(),
            message: Some(Message {
                text: "Welcome! Type seven letters (center first) and press Enter.".to_string(),
                color: Color::Black,
            }),
            words: Vec::new(),
            puzzle_input: String::new(),
            word_input: String::new(),
            input_mode: InputMode::Puzzle,
            should_quit: false,
        }
    }

    /// Apply a key press to the input fields and say what to run
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'q') => Action::Quit,
                KeyCode::Char('s') => Action::Solve,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_mode();
                Action::None
            }
            KeyCode::Char(' ') => Action::Shuffle,
            KeyCode::Char('?') => Action::Hint,
            KeyCode::Char(c) if c.is_alphabetic() => {
                let limit = match self.input_mode {
                    InputMode::Puzzle => PUZZLE_SIZE,
                    InputMode::Word => MAX_WORD_INPUT,
                };
                let input = self.active_input_mut();
                if input.chars().count() < limit {
                    input.push(c.to_ascii_uppercase());
                }
                Action::None
            }
            KeyCode::Backspace => {
                self.active_input_mut().pop();
                Action::None
            }
            KeyCode::Enter => match self.input_mode {
                InputMode::Puzzle => Action::SubmitPuzzle,
                InputMode::Word => Action::CheckWord,
            },
            _ => Action::None,
        }
    }

    fn toggle_mode(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Puzzle => InputMode::Word,
            InputMode::Word => InputMode::Puzzle,
        };
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.input_mode {
            InputMode::Puzzle => &mut self.puzzle_input,
            InputMode::Word => &mut self.word_input,
        }
    }
}

impl Presenter for App {
    fn display_letters(&mut self, puzzle: &Puzzle) {
        self.letters = puzzle.to_string();
    }

    fn read_letters(&self) -> String {
        self.letters.clone()
    }

    fn show_message(&mut self, text: &str, color: Color) {
        self.message = Some(Message {
            text: text.to_string(),
            color,
        });
    }

    fn clear_word_display(&mut self) {
        self.words.clear();
    }

    fn append_word_display(&mut self, text: &str, color: Color) {
        self.words.push(WordEntry {
            text: text.to_string(),
            color,
        });
    }

    fn read_text_field(&self, field: Field) -> String {
        match field {
            Field::Puzzle => self.puzzle_input.clone(),
            Field::Word => self.word_input.clone(),
        }
    }
}

/// Run one action against the game
pub fn dispatch<D: DictionarySource, R: Rng>(
    game: &mut GameController<App, D, R>,
    action: Action,
) {
    match action {
        Action::SubmitPuzzle => {
            if game.puzzle_entered() {
                let app = game.presenter_mut();
                app.puzzle_input.clear();
                app.input_mode = InputMode::Word;
            }
        }
        Action::CheckWord => {
            game.word_entered();
            game.presenter_mut().word_input.clear();
        }
        Action::Solve => {
            game.solve_all();
        }
        Action::Shuffle => {
            game.shuffle();
        }
        Action::Hint => {
            game.hint();
        }
        Action::Quit => game.presenter_mut().should_quit = true,
        Action::None => {}
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: DictionarySource, R: Rng>(game: GameController<App, D, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, game);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, D, R>(terminal: &mut Terminal<B>, mut game: GameController<App, D, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: DictionarySource,
    R: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &game))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let action = game.presenter_mut().handle_key(key);
            dispatch(&mut game, action);
        }

        if game.presenter().should_quit {
            break;
        }
    }

    Ok(())
}
