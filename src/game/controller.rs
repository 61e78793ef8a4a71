//! Game controller: turns user actions into session changes and feedback

use super::presenter::{Color, Field, Presenter};
use super::session::{Credit, Session};
use crate::core::{Puzzle, is_admissible, validate};
use crate::output::formatters::word_entry;
use crate::wordlists::{Dictionary, DictionarySource};
use rand::Rng;
use tracing::{debug, info, warn};

const NO_PUZZLE: &str = "Please enter a valid 7-letter puzzle first!";

/// Why a single word was not credited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AlreadyFound,
    NotInDictionary,
    BreaksRules,
}

impl Rejection {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AlreadyFound => "You already found this word!",
            Self::NotInDictionary => "Word not in dictionary!",
            Self::BreaksRules => "Word does not follow puzzle rules!",
        }
    }
}

/// Outcome of checking a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NoPuzzle,
    Rejected(Rejection),
    Credited(Credit),
}

/// Drives a game session through a `Presenter`
///
/// One handler runs at a time; each reports its outcome through the
/// presenter and never fails.
pub struct GameController<P, D, R> {
    presenter: P,
    dictionary: D,
    rng: R,
    session: Session,
}

impl<P: Presenter, D: DictionarySource, R: Rng> GameController<P, D, R> {
    pub fn new(presenter: P, dictionary: D, rng: R) -> Self {
        Self {
            presenter,
            dictionary,
            rng,
            session: Session::new(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Submit whatever is in the puzzle field
    pub fn puzzle_entered(&mut self) -> bool {
        let raw = self.presenter.read_text_field(Field::Puzzle);
        self.submit_puzzle(&raw)
    }

    /// Check whatever is in the word field
    pub fn word_entered(&mut self) -> Verdict {
        let raw = self.presenter.read_text_field(Field::Word);
        self.check_word(&raw)
    }

    /// Validate and install a new puzzle
    ///
    /// On success the session restarts and the letters are displayed. On
    /// failure nothing changes. Returns whether the puzzle was accepted.
    pub fn submit_puzzle(&mut self, raw: &str) -> bool {
        match validate(raw) {
            Ok(puzzle) => {
                info!(%puzzle, "new puzzle");
                self.session.reset_for_new_puzzle(puzzle);
                self.presenter.display_letters(&puzzle);
                self.presenter.clear_word_display();
                self.presenter.show_message(&format!("Puzzle updated: {puzzle}"), Color::Green);
                true
            }
            Err(err) => {
                debug!(input = raw, %err, "puzzle rejected");
                self.presenter.show_message(&format!("Invalid puzzle: {err}"), Color::Red);
                false
            }
        }
    }

    /// Credit every admissible dictionary word
    ///
    /// Score, found words and the hint pool are rebuilt from scratch. Returns
    /// the number of words found.
    pub fn solve_all(&mut self) -> usize {
        let Some(puzzle) = self.current_puzzle() else {
            return 0;
        };

        self.presenter.clear_word_display();
        self.session.restart_solve();

        let dictionary = self.load_dictionary();
        let mut solutions: Vec<&str> = dictionary
            .iter()
            .filter(|word| is_admissible(word, &puzzle))
            .collect();
        solutions.sort_unstable();

        for word in &solutions {
            self.credit(word, &puzzle);
            self.session.record_valid_word(word);
        }

        let count = self.session.found_count();
        info!(%puzzle, count, score = self.session.score(), "solved puzzle");
        if count == 0 {
            self.presenter.show_message("No valid words found!", Color::Red);
        } else {
            self.presenter.show_message(
                &format!(
                    "Found {count} words! Total Score: {}",
                    self.session.score()
                ),
                Color::Green,
            );
        }
        count
    }

    /// Judge one word typed by the player
    pub fn check_word(&mut self, raw: &str) -> Verdict {
        let Some(puzzle) = self.current_puzzle() else {
            return Verdict::NoPuzzle;
        };

        let word = raw.trim().to_lowercase();
        let dictionary = self.load_dictionary();

        let rejection = if self.session.is_found(&word) {
            Some(Rejection::AlreadyFound)
        } else if !dictionary.contains(&word) {
            Some(Rejection::NotInDictionary)
        } else if !is_admissible(&word, &puzzle) {
            Some(Rejection::BreaksRules)
        } else {
            None
        };

        if let Some(rejection) = rejection {
            debug!(word = %word, ?rejection, "word rejected");
            self.presenter.show_message(rejection.message(), Color::Red);
            return Verdict::Rejected(rejection);
        }

        let credit = self.credit(&word, &puzzle);
        debug!(word = %word, points = credit.points, "word credited");
        self.presenter.show_message(
            &format!("Correct! Score: {}", self.session.score()),
            Color::Green,
        );
        Verdict::Credited(credit)
    }

    /// Reorder the outer letters, keeping the center and all progress
    pub fn shuffle(&mut self) -> bool {
        let Some(puzzle) = self.current_puzzle() else {
            return false;
        };

        let shuffled = puzzle.shuffled(&mut self.rng);
        debug!(from = %puzzle, to = %shuffled, "shuffled");
        self.session.rearrange(shuffled);
        self.presenter.display_letters(&shuffled);
        self.presenter.show_message("Beehive letters shuffled!", Color::Blue);
        true
    }

    /// Show a random word from the last full solve
    pub fn hint(&mut self) -> Option<String> {
        let Some(word) = self
            .session
            .draw_hint(&mut self.rng)
            .map(ToString::to_string)
        else {
            self.presenter.show_message("Solve the puzzle first to get hints!", Color::Red);
            return None;
        };

        self.presenter.show_message(&format!("Hint: {word}"), Color::Purple);
        Some(word)
    }

    fn current_puzzle(&mut self) -> Option<Puzzle> {
        let puzzle = self.session.puzzle().copied();
        if puzzle.is_none() {
            self.presenter.show_message(NO_PUZZLE, Color::Red);
        }
        puzzle
    }

    fn credit(&mut self, word: &str, puzzle: &Puzzle) -> Credit {
        let credit = self.session.credit_word(word, puzzle);
        let color = if credit.pangram {
            Color::Blue
        } else {
            Color::Black
        };
        self.presenter.append_word_display(&word_entry(word, credit.points), color);
        credit
    }

    fn load_dictionary(&mut self) -> Dictionary {
        match self.dictionary.load() {
            Ok(dictionary) => dictionary,
            Err(err) => {
                warn!(%err, "continuing with an empty dictionary");
                self.presenter.show_message(&format!("Error: {err}"), Color::Red);
                Dictionary::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::presenter::recording::RecordingPresenter;
    use crate::wordlists::FileDictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    type TestController<D = Dictionary> = GameController<RecordingPresenter, D, StdRng>;

    fn controller(words: &[&str]) -> TestController {
        GameController::new(
            RecordingPresenter::default(),
            words.iter().copied().collect(),
            StdRng::seed_from_u64(17),
        )
    }

    fn planets_game() -> TestController {
        let mut game = controller(&[
            "plant", "plants", "plane", "planets", "lane", "pan", "pepper", "pleasant",
        ]);
        assert!(game.submit_puzzle("planets"));
        game
    }

    #[test]
    fn submit_valid_puzzle() {
        let mut game = controller(&[]);

        assert!(game.submit_puzzle("planets"));

        let presenter = game.presenter();
        assert_eq!(presenter.read_letters(), "PLANETS");
        assert_eq!(
            presenter.last_message(),
            ("Puzzle updated: PLANETS", Color::Green)
        );
        assert_eq!(game.session().puzzle().unwrap().center(), 'P');
    }

    #[test]
    fn submit_invalid_puzzle_keeps_state() {
        let mut game = planets_game();
        game.check_word("plant");

        assert!(!game.submit_puzzle("plane"));
        assert_eq!(
            game.presenter().last_message(),
            (
                "Invalid puzzle: Puzzle must contain exactly seven letters.",
                Color::Red
            )
        );
        assert_eq!(game.presenter().read_letters(), "PLANETS");
        assert_eq!(game.session().score(), 5);

        assert!(!game.submit_puzzle("pl4nets"));
        assert!(game.presenter().last_message().0.contains("only letters (A-Z)"));

        assert!(!game.submit_puzzle("planeta"));
        assert!(game.presenter().last_message().0.contains("duplicate letters"));
    }

    #[test]
    fn submit_puzzle_is_not_trimmed() {
        let mut game = controller(&[]);

        assert!(!game.submit_puzzle(" PLANETS "));
        assert_eq!(
            game.presenter().last_message(),
            (
                "Invalid puzzle: Puzzle must contain exactly seven letters.",
                Color::Red
            )
        );
        assert!(game.session().puzzle().is_none());
        assert_eq!(game.presenter().read_letters(), "");
    }

    #[test]
    fn new_puzzle_resets_session() {
        let mut game = planets_game();
        game.solve_all();
        assert!(game.session().score() > 0);

        assert!(game.submit_puzzle("bearing"));
        assert_eq!(game.session().score(), 0);
        assert_eq!(game.session().found_count(), 0);
        assert!(game.session().valid_words().is_empty());
        assert!(game.presenter().words.is_empty());
    }

    #[test]
    fn actions_need_a_puzzle() {
        let mut game = controller(&["plant"]);

        assert_eq!(game.solve_all(), 0);
        assert_eq!(game.presenter().last_message(), (NO_PUZZLE, Color::Red));

        assert_eq!(game.check_word("plant"), Verdict::NoPuzzle);
        assert_eq!(game.presenter().last_message(), (NO_PUZZLE, Color::Red));

        assert!(!game.shuffle());
        assert_eq!(game.presenter().last_message(), (NO_PUZZLE, Color::Red));
        assert_eq!(game.presenter().read_letters(), "");
    }

    #[test]
    fn solve_all_planets_scenario() {
        let mut game = controller(&["plant", "plants", "plane"]);
        game.submit_puzzle("PLANETS");

        assert_eq!(game.solve_all(), 3);
        assert_eq!(game.session().score(), 16);
        assert_eq!(
            game.presenter().last_message(),
            ("Found 3 words! Total Score: 16", Color::Green)
        );
        assert_eq!(
            game.presenter().words,
            vec![
                ("plane (+5)".to_string(), Color::Black),
                ("plant (+5)".to_string(), Color::Black),
                ("plants (+6)".to_string(), Color::Black),
            ]
        );
    }

    #[test]
    fn solve_all_marks_pangrams_blue() {
        let mut game = planets_game();
        game.solve_all();

        let words = &game.presenter().words;
        assert!(words.contains(&("planets (+14)".to_string(), Color::Blue)));
        assert!(words.contains(&("pleasant (+15)".to_string(), Color::Blue)));
        assert!(words.contains(&("plant (+5)".to_string(), Color::Black)));
        // Missing center, too short, foreign letter
        assert!(!words.iter().any(|(w, _)| w.starts_with("lane")));
        assert!(!words.iter().any(|(w, _)| w.starts_with("pan ")));
        assert!(!words.iter().any(|(w, _)| w.starts_with("pepper")));
    }

    #[test]
    fn solve_all_twice_does_not_accumulate() {
        let mut game = planets_game();

        let first = game.solve_all();
        let score = game.session().score();
        let second = game.solve_all();

        assert_eq!(first, second);
        assert_eq!(game.session().score(), score);
        assert_eq!(game.presenter().words.len(), first);
        assert_eq!(game.session().valid_words().len(), first);
    }

    #[test]
    fn solve_all_discards_manual_progress() {
        let mut game = planets_game();
        game.check_word("plant");
        game.check_word("plane");

        game.solve_all();
        // 5 + 5 + 6 + 14 + 15
        assert_eq!(game.session().score(), 45);
    }

    #[test]
    fn solve_all_with_nothing_admissible() {
        let mut game = controller(&["xylophone", "lane"]);
        game.submit_puzzle("planets");

        assert_eq!(game.solve_all(), 0);
        assert_eq!(
            game.presenter().last_message(),
            ("No valid words found!", Color::Red)
        );
    }

    #[test]
    fn check_word_credits_once() {
        let mut game = planets_game();

        let verdict = game.check_word("plant");
        assert_eq!(
            verdict,
            Verdict::Credited(Credit {
                points: 5,
                pangram: false
            })
        );
        assert_eq!(
            game.presenter().last_message(),
            ("Correct! Score: 5", Color::Green)
        );

        let verdict = game.check_word("plant");
        assert_eq!(verdict, Verdict::Rejected(Rejection::AlreadyFound));
        assert_eq!(
            game.presenter().last_message(),
            ("You already found this word!", Color::Red)
        );
        assert_eq!(game.session().score(), 5);
        assert_eq!(game.presenter().words.len(), 1);
    }

    #[test]
    fn check_word_normalizes_input() {
        let mut game = planets_game();
        assert!(matches!(
            game.check_word("  PLANT \n"),
            Verdict::Credited(_)
        ));
        assert!(game.session().is_found("plant"));
    }

    #[test]
    fn check_word_rejections_in_order() {
        let mut game = planets_game();

        assert_eq!(
            game.check_word("tens"),
            Verdict::Rejected(Rejection::NotInDictionary)
        );
        assert_eq!(
            game.presenter().last_message(),
            ("Word not in dictionary!", Color::Red)
        );

        assert_eq!(
            game.check_word("lane"),
            Verdict::Rejected(Rejection::BreaksRules)
        );
        assert_eq!(
            game.check_word("pepper"),
            Verdict::Rejected(Rejection::BreaksRules)
        );
        assert_eq!(
            game.presenter().last_message(),
            ("Word does not follow puzzle rules!", Color::Red)
        );
        assert_eq!(game.session().score(), 0);
    }

    #[test]
    fn check_word_after_solve_is_already_found() {
        let mut game = planets_game();
        game.solve_all();
        let score = game.session().score();

        assert_eq!(
            game.check_word("plants"),
            Verdict::Rejected(Rejection::AlreadyFound)
        );
        assert_eq!(game.session().score(), score);
    }

    #[test]
    fn pangram_check_scores_bonus() {
        let mut game = planets_game();
        assert_eq!(
            game.check_word("planets"),
            Verdict::Credited(Credit {
                points: 14,
                pangram: true
            })
        );
        assert_eq!(
            game.presenter().words.last().unwrap(),
            &("planets (+14)".to_string(), Color::Blue)
        );
    }

    #[test]
    fn shuffle_keeps_center_letters_and_progress() {
        let mut game = planets_game();
        game.solve_all();
        let score = game.session().score();
        let found = game.session().found_count();
        let pool = game.session().valid_words().to_vec();

        for _ in 0..10 {
            assert!(game.shuffle());

            let letters = game.presenter().read_letters();
            assert!(letters.starts_with('P'));
            let mut outer: Vec<char> = letters.chars().skip(1).collect();
            outer.sort_unstable();
            assert_eq!(outer, vec!['A', 'E', 'L', 'N', 'S', 'T']);

            assert_eq!(game.session().puzzle().unwrap().to_string(), letters);
            assert_eq!(game.session().score(), score);
            assert_eq!(game.session().found_count(), found);
            assert_eq!(game.session().valid_words(), pool.as_slice());
        }
        assert_eq!(
            game.presenter().last_message(),
            ("Beehive letters shuffled!", Color::Blue)
        );
    }

    #[test]
    fn shuffle_uses_session_puzzle_not_board() {
        let mut game = planets_game();
        game.presenter_mut().letters = "XYZ".to_string();

        assert!(game.shuffle());
        let letters = game.presenter().read_letters();
        assert!(letters.starts_with('P'));
        assert_eq!(letters.len(), 7);
    }

    #[test]
    fn hint_before_solve() {
        let mut game = planets_game();

        assert_eq!(game.hint(), None);
        assert_eq!(
            game.presenter().last_message(),
            ("Solve the puzzle first to get hints!", Color::Red)
        );
    }

    #[test]
    fn hint_draws_from_solutions_without_crediting() {
        let mut game = planets_game();
        game.solve_all();
        let score = game.session().score();

        let hint = game.hint().unwrap();
        assert!(game.session().valid_words().contains(&hint));
        assert_eq!(
            game.presenter().last_message(),
            (format!("Hint: {hint}").as_str(), Color::Purple)
        );
        assert_eq!(game.session().score(), score);
    }

    #[test]
    fn hint_pool_cleared_by_new_puzzle() {
        let mut game = planets_game();
        game.solve_all();
        game.submit_puzzle("bearing");

        assert_eq!(game.hint(), None);
    }

    #[test]
    fn seeded_games_repeat() {
        let run = || {
            let mut game = planets_game();
            game.solve_all();
            let shuffled = (0..3)
                .map(|_| {
                    game.shuffle();
                    game.presenter().read_letters()
                })
                .collect::<Vec<_>>();
            let hints = (0..3).map(|_| game.hint().unwrap()).collect::<Vec<_>>();
            (shuffled, hints)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn field_entry_points_read_presenter() {
        let mut game = controller(&["plant"]);
        game.presenter_mut().puzzle_field = "planets".to_string();
        game.presenter_mut().word_field = "Plant".to_string();

        assert!(game.puzzle_entered());
        assert!(matches!(game.word_entered(), Verdict::Credited(_)));
        assert_eq!(game.session().score(), 5);
    }

    #[test]
    fn missing_dictionary_degrades_gracefully() {
        let dir = tempfile::tempdir().unwrap();
        let mut game: TestController<FileDictionary> = GameController::new(
            RecordingPresenter::default(),
            FileDictionary::new(dir.path().join("missing.txt")),
            StdRng::seed_from_u64(1),
        );
        game.submit_puzzle("planets");

        assert_eq!(game.solve_all(), 0);
        let messages = &game.presenter().messages;
        let error = &messages[messages.len() - 2];
        assert!(error.0.starts_with("Error: Dictionary file not found"));
        assert_eq!(error.1, Color::Red);
        assert_eq!(
            game.presenter().last_message(),
            ("No valid words found!", Color::Red)
        );

        assert_eq!(
            game.check_word("plant"),
            Verdict::Rejected(Rejection::NotInDictionary)
        );
    }
}
