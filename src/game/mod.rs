//! Game session and controller
//!
//! `GameController` handles the player's actions (submit puzzle, solve all,
//! check word, shuffle, hint) against a `Session` and reports every outcome
//! through a `Presenter`.

mod controller;
mod presenter;
mod session;

pub use controller::{GameController, Rejection, Verdict};
pub use presenter::{Color, Field, Presenter};
pub use session::{Credit, Session};
