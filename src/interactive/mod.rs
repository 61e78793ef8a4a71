//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Action, App, InputMode, dispatch, run_tui};
pub use rendering::{tui_color, ui};
