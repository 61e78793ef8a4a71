//! Terminal output formatting
//!
//! Display utilities for line-mode results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_honeycomb, print_message, print_solve_result, print_word};
