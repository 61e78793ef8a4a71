//! Command implementations

pub mod simple;
pub mod solve;

pub use simple::{LinePresenter, run_simple};
pub use solve::{ScoredWord, SolveError, SolveResult, solve_puzzle};
