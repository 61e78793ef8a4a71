//! Spelling Bee
//!
//! Find words made from seven letters, one of which (the center) is mandatory.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::{is_admissible, score, validate};
//!
//! let puzzle = validate("planets").unwrap();
//! assert!(is_admissible("plant", &puzzle));
//! assert_eq!(score("planets", &puzzle), 14);
//! ```

// Core domain types
pub mod core;

// Session state and game controller
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
