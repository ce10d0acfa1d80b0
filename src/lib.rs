//! Wordle CLI
//!
//! Wordle in the terminal: the board is redrawn in place, cells flip one at a time
//! and an on-screen keyboard remembers the best feedback each letter has had.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cli::core::{Classification, Feedback, KeyboardState};
//!
//! let feedback = Feedback::calculate(b"CRANE", b"SLATE");
//! assert_eq!(feedback[2], Classification::Correct);
//!
//! let mut keyboard = KeyboardState::new();
//! keyboard.record(b"CRANE", &feedback);
//! assert_eq!(keyboard.get(b'E'), Some(Classification::Correct));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Timing configuration
pub mod config;

// Logging setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive terminal game
pub mod interactive;
