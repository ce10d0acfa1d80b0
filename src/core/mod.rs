//! Core domain types for Wordle
//!
//! This module contains the pure game rules: words, scoring and keyboard tracking.
//! Nothing here touches the terminal.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Classification, Feedback};
pub use keyboard::KeyboardState;
pub use word::{Word, WordError};
