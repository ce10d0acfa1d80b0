//! Terminal output formatting
//!
//! Cell layout helpers and the final tally printed after a game.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, write_outcome};
