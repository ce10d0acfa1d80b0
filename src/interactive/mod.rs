//! Interactive terminal game
//!
//! Keys come in through [`keys`], the board goes out through [`rendering`] and
//! [`game`] ties the two to the rules in [`crate::core`].

pub mod game;
pub mod keys;
pub mod rendering;

pub use game::{Game, GameOutcome, KeyAction, Rejection};
pub use keys::{Key, KeyReader, ScriptedKeys, TerminalKeys};
pub use rendering::Renderer;
