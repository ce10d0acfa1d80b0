//! The game loop
//!
//! One [`Game`] plays one target word to completion:
//!
//! ```text
//! Editing --Enter--> Validating --ok--> Revealing --> Won | Lost | next Editing
//!    ^                   |
//!    +----rejected-------+
//! ```
//!
//! Ctrl+C in any state ends the game as [`GameOutcome::Cancelled`].

use super::keys::{Key, KeyReader};
use super::rendering::Renderer;
use crate::config::GameConfig;
use crate::core::{Feedback, KeyboardState, Word};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use log::{debug, info, trace};
use std::io::Write;
use std::time::Instant;
use thiserror::Error;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { attempts: usize },
    Lost { attempts: usize },
    /// The player pressed Ctrl+C; there is no result to report
    Cancelled,
}

impl GameOutcome {
    /// Attempts used, `None` if cancelled
    #[must_use]
    pub const fn attempts(self) -> Option<usize> {
        match self {
            Self::Won { attempts } | Self::Lost { attempts } => Some(attempts),
            Self::Cancelled => None,
        }
    }

    /// Whether the word was found, `None` if cancelled
    #[must_use]
    pub const fn is_success(self) -> Option<bool> {
        match self {
            Self::Won { .. } => Some(true),
            Self::Lost { .. } => Some(false),
            Self::Cancelled => None,
        }
    }
}

/// Why a submitted guess was refused; the message is shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Not enough letters")]
    TooShort,
    #[error("Not in word list")]
    NotInWordList,
}

/// What a single key did to the guess being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Edited,
    Ignored,
    Submit,
    Cancel,
}

/// A single game session
pub struct Game<'a, K: KeyReader, W: Write> {
    target: &'a Word,
    words: &'a WordList,
    keys: K,
    renderer: Renderer<W>,
    config: GameConfig,
    keyboard: KeyboardState,
    guess: String,
    attempts: usize,
}

impl<'a, K: KeyReader, W: Write> Game<'a, K, W> {
    pub fn new(
        target: &'a Word,
        words: &'a WordList,
        keys: K,
        renderer: Renderer<W>,
        config: GameConfig,
    ) -> Self {
        Self {
            target,
            words,
            keys,
            renderer,
            config,
            keyboard: KeyboardState::new(),
            guess: String::with_capacity(target.len()),
            attempts: 0,
        }
    }

    /// Play until the word is found, the attempts run out or the player cancels
    ///
    /// # Errors
    ///
    /// Returns an error if reading keys or writing to the terminal fails.
    pub fn run(&mut self) -> Result<GameOutcome> {
        let outcome = self.play().context("terminal I/O failed during the game")?;
        info!(
            "game over: {outcome:?}, {} letters evaluated",
            self.keyboard.seen()
        );
        Ok(outcome)
    }

    fn play(&mut self) -> std::io::Result<GameOutcome> {
        let max_attempts = self.target.max_attempts();
        self.renderer.draw_keyboard(&self.keyboard, 0)?;

        while self.attempts < max_attempts {
            self.renderer.draw_empty_row(self.target.len())?;

            let Some(guess) = self.collect_guess()? else {
                self.renderer.finish_row()?;
                return Ok(GameOutcome::Cancelled);
            };

            let feedback = self.reveal(&guess)?;
            self.attempts += 1;
            self.renderer.draw_keyboard(&self.keyboard, self.attempts)?;

            if feedback.is_solved() {
                return Ok(GameOutcome::Won {
                    attempts: self.attempts,
                });
            }
        }

        Ok(GameOutcome::Lost {
            attempts: self.attempts,
        })
    }

    /// Read keys until a guess is accepted (`Some`) or the player cancels (`None`)
    fn collect_guess(&mut self) -> std::io::Result<Option<String>> {
        loop {
            let started = Instant::now();
            let key = self.keys.read_key()?;

            // A key that was already waiting is the tail of an escape sequence or
            // stray type-ahead, not a deliberate press
            if key != Key::Interrupt && started.elapsed() < self.config.debounce {
                trace!("debounced {key:?}");
                continue;
            }

            match self.apply_key(key) {
                KeyAction::Cancel => return Ok(None),
                KeyAction::Submit => match self.validate() {
                    Ok(()) => return Ok(Some(std::mem::take(&mut self.guess))),
                    Err(rejection) => {
                        debug!("rejected {:?}: {rejection}", self.guess);
                        self.renderer.show_message(&rejection.to_string())?;
                        self.keys.interruptible_sleep(self.config.message_duration)?;
                        self.renderer.clear_message()?;
                    }
                },
                KeyAction::Edited | KeyAction::Ignored => {}
            }

            self.renderer.draw_guess(&self.guess, self.target.len())?;
        }
    }

    /// Apply one key to the guess being edited
    pub fn apply_key(&mut self, key: Key) -> KeyAction {
        match key {
            Key::Interrupt => KeyAction::Cancel,
            Key::Enter => KeyAction::Submit,
            Key::Backspace => {
                if self.guess.pop().is_some() {
                    KeyAction::Edited
                } else {
                    KeyAction::Ignored
                }
            }
            Key::Char(c) if c.is_ascii_alphabetic() && self.guess.len() < self.target.len() => {
                self.guess.push(c.to_ascii_uppercase());
                KeyAction::Edited
            }
            Key::Char(_) | Key::Unrecognized => KeyAction::Ignored,
        }
    }

    /// Check the guess being edited against length and the word list
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` to show the player.
    pub fn validate(&self) -> Result<(), Rejection> {
        if self.guess.len() < self.target.len() {
            Err(Rejection::TooShort)
        } else if !self.words.contains(&self.guess) {
            Err(Rejection::NotInWordList)
        } else {
            Ok(())
        }
    }

    /// Score an accepted guess, flip its cells one by one and update the keyboard
    fn reveal(&mut self, guess: &str) -> std::io::Result<Feedback> {
        let feedback = Feedback::calculate(guess.as_bytes(), self.target.letters());
        debug!(
            "attempt {}: {guess} {} ({} correct, {} present)",
            self.attempts + 1,
            feedback.to_emoji(),
            feedback.count_correct(),
            feedback.count_present()
        );

        for shown in 1..=feedback.len() {
            self.keys.interruptible_sleep(self.config.reveal_stagger)?;
            self.renderer.draw_reveal(guess, &feedback, shown)?;
        }
        self.renderer.finish_row()?;

        self.keyboard.record(guess.as_bytes(), &feedback);
        Ok(feedback)
    }

    /// Letters typed so far in the current attempt
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// Attempts submitted and scored so far
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn keys(&self) -> &K {
        &self.keys
    }

    #[must_use]
    pub const fn renderer(&self) -> &Renderer<W> {
        &self.renderer
    }
}
