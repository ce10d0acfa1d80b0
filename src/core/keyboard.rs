//! Keyboard feedback tracking
//!
//! Remembers, for every letter A-Z, the best classification it has received in any
//! guess of the session. A letter's state only ever moves up the order
//! `Absent < Present < Correct`.

use super::{Classification, Feedback};

const ALPHABET_LEN: usize = 26;

/// Best classification seen so far for each letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    marks: [Option<Classification>; ALPHABET_LEN],
}

impl KeyboardState {
    /// All letters unseen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise `letter` to `classification` if it is unseen or ranks lower
    ///
    /// Returns `true` when the stored state changed. Lower classifications and
    /// non-letters are ignored.
    pub fn upgrade(&mut self, letter: u8, classification: Classification) -> bool {
        let Some(slot) = slot_of(letter).map(|i| &mut self.marks[i]) else {
            return false;
        };

        match *slot {
            Some(current) if current >= classification => false,
            _ => {
                *slot = Some(classification);
                true
            }
        }
    }

    /// Upgrade every letter of a scored guess
    ///
    /// When a letter appears several times in one guess the best of its
    /// classifications is what remains.
    pub fn record(&mut self, guess: &[u8], feedback: &Feedback) {
        for (&letter, classification) in guess.iter().zip(feedback.iter()) {
            self.upgrade(letter, classification);
        }
    }

    /// Stored classification for `letter`, `None` if never evaluated
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Classification> {
        slot_of(letter).and_then(|i| self.marks[i])
    }

    /// Number of letters that have been evaluated at least once
    #[must_use]
    pub fn seen(&self) -> usize {
        self.marks.iter().flatten().count()
    }
}

fn slot_of(letter: u8) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| usize::from(upper - b'A'))
}
