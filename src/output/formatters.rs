//! Formatting utilities for terminal output

use crate::interactive::GameOutcome;

/// Center `text` within `width` columns, extra padding going to the right
///
/// Text wider than `width` is returned unchanged.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}

/// Final score line, e.g. "Wordle 12 4/6" or "Wordle 12 X/6"
///
/// `None` for a cancelled game, which reports nothing.
#[must_use]
pub fn tally_line(number: usize, outcome: GameOutcome, max_attempts: usize) -> Option<String> {
    let score = match outcome {
        GameOutcome::Won { attempts } => attempts.to_string(),
        GameOutcome::Lost { .. } => "X".to_string(),
        GameOutcome::Cancelled => return None,
    };
    Some(format!("Wordle {number} {score}/{max_attempts}"))
}
