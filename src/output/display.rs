//! End-of-game printout
//!
//! Runs after the terminal has left raw mode, so plain line breaks are fine here.

use super::formatters::{center, tally_line};
use crate::core::Word;
use crate::interactive::GameOutcome;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use std::io::{self, Write};

/// Indent matching the board rows
const ROW_INDENT: &str = "    ";

/// Near-black on near-white, from the same 256-color palette as the board
const REVEAL_FG: Color = Color::AnsiValue(232);
const REVEAL_BG: Color = Color::AnsiValue(255);

/// Print the result of a finished game to stdout
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_outcome(outcome: GameOutcome, target: &Word, number: usize) -> io::Result<()> {
    write_outcome(&mut io::stdout().lock(), outcome, target, number)
}

/// Write the result of a finished game
///
/// On a loss the target is revealed first, spread over the width of a board row.
/// A cancelled game writes nothing.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn write_outcome(
    out: &mut impl Write,
    outcome: GameOutcome,
    target: &Word,
    number: usize,
) -> io::Result<()> {
    let Some(tally) = tally_line(number, outcome, target.max_attempts()) else {
        return Ok(());
    };

    if outcome.is_success() == Some(false) {
        queue!(
            out,
            Print(ROW_INDENT),
            SetForegroundColor(REVEAL_FG),
            SetBackgroundColor(REVEAL_BG),
            Print(center(target.text(), target.len() * 3)),
            ResetColor,
            Print("\n")
        )?;
    }

    writeln!(out, "\n{tally}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(outcome: GameOutcome) -> String {
        let target = Word::new("crane").unwrap();
        let mut out = Vec::new();
        write_outcome(&mut out, outcome, &target, 7).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn loss_reveals_target_before_tally() {
        let out = written(GameOutcome::Lost { attempts: 6 });

        assert_eq!(
            out,
            "    \x1b[38;5;232m\x1b[48;5;255m     CRANE     \x1b[0m\n\nWordle 7 X/6\n"
        );
    }

    #[test]
    fn win_has_no_reveal() {
        let out = written(GameOutcome::Won { attempts: 3 });
        assert_eq!(out, "\nWordle 7 3/6\n");
    }

    #[test]
    fn cancel_writes_nothing() {
        assert!(written(GameOutcome::Cancelled).is_empty());
    }
}
