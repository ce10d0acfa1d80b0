//! In-place terminal rendering
//!
//! The board is drawn on the normal screen, not an alternate one. Layout, top down:
//!
//! ```text
//! line 0..=2   keyboard panel
//! line 3       blank
//! line 4..     one row per attempt
//! ```
//!
//! Each attempt adds one row below the previous, and the keyboard is repainted by
//! jumping back up over the rows already on screen. The terminal is in raw mode,
//! so every line break is written as CR LF.

use crate::core::{Classification, Feedback, KeyboardState};
use crate::output::formatters::center;
use crossterm::{
    cursor::{MoveToColumn, MoveToPreviousLine},
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// On-screen keyboard rows, each indented one more space than the last
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Indent in front of guess rows and messages
const ROW_INDENT: &str = "    ";
/// Width of one letter cell
const CELL_WIDTH: usize = 3;
/// Lines between the top of the keyboard and the first guess row
const BOARD_OFFSET: usize = KEYBOARD_ROWS.len() + 1;

const FG_LETTER: Color = Color::AnsiValue(255);
const BG_EMPTY: Color = Color::AnsiValue(240);
const BG_UNSEEN: Color = Color::AnsiValue(244);
const BG_ABSENT: Color = Color::AnsiValue(240);
const BG_PRESENT: Color = Color::AnsiValue(214);
const BG_CORRECT: Color = Color::AnsiValue(34);

/// Background for a scored cell or keyboard key
#[must_use]
pub const fn classification_color(classification: Classification) -> Color {
    match classification {
        Classification::Correct => BG_CORRECT,
        Classification::Present => BG_PRESENT,
        Classification::Absent => BG_ABSENT,
    }
}

/// Background for a keyboard key, gray until the letter has been evaluated
#[must_use]
pub fn key_color(state: &KeyboardState, letter: u8) -> Color {
    state.get(letter).map_or(BG_UNSEEN, classification_color)
}

/// Draws the board onto any writer
#[derive(Debug)]
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// The underlying writer, e.g. the bytes a test captured
    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Paint the keyboard panel
    ///
    /// Before the first attempt (`attempts == 0`) the panel is printed where the
    /// cursor is. Afterwards the cursor sits just below `attempts` finished rows, so
    /// it moves up over them, repaints the panel and moves back down.
    ///
    /// # Errors
    /// Returns an error if writing to the terminal fails.
    pub fn draw_keyboard(&mut self, state: &KeyboardState, attempts: usize) -> io::Result<()> {
        if attempts > 0 {
            queue!(self.out, MoveToPreviousLine(lines(attempts + BOARD_OFFSET)))?;
        }

        for (row, keys) in KEYBOARD_ROWS.iter().enumerate() {
            queue!(self.out, Print(" ".repeat(row)))?;
            for letter in keys.bytes() {
                self.cell(letter as char, key_color(state, letter))?;
            }
            queue!(self.out, Print("\r\n"))?;
        }

        queue!(self.out, Print("\r\n".repeat(attempts + 1)))?;
        self.out.flush()
    }

    /// Paint a row of `len` blank cells for the next attempt
    ///
    /// # Errors
    /// Returns an error if writing to the terminal fails.
    pub fn draw_empty_row(&mut self, len: usize) -> io::Result<()> {
        self.draw_guess("", len)
    }

    /// Repaint the row being edited: typed letters, then blanks up to `len`
    ///
    /// # Errors
    /// Returns an error if writing to the terminal fails.
    pub fn draw_guess(&mut self, guess: &str, len: usize) -> io::Result<()> {
        self.row_start()?;
        let mut letters = guess.chars();
        for _ in 0..len {
            self.cell(letters.next().unwrap_or(' '), BG_EMPTY)?;
        }
        self.row_end()
    }

    /// Repaint a submitted row with its first `shown` cells colored by feedback
    ///
    /// Cells past `shown` keep their letters on the neutral background so the
    /// row reads as flipping over one cell at a time.
    ///
    /// # Errors
    /// Returns an error if writing to the terminal fails.
    pub fn draw_reveal(
        &mut self,
        guess: &str,
        feedback: &Feedback,
        shown: usize,
    ) -> io::Result<()> {
        self.row_start()?;
        for (i, (letter, classification)) in guess.chars().zip(feedback.iter()).enumerate() {
            let background = if i < shown {
                classification_color(classification)
            } else {
                BG_EMPTY
            };
            self.cell(letter, background)?;
        }
        self.row_end()
    }

    /// Leave the current row and move to the start of the next line
    ///
    /// # Errors
    /// Returns an error if writing to the terminal fails.
    pub fn finish_row(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\r\n"))?;
        self.out.flush()
    }

    /// Print `text` on the line below the row being edited
    ///
    /// # Errors
    /// Returns an error if writing to the terminal fails.
    pub fn show_message(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print("\r\n"), Print(ROW_INDENT), Print(text))?;
        self.out.flush()
    }

    /// Erase the message line and return to the row above it
    ///
    /// # Errors
    /// Returns an error if writing to the terminal fails.
    pub fn clear_message(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::CurrentLine), MoveToPreviousLine(1))?;
        self.row_start()?;
        self.out.flush()
    }

    fn row_start(&mut self) -> io::Result<()> {
        queue!(self.out, MoveToColumn(0), Print(ROW_INDENT))
    }

    fn row_end(&mut self) -> io::Result<()> {
        // Park the cursor at the start of the row rather than after it
        self.row_start()?;
        self.out.flush()
    }

    fn cell(&mut self, letter: char, background: Color) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(FG_LETTER),
            SetBackgroundColor(background),
            Print(center(&letter.to_string(), CELL_WIDTH)),
            ResetColor
        )
    }
}

fn lines(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}
