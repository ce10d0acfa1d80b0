//! Raw key input
//!
//! The game reads through the [`KeyReader`] trait. [`TerminalKeys`] reads a real
//! terminal via crossterm; [`ScriptedKeys`] replays a fixed sequence and is what the
//! game tests drive.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use log::{debug, warn};
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

/// One unit of input as the game sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    /// Ctrl+C
    Interrupt,
    /// Anything else: arrows, function keys, undecodable bytes
    Unrecognized,
}

impl Key {
    /// Decode a single raw byte as a cbreak-mode terminal would deliver it
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            0x03 => Self::Interrupt,
            0x7f | 0x08 => Self::Backspace,
            b'\r' | b'\n' => Self::Enter,
            0x20..=0x7e => Self::Char(byte as char),
            _ => Self::Unrecognized,
        }
    }
}

impl From<KeyEvent> for Key {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Self::Interrupt
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Self::Unrecognized
            }
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Enter => Self::Enter,
            KeyCode::Backspace => Self::Backspace,
            _ => Self::Unrecognized,
        }
    }
}

/// Source of keys for the game loop
pub trait KeyReader {
    /// Non-blocking: is a key waiting?
    ///
    /// # Errors
    /// Returns an error if the input device cannot be polled.
    fn key_available(&mut self) -> io::Result<bool>;

    /// Block until exactly one key is read
    ///
    /// # Errors
    /// Returns an error if reading the input device fails.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Sleep for `duration`, then throw away whatever was typed meanwhile
    ///
    /// Ctrl+C cuts the sleep short and is swallowed rather than reported.
    ///
    /// # Errors
    /// Returns an error if the input device cannot be polled or drained.
    fn interruptible_sleep(&mut self, duration: Duration) -> io::Result<()>;
}

/// Keys from the controlling terminal
///
/// Opening switches the terminal to raw mode (no line buffering, no echo, Ctrl+C
/// delivered as a key); dropping restores the mode that was active before, which
/// also happens while unwinding from a panic.
#[derive(Debug)]
pub struct TerminalKeys {
    was_raw: bool,
}

impl TerminalKeys {
    /// Capture the current terminal mode and enter raw mode
    ///
    /// # Errors
    /// Returns an error if stdin is not a terminal or raw mode cannot be enabled.
    pub fn open() -> io::Result<Self> {
        let was_raw = terminal::is_raw_mode_enabled()?;
        terminal::enable_raw_mode()?;
        debug!("raw mode enabled (previously raw: {was_raw})");
        Ok(Self { was_raw })
    }

    fn discard_pending(&mut self) -> io::Result<()> {
        while self.key_available()? {
            event::read()?;
        }
        Ok(())
    }
}

impl KeyReader for TerminalKeys {
    fn key_available(&mut self) -> io::Result<bool> {
        event::poll(Duration::ZERO)
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            // Release/repeat events are reported on some platforms; only presses count
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(Key::from(key));
            }
        }
    }

    fn interruptible_sleep(&mut self, duration: Duration) -> io::Result<()> {
        let deadline = Instant::now() + duration;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            if let Event::Key(key) = event::read()?
                && Key::from(key) == Key::Interrupt
            {
                debug!("interrupt absorbed during pause");
                break;
            }
        }

        self.discard_pending()
    }
}

impl Drop for TerminalKeys {
    fn drop(&mut self) {
        if self.was_raw {
            return;
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to restore terminal mode: {e}");
        }
    }
}

/// Keys replayed from memory
///
/// Once the script runs out every read returns [`Key::Interrupt`], so a game fed
/// an incomplete script ends as cancelled instead of blocking. Sleeps return at
/// once and are only recorded.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
    sleeps: Vec<Duration>,
}

impl ScriptedKeys {
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            sleeps: Vec::new(),
        }
    }

    /// Script from raw terminal bytes, e.g. `b"crane\r"`
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(Key::from_byte))
    }

    /// Keys not yet read
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    /// Every sleep requested so far, in order
    #[must_use]
    pub fn sleeps(&self) -> &[Duration] {
        &self.sleeps
    }
}

impl KeyReader for ScriptedKeys {
    fn key_available(&mut self) -> io::Result<bool> {
        Ok(!self.keys.is_empty())
    }

    fn read_key(&mut self) -> io::Result<Key> {
        Ok(self.keys.pop_front().unwrap_or(Key::Interrupt))
    }

    fn interruptible_sleep(&mut self, duration: Duration) -> io::Result<()> {
        self.sleeps.push(duration);
        Ok(())
    }
}
