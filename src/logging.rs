//! Minimal stderr logger behind the `log` facade
//!
//! The board is drawn on stdout, so records go to stderr and the default level is
//! `warn`. Run with `WORDLE_LOG=debug 2>wordle.log` to trace a session.

use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use std::io::{self, Write};

/// Environment variable holding the log level
pub const LOG_ENV: &str = "WORDLE_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Raw mode needs an explicit carriage return
            let _ = write!(
                io::stderr().lock(),
                "{} {} - {}\r\n",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `warn`
#[must_use]
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the logger with the level taken from `WORDLE_LOG`
///
/// Calling this more than once is harmless; only the first call installs.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
