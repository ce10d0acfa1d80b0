//! Word list loading utilities
//!
//! Reads a word list file: one word per line, trimmed and upper-cased.

use super::WordList;
use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Word file '{}' cannot be found", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read word file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Word file '{}' contains no valid words", .0.display())]
    Empty(PathBuf),
}

/// Load words from a file
///
/// Blank lines are skipped silently, lines that are not a single word of ASCII
/// letters are skipped with a warning.
///
/// # Errors
///
/// Returns `WordListError::NotFound` if the file does not exist, `Io` for other read
/// failures and `Empty` if no line holds a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_cli::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => WordListError::NotFound(path.to_path_buf()),
        _ => WordListError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let words = parse_lines(&content);

    if words.is_empty() {
        return Err(WordListError::Empty(path.to_path_buf()));
    }

    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

fn parse_lines(content: &str) -> WordList {
    content
        .lines()
        .enumerate()
        .filter_map(|(line, text)| {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            Word::new(trimmed)
                .inspect_err(|e| warn!("skipping line {}: {trimmed:?}: {e}", line + 1))
                .ok()
        })
        .collect()
}
