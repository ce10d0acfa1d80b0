//! Play command
//!
//! Picks the target, hands the terminal to a [`Game`] and gives it back.

use crate::config::GameConfig;
use crate::core::Word;
use crate::interactive::{Game, GameOutcome, Renderer, TerminalKeys};
use crate::wordlists::WordList;
use anyhow::{Context, Result, anyhow};
use log::debug;
use rand::Rng;
use std::io;

/// Choose the target word
///
/// `number` is the 1-based position in the list, already range-checked by the
/// caller; without it a word is drawn at random.
///
/// # Errors
///
/// Returns an error if `number` is out of range or the list is empty.
pub fn select_target<'a, R: Rng + ?Sized>(
    words: &'a WordList,
    number: Option<usize>,
    rng: &mut R,
) -> Result<&'a Word> {
    let target = match number {
        Some(n) => words
            .by_number(n)
            .ok_or_else(|| anyhow!("word number {n} is outside 1-{}", words.len()))?,
        None => words.choose(rng).context("word list is empty")?,
    };
    debug!("target selected (number {number:?})");
    Ok(target)
}

/// Play one game on the controlling terminal
///
/// Raw mode is entered before the first key is read and left again before this
/// returns, whichever way the game ends.
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into raw mode or terminal I/O
/// fails mid-game.
pub fn run_play(words: &WordList, target: &Word, config: GameConfig) -> Result<GameOutcome> {
    let keys = TerminalKeys::open().context("failed to switch the terminal to raw mode")?;
    let renderer = Renderer::new(io::stdout());

    Game::new(target, words, keys, renderer, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn select_by_number() {
        let words = WordList::from_slice(&["crane", "slate", "irate"]);
        let mut rng = SmallRng::seed_from_u64(0);

        let target = select_target(&words, Some(2), &mut rng).unwrap();
        assert_eq!(target.text(), "SLATE");
    }

    #[test]
    fn select_out_of_range_fails() {
        let words = WordList::from_slice(&["crane"]);
        let mut rng = SmallRng::seed_from_u64(0);

        assert!(select_target(&words, Some(0), &mut rng).is_err());
        assert!(select_target(&words, Some(2), &mut rng).is_err());
    }

    #[test]
    fn select_random_from_list() {
        let words = WordList::from_slice(&["crane", "slate", "irate"]);
        let mut rng = SmallRng::seed_from_u64(42);

        let target = select_target(&words, None, &mut rng).unwrap();
        assert!(words.contains(target.text()));
    }

    #[test]
    fn select_from_empty_list_fails() {
        let words = WordList::default();
        let mut rng = SmallRng::seed_from_u64(0);

        assert!(select_target(&words, None, &mut rng).is_err());
    }
}
