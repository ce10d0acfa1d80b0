//! Wordle CLI
//!
//! Play Wordle in the terminal against a word from a word list file.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use wordle_cli::{
    commands::{run_play, select_target},
    config::GameConfig,
    logging::init_logging,
    output::print_outcome,
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word; word length + 1 attempts",
    version,
    author
)]
struct Cli {
    /// Select a specific word by its 1-based position in the word list
    /// (blank and invalid lines are not counted)
    #[arg(short = 'w', long = "word", value_name = "N")]
    word: Option<usize>,

    /// Word list file, one word per line
    #[arg(long = "words", value_name = "PATH", default_value = "words.txt")]
    words: PathBuf,

    /// Keys read faster than this many milliseconds are ignored (0 disables)
    #[arg(long, default_value_t = 50)]
    debounce_ms: u64,

    /// Delay before each cell of a guess is revealed, in milliseconds
    #[arg(long, default_value_t = 250)]
    reveal_ms: u64,

    /// How long validation messages stay on screen, in milliseconds
    #[arg(long, default_value_t = 2000)]
    message_ms: u64,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let words = load_from_file(&cli.words)?;

    if let Some(n) = cli.word
        && !(1..=words.len()).contains(&n)
    {
        Cli::command()
            .error(
                ErrorKind::InvalidValue,
                format!("invalid choice: {n} (choose from 1-{})", words.len()),
            )
            .exit();
    }

    let target = select_target(&words, cli.word, &mut rand::rng())?;
    let config = GameConfig::from_millis(cli.debounce_ms, cli.reveal_ms, cli.message_ms);

    let outcome = run_play(&words, target, config)?;

    // Position of the first occurrence, the same numbering -w selects by
    let number = words.number_of(target).unwrap_or_default();
    print_outcome(outcome, target, number)?;

    Ok(())
}
