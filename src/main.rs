//! Terminal Wordle - CLI
//!
//! Wordle for the terminal with TUI and line-based CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_tui::{
    commands::run_simple,
    core::Word,
    engine::Game,
    interactive::{App, run_tui},
    wordlists::{
        DICTIONARY, TARGETS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a custom word list file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based CLI mode (play without the TUI)
    Simple,
}

/// Load wordlists based on the -w flag
///
/// Returns (`dictionary`, `targets`)
/// - "embedded": the built-in lists (1,135 valid guesses, 860 targets)
/// - "<path>": a custom list, used as both dictionary and target pool
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    match wordlist_mode {
        "embedded" => {
            let dictionary = words_from_slice(DICTIONARY);
            let targets = words_from_slice(TARGETS);
            Ok((dictionary, targets))
        }
        path => {
            let custom_words = load_from_file(path)
                .with_context(|| format!("failed to read word list from {path}"))?;
            anyhow::ensure!(
                !custom_words.is_empty(),
                "word list {path} contains no valid five-letter words"
            );
            Ok((custom_words.clone(), custom_words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load word lists based on -w flag
    let (dictionary, targets) = load_wordlists(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let game = Game::new(&dictionary, &targets).context("target word list is empty")?;
            run_tui(App::new(game))
        }
        Commands::Simple => run_simple(&dictionary, &targets).map_err(|e| anyhow::anyhow!(e)),
    }
}
