//! Wordle - CLI
//!
//! Terminal Wordle with a mouse-aware TUI, a line-based mode and a scorer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use wordle_game::{
    commands::{run_simple, score_words},
    config::{Config, DEFAULT_TICK_MS},
    control::Controller,
    game::KeyPolicy,
    interactive::run_tui,
    logging::init_logging,
    output::print_score,
    wordlists::loader::WordlistChoice,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for reproducible word draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Keypad colouring: last-seen (default) or best-ever
    #[arg(long, global = true, default_value = "last-seen")]
    key_colors: KeyPolicy,

    /// Fail instead of reusing words once every word has been played
    #[arg(long, global = true)]
    no_recycle: bool,

    /// Frame interval of the TUI in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Write logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            wordlist: WordlistChoice::parse(&self.wordlist),
            seed: self.seed,
            key_policy: self.key_colors,
            recycle_words: !self.no_recycle,
            tick_ms: self.tick_ms,
            log_file: self.log_file.clone(),
            verbosity: self.verbose,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would corrupt the TUI's alternate screen
    if !matches!(command, Commands::Play) || config.log_file.is_some() {
        init_logging(&config.log_config()).context("Failed to initialise logging")?;
    }

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Score { guess, target } => run_score_command(&guess, &target),
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    let session = config.build_session()?;
    info!(words = session.source().len(), "starting terminal UI");
    let controller = Controller::new(session, config.recycle_words);
    run_tui(controller, config.tick())
}

fn run_simple_command(config: &Config) -> Result<()> {
    let session = config.build_session()?;
    info!(words = session.source().len(), "starting simple mode");
    let mut controller = Controller::new(session, config.recycle_words);
    run_simple(&mut controller)
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_words(guess, target).context("Cannot score these words")?;
    print_score(&result.guess, &result.target, result.feedback);
    Ok(())
}
