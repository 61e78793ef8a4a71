//! Spelling Bee - CLI
//!
//! Spelling Bee puzzle game with TUI and CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use spelling_bee::{
    commands::{run_simple, solve_puzzle},
    game::GameController,
    logging::{LogOutput, LoggingConfig},
    output::print_solve_result,
    wordlists::{DEFAULT_DICTIONARY, FileDictionary},
};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Find words from seven letters around a mandatory center letter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list, one word per line
    #[arg(
        short,
        long,
        global = true,
        env = "SPELLING_BEE_DICTIONARY",
        default_value = DEFAULT_DICTIONARY
    )]
    dictionary: PathBuf,

    /// Seed for shuffle and hints (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// List every solution of a puzzle
    Solve {
        /// Seven distinct letters, center letter first
        letters: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let owns_terminal = matches!(command, Commands::Play);
    LoggingConfig::new(
        cli.log_level,
        LogOutput::for_mode(owns_terminal, cli.log_file),
    )
    .init()?;

    let dictionary = FileDictionary::new(cli.dictionary);
    debug!(path = %dictionary.path().display(), seed = ?cli.seed, "starting");

    match command {
        Commands::Play => run_play_command(dictionary, make_rng(cli.seed)),
        Commands::Simple => run_simple(dictionary, make_rng(cli.seed)),
        Commands::Solve { letters } => run_solve_command(&letters, &dictionary),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_solve_command(letters: &str, dictionary: &FileDictionary) -> Result<()> {
    let result = solve_puzzle(letters, dictionary)?;
    print_solve_result(&result);
    Ok(())
}

fn run_play_command(dictionary: FileDictionary, rng: StdRng) -> Result<()> {
    use spelling_bee::interactive::{App, run_tui};

    let game = GameController::new(App::new(), dictionary, rng);
    run_tui(game)
}
