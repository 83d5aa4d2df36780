//! Wordle Game - CLI
//!
//! Terminal Wordle with a TUI (default) and a simple line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_game::{
    commands::{reset_stats, run_simple, show_stats},
    core::Word,
    game::Game,
    logging,
    stats::{JsonFileStore, MemoryStore, StatsStore, StoreType},
    wordlists::{WordPool, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Words: 'embedded' (default), 'remote', an http(s) URL, or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Stats file (default: OS data directory)
    #[arg(long, global = true)]
    stats_file: Option<PathBuf>,

    /// Keep stats in memory only
    #[arg(long, global = true)]
    no_save: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Play against this word instead of a random one
    #[arg(long, global = true)]
    solution: Option<String>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Show the win/loss record
    Stats {
        /// Reset the record to zero
        #[arg(long)]
        reset: bool,
    },
}

/// Build the stats store from the flags
fn open_store(cli: &Cli) -> Result<StoreType> {
    if cli.no_save {
        return Ok(StoreType::Memory(MemoryStore::default()));
    }
    let store = match &cli.stats_file {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::open_default().context("failed to locate stats file")?,
    };
    info!("Using stats file {}", store.path().display());
    Ok(StoreType::File(store))
}

/// Load the candidate pool; a fixed `--solution` becomes a pool of one
fn load_pool(cli: &Cli) -> Result<WordPool> {
    if let Some(solution) = &cli.solution {
        let word = Word::new(solution.as_str())
            .with_context(|| format!("invalid --solution '{solution}'"))?;
        return WordPool::from_words(vec![word.text().to_string()])
            .context("empty solution pool");
    }
    let source = WordSource::from_arg(&cli.words);
    Ok(WordPool::load(&source)?)
}

/// Pick the first solution and build the game around the store
fn start_game<S: StatsStore>(pool: &WordPool, rng: &mut StdRng, store: S) -> Result<Game<S>> {
    let solution = pool.pick(rng).context("word list produced an invalid solution")?;
    Ok(Game::new(solution, store))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);
    logging::init(cli.log_file.as_deref(), !matches!(command, Commands::Play))?;

    let mut store = open_store(&cli)?;

    match command {
        Commands::Play => {
            use wordle_game::interactive::{App, run_tui};

            let pool = load_pool(&cli)?;
            let mut rng = StdRng::from_os_rng();
            let game = start_game(&pool, &mut rng, store)?;
            run_tui(App::new(game, pool, rng))
        }
        Commands::Simple => {
            let pool = load_pool(&cli)?;
            let mut rng = StdRng::from_os_rng();
            let game = start_game(&pool, &mut rng, store)?;
            run_simple(game, &pool, &mut rng)
        }
        Commands::Stats { reset } => {
            if reset {
                reset_stats(&mut store)?;
                println!("Stats reset.");
            }
            show_stats(&store, &mut std::io::stdout().lock())?;
            Ok(())
        }
    }
}
