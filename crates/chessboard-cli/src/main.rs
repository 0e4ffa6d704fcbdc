mod commands;
mod config;
mod store;

use anyhow::Context;
use chessboard_core::Square;
use clap::{Parser, Subcommand};
use config::ChessboardConfig;
use std::path::PathBuf;
use store::JsonFileStore;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "chessboard")]
#[command(about = "Terminal chessboard with replayable move history")]
struct Cli {
    /// Config file (defaults to ./chessboard.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the board
    Show {
        /// History index to show (-1 for the starting position)
        #[arg(long, allow_hyphen_values = true)]
        at: Option<isize>,
    },
    /// List where the piece on a square may move
    Moves {
        square: Square,
        #[arg(long, allow_hyphen_values = true)]
        at: Option<isize>,
    },
    /// Make a move and save it
    Play {
        from: Square,
        to: Square,
        /// Play from an earlier position, discarding later moves
        #[arg(long, allow_hyphen_values = true)]
        at: Option<isize>,
    },
    /// Print the move list
    Log,
    /// Delete the saved history
    Reset,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = ChessboardConfig::load(cli.config.as_deref()).context("loading config")?;
    let store = JsonFileStore::new(&config.history_path);
    let moves = store
        .load_or_empty()
        .with_context(|| format!("reading {}", store.path().display()))?;
    let mut session = commands::open(moves);

    match cli.command {
        Commands::Show { at } => {
            print!("{}", commands::show(&mut session, at, &config));
        }
        Commands::Moves { square, at } => {
            println!("{}", commands::moves(&mut session, square, at)?);
        }
        Commands::Play { from, to, at } => {
            let line = commands::play(&mut session, from, to, at)?;
            store.save(session.history().moves())?;
            println!("{line}");
            print!("{}", commands::show(&mut session, None, &config));
        }
        Commands::Log => {
            for line in commands::log(&session) {
                println!("{line}");
            }
        }
        Commands::Reset => {
            store.clear()?;
            tracing::info!(path = %store.path().display(), "history cleared");
            println!("History cleared.");
        }
    }

    Ok(())
}
