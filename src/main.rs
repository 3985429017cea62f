//! Othello-Rust: play Othello in the terminal.
//!
//! ## Usage
//!
//! - `othello` - Play Black against the engine
//! - `othello play --black engine --white human` - Choose who controls each side
//! - `othello selfplay --games 10` - Engine against itself

use std::io;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use othello_rust::config::{Controller, GameConfig};
use othello_rust::constants::DEFAULT_DEPTH;
use othello_rust::game::Game;
use othello_rust::selfplay::run_selfplay;

/// Othello-Rust: 8x8 Othello with a minimax engine
#[derive(Parser)]
#[command(name = "othello")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log engine decisions and search statistics to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal (the default)
    Play(PlayArgs),
    /// Let the engine play itself and report the results
    Selfplay {
        /// Number of games
        #[arg(long, default_value_t = 10)]
        games: usize,
        /// Random plies at the start of each game
        #[arg(long, default_value_t = 4)]
        openings: usize,
        /// Seed for the random openings
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Search depth in plies
        #[arg(long, default_value_t = 3)]
        depth: u32,
    },
}

#[derive(Args)]
struct PlayArgs {
    /// Who plays Black
    #[arg(long, value_enum, default_value_t = Controller::Human)]
    black: Controller,
    /// Who plays White
    #[arg(long, value_enum, default_value_t = Controller::Engine)]
    white: Controller,
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,
    /// Search without alpha-beta pruning
    #[arg(long)]
    no_pruning: bool,
}

impl Default for PlayArgs {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            black: config.black,
            white: config.white,
            depth: config.depth,
            no_pruning: !config.pruning,
        }
    }
}

const INTRO: &str = "\
Othello: two players ('b' and 'w') compete for space on an 8x8 grid.
Flanking your opponent's discs with your own flips them to your colour.
If a move that flips at least one disc exists you must play one;
otherwise your turn passes. Black always moves first.

Enter moves as '<row> <col>' with numbers 0-7.
";

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Some(Commands::Selfplay {
            games,
            openings,
            seed,
            depth,
        }) => {
            let tally = run_selfplay(depth, games, openings, seed)?;
            println!("Games: {}", tally.games.len());
            println!("Black wins: {}", tally.black_wins);
            println!("White wins: {}", tally.white_wins);
            println!("Draws: {}", tally.draws);
        }
        Some(Commands::Play(args)) => play(args)?,
        None => play(PlayArgs::default())?,
    }
    Ok(())
}

fn play(args: PlayArgs) -> anyhow::Result<()> {
    let config = GameConfig {
        black: args.black,
        white: args.white,
        depth: args.depth,
        pruning: !args.no_pruning,
    };
    let mut game = Game::new(config).context("invalid game settings")?;

    println!("{INTRO}");
    let stdin = io::stdin();
    game.run(stdin.lock(), io::stdout())?;
    Ok(())
}
