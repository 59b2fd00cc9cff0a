//! Standalone AI-vs-AI series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose --player1 3 --player2 2`

use clap::Parser;
use log::LevelFilter;

use chessgame_core::engines::ai_player::AiLevel;
use chessgame_core::errors::ChessResult;
use chessgame_core::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

/// Pit two AI tiers against each other over a seeded series.
#[derive(Debug, Parser)]
#[command(name = "engine_match_series", about)]
struct Args {
    /// Level of player 1 (1 random, 2 greedy, 3 heuristic).
    #[arg(long, default_value = "3")]
    player1: u8,

    /// Level of player 2.
    #[arg(long, default_value = "2")]
    player2: u8,

    #[arg(short, long, default_value = "10")]
    games: u16,

    #[arg(long, default_value = "1234")]
    seed: u64,

    #[arg(long, default_value = "200")]
    max_plies: u16,

    /// Log each game as it starts and finishes.
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

fn main() -> ChessResult<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Info);
    }
    logger.init();

    let stats = play_engine_match_series(
        AiLevel::from_level(args.player1),
        AiLevel::from_level(args.player2),
        MatchSeriesConfig {
            games: args.games,
            base_seed: args.seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
                opening_min_plies: 2,
                opening_max_plies: 6,
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
