//! Interactive terminal game.
//!
//! Run with:
//! `cargo run --bin chessgame`
//! `cargo run --bin chessgame -- --ai 3 --ai-color black --seed 7`
//!
//! Moves are typed as `e2e4`; `undo`, `reset`, `board` and `quit` are also
//! understood. Set `RUST_LOG=debug` to see the AI's reasoning.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use log::info;

use chessgame_core::engines::ai_player::{AiLevel, AiPlayer};
use chessgame_core::game::game_manager::GameManager;
use chessgame_core::game_state::chess_types::{Color, Square};
use chessgame_core::utils::algebraic::square_to_algebraic;
use chessgame_core::utils::game_record::{GameMode, GameRecord};
use chessgame_core::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

/// Play chess in the terminal against a friend or the computer.
#[derive(Debug, Parser)]
#[command(name = "chessgame", about, version)]
struct Cli {
    /// Play against the computer at this level (1 random, 2 greedy, 3 heuristic).
    #[arg(long, value_name = "LEVEL")]
    ai: Option<u8>,

    /// Color the computer plays.
    #[arg(long, value_enum, default_value = "black")]
    ai_color: Side,

    /// Seed the computer's random choices for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut ai = cli.ai.map(|level| {
        let level = AiLevel::from_level(level);
        match cli.seed {
            Some(seed) => AiPlayer::with_seed(level, seed),
            None => AiPlayer::new(level),
        }
    });
    let ai_color: Color = cli.ai_color.into();
    let mode = match &ai {
        Some(player) => GameMode::VersusAi(player.level()),
        None => GameMode::TwoPlayer,
    };
    info!("starting {mode}");

    let mut game = GameManager::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    let mut show_board = true;

    loop {
        if let Some(player) = ai.as_mut() {
            if !game.is_game_over() && game.turn() == ai_color {
                if !player.make_best_move(&mut game, ai_color) {
                    eprintln!("{} found no move", player.engine_name());
                    break;
                }
                if let Some(record) = game.history().last() {
                    println!(
                        "{} plays {}{}",
                        player.engine_name(),
                        label(record.from()),
                        label(record.to())
                    );
                }
                show_board = true;
                continue;
            }
        }

        if show_board {
            println!("{}\n", render_game_state(&game));
            if game.is_game_over() {
                println!("{}", GameRecord::from_game(&game, mode));
                println!("type `undo`, `reset` or `quit`");
            }
            show_board = false;
        }

        print!("> ");
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = line.trim();

        match command {
            "" => {}
            "quit" | "exit" => break,
            "board" => show_board = true,
            "reset" => {
                game.reset();
                show_board = true;
            }
            "undo" => {
                if !game.undo() {
                    println!("nothing to undo");
                    continue;
                }
                // Against the computer, keep going back to the human's turn.
                if ai.is_some() && game.turn() == ai_color {
                    game.undo();
                }
                show_board = true;
            }
            text => match game.try_move_algebraic(text) {
                Ok(true) => show_board = true,
                Ok(false) => println!("illegal move: {text}"),
                Err(err) => println!("{err}"),
            },
        }
    }

    Ok(())
}

fn label(square: Square) -> String {
    square_to_algebraic(square).unwrap_or_else(|_| square.to_string())
}
