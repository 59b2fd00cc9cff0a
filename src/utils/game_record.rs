//! Summary row for a finished game.
//!
//! The crate does not persist anything; this is the tuple a storage layer
//! would write: mode, winner, half-move count and when the game ended.

use std::fmt;

use chrono::{DateTime, Local};

use crate::engines::ai_player::AiLevel;
use crate::game::game_manager::GameManager;

pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayer,
    VersusAi(AiLevel),
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::TwoPlayer => write!(f, "Two players"),
            GameMode::VersusAi(level) => write!(f, "AI (Level {level})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub mode: GameMode,
    /// `"White"`, `"Black"`, `"Draw"`, or empty for an abandoned game.
    pub winner: String,
    pub move_count: usize,
    pub date_played: DateTime<Local>,
}

impl GameRecord {
    pub fn from_game(game: &GameManager, mode: GameMode) -> Self {
        Self::from_game_at(game, mode, Local::now())
    }

    pub fn from_game_at(game: &GameManager, mode: GameMode, date_played: DateTime<Local>) -> Self {
        Self {
            mode,
            winner: game.winner_label().to_owned(),
            move_count: game.move_count(),
            date_played,
        }
    }

    pub fn date_label(&self) -> String {
        self.date_played.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let winner = if self.winner.is_empty() {
            "-"
        } else {
            self.winner.as_str()
        };
        write!(
            f,
            "{} | winner: {} | moves: {} | {}",
            self.mode,
            winner,
            self.move_count,
            self.date_label()
        )
    }
}
