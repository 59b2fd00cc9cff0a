//! Game-level status flags snapshotted by every history record.
//!
//! A game is `InProgress` until a terminal condition is reached; `Over` only
//! ever reverts through an explicit undo.

use std::fmt;

use crate::game_state::chess_types::{Color, Square};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl Winner {
    #[inline]
    pub const fn from_color(color: Color) -> Self {
        match color {
            Color::White => Winner::White,
            Color::Black => Winner::Black,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Winner::White => "White",
            Winner::Black => "Black",
            Winner::Draw => "Draw",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Over(Winner),
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Over(_))
    }

    #[inline]
    pub const fn winner(self) -> Option<Winner> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Over(winner) => Some(winner),
        }
    }
}

/// Game fields taken before a move so undo can put them back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub turn: Color,
    pub status: GameStatus,
    pub en_passant_target: Option<Square>,
}
