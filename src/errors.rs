//! Errors used throughout the chess engine.
//!
//! Illegal moves are never errors: they are refused with `false`. This type
//! covers malformed textual input (algebraic squares, board layouts) and the
//! one internal invariant the engine relies on, that both kings exist while
//! a game is in progress.

use thiserror::Error;

use crate::game_state::chess_types::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A square or move in long algebraic notation could not be parsed.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// A board layout row did not contain exactly eight cells.
    #[error("invalid layout row {row}: {line:?}")]
    InvalidLayoutRow { row: usize, line: String },

    /// Unknown piece letter in a board layout.
    #[error("invalid layout character: {0:?}")]
    InvalidLayoutChar(char),

    /// A king could not be located while the game claims to be in progress.
    /// This is a programming error, not a game event.
    #[error("no {0} king on the board")]
    MissingKing(Color),

    /// An AI player returned no move although the game is still running.
    #[error("{0} engine produced no move in a game still in progress")]
    EngineStalled(Color),
}

pub type ChessResult<T> = Result<T, ChessError>;
