//! Square conversions for long algebraic coordinates.
//!
//! File `a..h` is column `0..7`; rank `8` is row 0 and rank `1` is row 7, so
//! White's back rank is rank 1 as on a printed board.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert long algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Ok(Square::new(row, col))
}

/// Convert an on-board square to long algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if !square.is_on_board() {
        return Err(ChessError::InvalidAlgebraic(square.to_string()));
    }

    let file_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'8' - square.row as u8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Parse a move such as `"e2e4"`. A trailing `q` is accepted since pawns
/// always promote to a queen; any other suffix is rejected.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    if !text.is_ascii() {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }
    match text.len() {
        4 => {}
        5 if text[4..].eq_ignore_ascii_case("q") => {}
        _ => return Err(ChessError::InvalidAlgebraic(text.to_owned())),
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    Ok((from, to))
}

pub fn move_to_long_algebraic(from: Square, to: Square) -> ChessResult<String> {
    Ok(format!(
        "{}{}",
        square_to_algebraic(from)?,
        square_to_algebraic(to)?
    ))
}
