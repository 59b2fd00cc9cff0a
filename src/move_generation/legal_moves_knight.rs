use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::*;

#[inline]
pub fn knight_shape(from: Square, to: Square) -> bool {
    KNIGHT_OFFSETS
        .iter()
        .any(|&(d_row, d_col)| from.offset(d_row, d_col) == to)
}
