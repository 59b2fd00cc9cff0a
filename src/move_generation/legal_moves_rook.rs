use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{is_straight_line, path_is_clear};

#[inline]
pub fn rook_shape(board: &Board, from: Square, to: Square) -> bool {
    is_straight_line(from, to) && path_is_clear(board, from, to)
}
