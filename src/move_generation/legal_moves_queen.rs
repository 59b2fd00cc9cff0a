use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::bishop_shape;
use crate::move_generation::legal_moves_rook::rook_shape;

#[inline]
pub fn queen_shape(board: &Board, from: Square, to: Square) -> bool {
    rook_shape(board, from, to) || bishop_shape(board, from, to)
}
