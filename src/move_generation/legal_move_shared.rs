use crate::game_state::chess_types::*;

/// True when `from` and `to` share a row or a column.
#[inline]
pub fn is_straight_line(from: Square, to: Square) -> bool {
    from != to && (from.row == to.row || from.col == to.col)
}

/// True when `from` and `to` share a diagonal.
#[inline]
pub fn is_diagonal_line(from: Square, to: Square) -> bool {
    from != to && (to.row - from.row).abs() == (to.col - from.col).abs()
}

/// Every square strictly between `from` and `to` is empty. Callers must
/// already know the two squares are aligned.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_row = (to.row - from.row).signum();
    let step_col = (to.col - from.col).signum();

    let mut current = from.offset(step_row, step_col);
    while current != to {
        if !board.is_empty_at(current) {
            return false;
        }
        current = current.offset(step_row, step_col);
    }
    true
}

/// The destination is either empty or holds an enemy of `mover`.
#[inline]
pub fn destination_open(board: &Board, to: Square, mover: Color) -> bool {
    board.piece_at(to).is_none_or(|piece| piece.color != mover)
}
