use crate::game_state::chess_types::*;

/// Pawn movement shape: single push, double push from the home row, diagonal
/// capture, or diagonal step onto the en-passant target.
pub fn pawn_shape(
    board: &Board,
    en_passant_target: Option<Square>,
    pawn: Piece,
    from: Square,
    to: Square,
) -> bool {
    let forward = pawn.color.forward();
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    let destination = board.piece_at(to);

    if d_col == 0 {
        if d_row == forward {
            return destination.is_none();
        }
        if d_row == 2 * forward && from.row == pawn.color.pawn_home_row() {
            return destination.is_none() && board.is_empty_at(from.offset(forward, 0));
        }
        return false;
    }

    if d_col.abs() == 1 && d_row == forward {
        if destination.is_some_and(|piece| piece.color != pawn.color) {
            return true;
        }
        return en_passant_victim(board, en_passant_target, from, to).is_some();
    }

    false
}

/// Square of the pawn an en-passant capture `from -> to` would remove, or
/// `None` when the move is not an en-passant capture.
///
/// The victim sits on the mover's row, in the destination's column.
pub fn en_passant_victim(
    board: &Board,
    en_passant_target: Option<Square>,
    from: Square,
    to: Square,
) -> Option<Square> {
    let pawn = board.piece_at(from)?;
    if pawn.kind != PieceKind::Pawn || en_passant_target != Some(to) {
        return None;
    }
    if to.row - from.row != pawn.color.forward() || (to.col - from.col).abs() != 1 {
        return None;
    }
    if !board.is_empty_at(to) {
        return None;
    }

    let victim_square = Square::new(from.row, to.col);
    let victim = board.piece_at(victim_square)?;
    if victim.kind == PieceKind::Pawn && victim.color != pawn.color {
        Some(victim_square)
    } else {
        None
    }
}

/// Squares a pawn standing on `from` attacks, regardless of occupancy.
#[inline]
pub fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    target.row - from.row == color.forward() && (target.col - from.col).abs() == 1
}
