use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;

/// One step in any direction, never next to the enemy king, or a castling
/// move.
pub fn king_shape(board: &Board, king: Piece, from: Square, to: Square) -> bool {
    let d_row = (to.row - from.row).abs();
    let d_col = (to.col - from.col).abs();

    if d_row <= 1 && d_col <= 1 {
        return !touches_enemy_king(board, king.color, to);
    }

    d_row == 0 && d_col == 2 && castling_shape(board, king, from, to)
}

/// Kings may never stand on adjacent squares.
fn touches_enemy_king(board: &Board, color: Color, to: Square) -> bool {
    std::iter::once((0, 0))
        .chain(KING_OFFSETS)
        .filter_map(|(d_row, d_col)| board.piece_at(to.offset(d_row, d_col)))
        .any(|piece| piece.kind == PieceKind::King && piece.color != color)
}

/// Rook square and rook destination for a castling king move `from -> to`.
#[inline]
pub fn castling_rook_squares(from: Square, to: Square) -> (Square, Square) {
    if to.col > from.col {
        (Square::new(from.row, 7), Square::new(from.row, to.col - 1))
    } else {
        (Square::new(from.row, 0), Square::new(from.row, to.col + 1))
    }
}

fn castling_shape(board: &Board, king: Piece, from: Square, to: Square) -> bool {
    if king.has_moved {
        return false;
    }

    let (rook_square, _) = castling_rook_squares(from, to);
    let rook_ready = board.piece_at(rook_square).is_some_and(|rook| {
        rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
    });
    if !rook_ready {
        return false;
    }

    let step = (to.col - from.col).signum();
    let mut col = from.col + step;
    while col != rook_square.col {
        if !board.is_empty_at(Square::new(from.row, col)) {
            return false;
        }
        col += step;
    }

    // Origin, transit and destination must all be safe for the king.
    let enemy = king.color.opposite();
    [from, from.offset(0, step), to]
        .into_iter()
        .all(|sq| !is_square_attacked(board, sq, enemy))
}
