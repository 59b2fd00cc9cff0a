use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::bishop_shape;
use crate::move_generation::legal_moves_knight::knight_shape;
use crate::move_generation::legal_moves_pawn::pawn_attacks;
use crate::move_generation::legal_moves_queen::queen_shape;
use crate::move_generation::legal_moves_rook::rook_shape;

/// Raw reach of `piece` standing on `from`: pawns use their capture
/// diagonals, sliders respect blockers, kings reach their eight neighbours.
pub fn piece_attacks(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    if from == target {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from, target),
        PieceKind::Knight => knight_shape(from, target),
        PieceKind::Bishop => bishop_shape(board, from, target),
        PieceKind::Rook => rook_shape(board, from, target),
        PieceKind::Queen => queen_shape(board, from, target),
        PieceKind::King => {
            (target.row - from.row).abs() <= 1 && (target.col - from.col).abs() <= 1
        }
    }
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    if !square.is_on_board() {
        return false;
    }
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| piece_attacks(board, from, piece, square))
}

/// A missing king counts as being in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => true,
    }
}
