//! Exhaustive legal move enumeration.
//!
//! Tries every origin/destination pair through `MoveValidator::is_legal`, in
//! row-major order of origin then destination. The order is stable, which
//! the engines rely on for first-seen tie breaking.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_pawn::en_passant_victim;
use crate::move_generation::move_generator::CandidateMove;
use crate::move_generation::move_validator::MoveValidator;

pub fn generate_legal_moves(validator: &MoveValidator<'_>, color: Color) -> Vec<CandidateMove> {
    let board = validator.board();
    let mut legal = Vec::new();

    for from in Square::all() {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        if piece.color != color {
            continue;
        }
        for to in Square::all() {
            if !validator.is_legal(from, to, color) {
                continue;
            }
            let captured = board.piece_at(to).or_else(|| {
                en_passant_victim(board, validator.en_passant_target(), from, to)
                    .and_then(|square| board.piece_at(square))
            });
            legal.push(CandidateMove {
                from,
                to,
                piece,
                captured,
            });
        }
    }

    legal
}
