//! The rules oracle.
//!
//! `MoveValidator` is a read-only view over a board and the en-passant
//! target owned by the game. Every self-check probe runs on a scratch copy
//! inside a `Simulation`, so the viewed board is never touched.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::Simulation;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::legal_move_shared::destination_open;
use crate::move_generation::legal_moves_bishop::bishop_shape;
use crate::move_generation::legal_moves_king::king_shape;
use crate::move_generation::legal_moves_knight::knight_shape;
use crate::move_generation::legal_moves_pawn::{en_passant_victim, pawn_shape};
use crate::move_generation::legal_moves_queen::queen_shape;
use crate::move_generation::legal_moves_rook::rook_shape;
use crate::move_generation::move_generator::CandidateMove;

#[derive(Debug, Clone, Copy)]
pub struct MoveValidator<'a> {
    board: &'a Board,
    en_passant_target: Option<Square>,
}

impl<'a> MoveValidator<'a> {
    pub fn new(board: &'a Board, en_passant_target: Option<Square>) -> Self {
        Self {
            board,
            en_passant_target,
        }
    }

    #[inline]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Full legality of `from -> to` for `mover`, including the rule that no
    /// move may leave the mover's own king attacked.
    pub fn is_legal(&self, from: Square, to: Square, mover: Color) -> bool {
        if !self.is_pseudo_legal(from, to, mover) {
            return false;
        }
        let mut scratch = *self.board;
        !self.exposes_own_king(&mut scratch, from, to, mover)
    }

    /// Everything `is_legal` checks except king safety.
    fn is_pseudo_legal(&self, from: Square, to: Square, mover: Color) -> bool {
        let Some(piece) = self.board.piece_at(from) else {
            return false;
        };
        if piece.color != mover || from == to || !to.is_on_board() {
            return false;
        }
        if !destination_open(self.board, to, mover) {
            return false;
        }
        self.shape_allows(piece, from, to)
    }

    fn shape_allows(&self, piece: Piece, from: Square, to: Square) -> bool {
        match piece.kind {
            PieceKind::Pawn => pawn_shape(self.board, self.en_passant_target, piece, from, to),
            PieceKind::Knight => knight_shape(from, to),
            PieceKind::Bishop => bishop_shape(self.board, from, to),
            PieceKind::Rook => rook_shape(self.board, from, to),
            PieceKind::Queen => queen_shape(self.board, from, to),
            PieceKind::King => king_shape(self.board, piece, from, to),
        }
    }

    /// Simulate on `scratch`, which must equal the viewed board, and report
    /// whether `mover`'s king ends up attacked. `scratch` is rewound before
    /// returning.
    fn exposes_own_king(&self, scratch: &mut Board, from: Square, to: Square, mover: Color) -> bool {
        let victim = en_passant_victim(self.board, self.en_passant_target, from, to);
        let simulated = Simulation::apply(scratch, from, to, victim);
        is_king_in_check(&simulated, mover)
    }

    #[inline]
    pub fn is_attacked(&self, square: Square, by_color: Color) -> bool {
        is_square_attacked(self.board, square, by_color)
    }

    /// A missing king counts as being in check.
    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self.board, color)
    }

    /// In check and no move gets the king out of it.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Exhaustive scan; returns as soon as one move leaves the king safe.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        let mut scratch = *self.board;
        for (from, _) in self.board.pieces_of(color) {
            for to in Square::all() {
                if self.is_pseudo_legal(from, to, color)
                    && !self.exposes_own_king(&mut scratch, from, to, color)
                {
                    return true;
                }
            }
        }
        false
    }

    pub fn legal_moves(&self, color: Color) -> Vec<CandidateMove> {
        generate_legal_moves(self, color)
    }
}
