use crate::game_state::chess_types::*;

/// A legal `(from, to)` pair together with what it would capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    /// Captured piece, including a pawn taken en passant.
    pub captured: Option<Piece>,
}

impl CandidateMove {
    #[inline]
    pub fn capture_value(&self) -> i32 {
        self.captured.map_or(0, |piece| piece.kind.value())
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
