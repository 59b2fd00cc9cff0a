use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameSnapshot;

/// Single history entry for `GameManager::try_move` / `GameManager::undo`.
///
/// Reversal order is the reverse of application: rook relocation, primary
/// move, en-passant victim, promoted pawn, then the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub primary: MoveBackup,
    /// Pawn removed by an en-passant capture and the square it stood on.
    pub en_passant_capture: Option<(Square, Piece)>,
    /// Rook relocation of a castling move.
    pub castling_rook: Option<MoveBackup>,
    /// The pawn as it was before it was promoted on `primary.to`.
    pub promoted_pawn: Option<Piece>,
    pub before: GameSnapshot,
}

impl MoveRecord {
    #[inline]
    pub fn from(&self) -> Square {
        self.primary.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.primary.to
    }

    /// Piece removed by this move, wherever it stood.
    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.primary
            .captured
            .or(self.en_passant_capture.map(|(_, piece)| piece))
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.castling_rook.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promoted_pawn.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.en_passant_capture.is_some()
    }
}
