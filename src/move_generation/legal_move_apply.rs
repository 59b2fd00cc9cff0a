//! Scoped move simulation.
//!
//! A `Simulation` applies one move to a board it borrows mutably and rewinds
//! it when dropped, so every exit path of a legality probe leaves the board
//! exactly as it found it.

use std::ops::Deref;

use crate::game_state::chess_types::*;

pub struct Simulation<'a> {
    board: &'a mut Board,
    backup: Option<MoveBackup>,
    en_passant_capture: Option<(Square, Piece)>,
}

impl<'a> Simulation<'a> {
    /// Play `from -> to` on `board`, first lifting the pawn on
    /// `en_passant_victim` when the move is an en-passant capture.
    pub fn apply(
        board: &'a mut Board,
        from: Square,
        to: Square,
        en_passant_victim: Option<Square>,
    ) -> Self {
        let en_passant_capture = en_passant_victim.and_then(|square| {
            let piece = board.piece_at(square)?;
            board.place(square, None);
            Some((square, piece))
        });
        let backup = board.commit(from, to);

        Self {
            board,
            backup,
            en_passant_capture,
        }
    }

    /// False when the origin was empty and nothing moved.
    #[inline]
    pub fn is_applied(&self) -> bool {
        self.backup.is_some()
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        if let Some(backup) = self.backup.take() {
            self.board.undo(&backup);
        }
        if let Some((square, piece)) = self.en_passant_capture.take() {
            self.board.place(square, Some(piece));
        }
    }
}
