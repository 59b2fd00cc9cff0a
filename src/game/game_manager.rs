//! Turn orchestration and the single commit path for every move.
//!
//! `GameManager` owns the board, the en-passant target, the side to move,
//! the reversible history and the game status. Human input and engines both
//! go through `try_move`; `undo` reverses exactly one committed half-move.

use log::{debug, trace};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameSnapshot, GameStatus, Winner};
use crate::move_generation::legal_moves_king::castling_rook_squares;
use crate::move_generation::legal_moves_pawn::en_passant_victim;
use crate::move_generation::move_validator::MoveValidator;
use crate::utils::algebraic::parse_long_algebraic;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameManager {
    board: Board,
    turn: Color,
    status: GameStatus,
    en_passant_target: Option<Square>,
    history: Vec<MoveRecord>,
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}

impl GameManager {
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
            status: GameStatus::InProgress,
            en_passant_target: None,
            history: Vec::new(),
        }
    }

    /// Start from an arbitrary position with `turn` to move. Terminal
    /// conditions are evaluated immediately, as if the other side had just
    /// moved.
    pub fn from_position(board: Board, turn: Color) -> Self {
        let mut game = Self {
            board,
            turn,
            status: GameStatus::InProgress,
            en_passant_target: None,
            history: Vec::new(),
        };
        game.status = game.evaluate_status(turn.opposite());
        game
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Rules view bound to this game's board and en-passant target.
    #[inline]
    pub fn validator(&self) -> MoveValidator<'_> {
        MoveValidator::new(&self.board, self.en_passant_target)
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn is_white_turn(&self) -> bool {
        self.turn == Color::White
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Winner> {
        self.status.winner()
    }

    /// `"White"`, `"Black"`, `"Draw"`, or empty while the game is running.
    pub fn winner_label(&self) -> &'static str {
        self.winner().map_or("", Winner::label)
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            turn: self.turn,
            status: self.status,
            en_passant_target: self.en_passant_target,
        }
    }

    /// Whether the side to move is in check. Fails if that side has no king
    /// while the game is still in progress.
    pub fn is_in_check(&self) -> ChessResult<bool> {
        if !self.is_game_over() && self.board.king_square(self.turn).is_none() {
            return Err(ChessError::MissingKing(self.turn));
        }
        Ok(self.validator().is_in_check(self.turn))
    }

    /// Validate and commit `from -> to` for the side to move. Returns `true`
    /// whenever the move was applied, including moves that end the game.
    pub fn try_move(&mut self, from: Square, to: Square) -> bool {
        if self.is_game_over() {
            trace!("refused {from}->{to}: game is over");
            return false;
        }
        let Some(piece) = self.board.piece_at(from) else {
            trace!("refused {from}->{to}: empty origin");
            return false;
        };
        if !self.validator().is_legal(from, to, self.turn) {
            trace!("refused {from}->{to}: illegal for {}", self.turn);
            return false;
        }

        let before = self.snapshot();

        let en_passant_capture = en_passant_victim(&self.board, self.en_passant_target, from, to)
            .and_then(|square| {
                let victim = self.board.piece_at(square)?;
                self.board.place(square, None);
                Some((square, victim))
            });

        let Some(primary) = self.board.commit(from, to) else {
            if let Some((square, victim)) = en_passant_capture {
                self.board.place(square, Some(victim));
            }
            return false;
        };

        let promoted_pawn = if piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row()
        {
            let advanced = Piece {
                has_moved: true,
                ..primary.moved
            };
            self.board
                .place(to, Some(advanced.promoted_to(PieceKind::Queen)));
            Some(primary.moved)
        } else {
            None
        };

        let castling_rook = if piece.kind == PieceKind::King && (to.col - from.col).abs() == 2 {
            let (rook_from, rook_to) = castling_rook_squares(from, to);
            self.board.commit(rook_from, rook_to)
        } else {
            None
        };

        self.en_passant_target =
            if piece.kind == PieceKind::Pawn && (to.row - from.row).abs() == 2 {
                Some(Square::new((from.row + to.row) / 2, from.col))
            } else {
                None
            };

        self.history.push(MoveRecord {
            primary,
            en_passant_capture,
            castling_rook,
            promoted_pawn,
            before,
        });

        self.status = self.evaluate_status(self.turn);
        match self.status {
            GameStatus::InProgress => self.turn = self.turn.opposite(),
            GameStatus::Over(winner) => {
                debug!("game over after {} half-moves: {winner}", self.move_count());
            }
        }
        true
    }

    /// Parse `"e2e4"` and play it. Parse failures are errors; an illegal
    /// move is `Ok(false)`.
    pub fn try_move_algebraic(&mut self, text: &str) -> ChessResult<bool> {
        let (from, to) = parse_long_algebraic(text)?;
        Ok(self.try_move(from, to))
    }

    /// Reverse the most recent committed half-move.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };

        if let Some(rook) = &record.castling_rook {
            self.board.undo(rook);
        }
        self.board.undo(&record.primary);
        if let Some((square, victim)) = record.en_passant_capture {
            self.board.place(square, Some(victim));
        }
        if let Some(pawn) = record.promoted_pawn {
            self.board.place(record.primary.from, Some(pawn));
        }

        self.turn = record.before.turn;
        self.status = record.before.status;
        self.en_passant_target = record.before.en_passant_target;
        true
    }

    /// Terminal classification after `mover` has moved, in fixed order:
    /// king captured, bare kings, checkmate, stalemate.
    fn evaluate_status(&self, mover: Color) -> GameStatus {
        let next = mover.opposite();

        if self.board.king_square(next).is_none() {
            return GameStatus::Over(Winner::from_color(mover));
        }
        if self.board.king_square(mover).is_none() {
            return GameStatus::Over(Winner::from_color(next));
        }

        if self.board.piece_count() == 2 {
            return GameStatus::Over(Winner::Draw);
        }

        let validator = self.validator();
        if validator.is_in_check(next) {
            if !validator.has_any_legal_move(next) {
                return GameStatus::Over(Winner::from_color(mover));
            }
        } else if !validator.has_any_legal_move(next) {
            return GameStatus::Over(Winner::Draw);
        }

        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::GameManager;
    use crate::errors::ChessError;
    use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
    use crate::game_state::game_state::{GameStatus, Winner};

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    fn layout(rows: [&str; 8]) -> Board {
        Board::from_layout(&rows).expect("layout should parse")
    }

    /// Play `from -> to`, check that undo restores everything, then replay.
    fn play_with_round_trip(game: &mut GameManager, from: Square, to: Square) {
        let before = game.clone();
        assert!(game.try_move(from, to), "{from}->{to} should be legal");
        assert!(game.undo());
        assert_eq!(*game, before, "undo of {from}->{to} should be exact");
        assert!(game.try_move(from, to));
    }

    #[test]
    fn new_game_is_the_standard_start() {
        let game = GameManager::new();
        assert!(game.board().is_starting_layout());
        assert!(game.is_white_turn());
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.winner_label(), "");
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.en_passant_target(), None);
    }

    #[test]
    fn turns_alternate_and_wrong_side_is_refused() {
        let mut game = GameManager::new();
        assert!(!game.try_move(sq(1, 4), sq(3, 4)));
        assert!(!game.try_move(sq(4, 4), sq(3, 4)));
        assert!(game.try_move(sq(6, 4), sq(4, 4)));
        assert!(!game.is_white_turn());
        assert_eq!(game.en_passant_target(), Some(sq(5, 4)));
        assert!(game.try_move(sq(0, 6), sq(2, 5)));
        assert!(game.is_white_turn());
        assert_eq!(game.en_passant_target(), None);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn undo_on_empty_history_is_refused() {
        let mut game = GameManager::new();
        assert!(!game.undo());
    }

    #[test]
    fn has_moved_set_once_and_restored_by_undo() {
        let mut game = GameManager::new();
        assert!(game.try_move(sq(7, 6), sq(5, 5)));
        let knight = game.piece_at(sq(5, 5)).expect("knight on f3");
        assert!(knight.has_moved);
        assert!(game.undo());
        let knight = game.piece_at(sq(7, 6)).expect("knight back on g1");
        assert!(!knight.has_moved);
    }

    #[test]
    fn en_passant_only_on_the_following_half_move() {
        let opening = [
            (sq(6, 0), sq(5, 0)),
            (sq(1, 3), sq(3, 3)),
            (sq(6, 7), sq(5, 7)),
            (sq(3, 3), sq(4, 3)),
            (sq(6, 4), sq(4, 4)),
        ];

        let mut game = GameManager::new();
        for (from, to) in opening {
            assert!(game.try_move(from, to));
        }
        assert_eq!(game.en_passant_target(), Some(sq(5, 4)));

        let mut capturing = game.clone();
        play_with_round_trip(&mut capturing, sq(4, 3), sq(5, 4));
        assert!(capturing.piece_at(sq(4, 4)).is_none());
        let capturer = capturing.piece_at(sq(5, 4)).expect("black pawn on e3");
        assert_eq!(capturer.kind, PieceKind::Pawn);
        assert_eq!(capturer.color, Color::Black);
        let record = capturing.history().last().expect("capture recorded");
        assert!(record.is_en_passant());
        assert_eq!(record.captured().map(|piece| piece.color), Some(Color::White));

        // One tempo later the right has expired.
        assert!(game.try_move(sq(1, 0), sq(2, 0)));
        assert!(game.try_move(sq(6, 1), sq(5, 1)));
        assert_eq!(game.en_passant_target(), None);
        assert!(!game.try_move(sq(4, 3), sq(5, 4)));
    }

    #[test]
    fn double_step_past_an_unadvanced_pawn_is_not_en_passant() {
        let mut game = GameManager::new();
        assert!(game.try_move(sq(6, 0), sq(5, 0)));
        assert!(game.try_move(sq(1, 3), sq(3, 3)));
        assert!(game.try_move(sq(6, 4), sq(4, 4)));
        assert_eq!(game.en_passant_target(), Some(sq(5, 4)));

        // The d5 pawn is one row short of the en-passant rank: its only
        // diagonals are the ordinary capture on e4 and the empty c4.
        let validator = game.validator();
        assert!(!validator.is_legal(sq(3, 3), sq(4, 2), Color::Black));
        assert!(validator.is_legal(sq(3, 3), sq(4, 4), Color::Black));

        assert!(game.try_move(sq(3, 3), sq(4, 4)));
        let record = game.history().last().expect("capture recorded");
        assert!(!record.is_en_passant());
        assert_eq!(record.captured().map(|piece| piece.color), Some(Color::White));
        assert_eq!(game.board().piece_count(), 31);
        assert_eq!(game.en_passant_target(), None);
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = GameManager::new();
        assert!(game.try_move(sq(6, 5), sq(5, 5)));
        assert!(game.try_move(sq(1, 4), sq(3, 4)));
        assert!(game.try_move(sq(6, 6), sq(4, 6)));
        let before_mate = game.clone();
        assert!(game.try_move(sq(0, 3), sq(4, 7)));

        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(Winner::Black));
        assert_eq!(game.winner_label(), "Black");
        assert_eq!(game.move_count(), 4);
        assert!(game.validator().is_checkmate(Color::White));
        assert!(!game.try_move(sq(6, 0), sq(5, 0)));
        assert!(!game.try_move(sq(1, 0), sq(2, 0)));

        assert!(game.undo());
        assert_eq!(game, before_mate);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn castling_moves_the_rook_and_undoes_exactly() {
        let board = layout([
            "r...k..r", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "R...K..R",
        ]);
        let mut game = GameManager::from_position(board, Color::White);
        play_with_round_trip(&mut game, sq(7, 4), sq(7, 6));

        let king = game.piece_at(sq(7, 6)).expect("king on g1");
        let rook = game.piece_at(sq(7, 5)).expect("rook on f1");
        assert_eq!(king.kind, PieceKind::King);
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(king.has_moved && rook.has_moved);
        assert!(game.piece_at(sq(7, 7)).is_none());
        assert!(game.history().last().is_some_and(|record| record.is_castling()));

        play_with_round_trip(&mut game, sq(0, 4), sq(0, 2));
        assert_eq!(game.piece_at(sq(0, 3)).map(|piece| piece.kind), Some(PieceKind::Rook));
        assert!(game.piece_at(sq(0, 0)).is_none());
    }

    #[test]
    fn castling_lost_after_king_returns() {
        let board = layout([
            "r...k..r", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "R...K..R",
        ]);
        let mut game = GameManager::from_position(board, Color::White);
        assert!(game.try_move(sq(7, 4), sq(7, 5)));
        assert!(game.try_move(sq(1, 0), sq(2, 0)));
        assert!(game.try_move(sq(7, 5), sq(7, 4)));
        assert!(game.try_move(sq(2, 0), sq(3, 0)));
        assert!(!game.try_move(sq(7, 4), sq(7, 6)));
        assert!(!game.try_move(sq(7, 4), sq(7, 2)));
    }

    #[test]
    fn promotion_makes_a_queen_and_undo_returns_the_pawn() {
        let board = layout([
            "........", "P.......", "........", ".......k", "........", "........", "........",
            "....K...",
        ]);
        let mut game = GameManager::from_position(board, Color::White);
        let pawn = game.piece_at(sq(1, 0)).expect("pawn on a7");

        play_with_round_trip(&mut game, sq(1, 0), sq(0, 0));
        let queen = game.piece_at(sq(0, 0)).expect("queen on a8");
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.color, Color::White);
        assert_eq!(queen.id, pawn.id);
        let record = game.history().last().expect("promotion recorded");
        assert!(record.is_promotion());
        assert_eq!(record.promoted_pawn, Some(pawn));

        assert!(game.undo());
        assert_eq!(game.piece_at(sq(1, 0)), Some(pawn));
        assert!(game.piece_at(sq(0, 0)).is_none());
    }

    #[test]
    fn capture_promotion_for_black() {
        let board = layout([
            "....k...", "........", "........", "........", "........", "........", "......p.",
            "K......R",
        ]);
        let mut game = GameManager::from_position(board, Color::Black);
        play_with_round_trip(&mut game, sq(6, 6), sq(7, 7));
        let queen = game.piece_at(sq(7, 7)).expect("queen on h1");
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.color, Color::Black);
        assert_eq!(
            game.history().last().and_then(|record| record.captured()).map(|piece| piece.kind),
            Some(PieceKind::Rook)
        );
    }

    #[test]
    fn bare_kings_draw_without_a_move() {
        let board = layout([
            "....k...", "........", "........", "........", "........", "........", "........",
            "....K...",
        ]);
        let game = GameManager::from_position(board, Color::White);
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(Winner::Draw));
    }

    #[test]
    fn capturing_the_last_piece_draws() {
        let board = layout([
            "....k...", "........", "........", "........", "........", "........", "...p....",
            "....K...",
        ]);
        let mut game = GameManager::from_position(board, Color::White);
        assert!(!game.is_game_over());
        assert!(game.try_move(sq(7, 4), sq(6, 3)));
        assert_eq!(game.winner(), Some(Winner::Draw));
        assert!(game.is_white_turn());
    }

    #[test]
    fn stalemate_is_a_draw() {
        let board = layout([
            ".......k", "........", "........", "......Q.", "........", "........", "........",
            "K.......",
        ]);
        let mut game = GameManager::from_position(board, Color::White);
        assert!(game.try_move(sq(3, 6), sq(2, 6)));
        assert_eq!(game.winner(), Some(Winner::Draw));
        assert_eq!(game.winner_label(), "Draw");
    }

    #[test]
    fn king_capture_wins_immediately() {
        // Black's king was left en prise; White takes it.
        let board = layout([
            "....k...", "........", "........", "........", "........", "........", "........",
            "....RK..",
        ]);
        let mut game = GameManager::from_position(board, Color::White);
        assert!(!game.is_game_over());
        assert!(game.validator().is_in_check(Color::Black));
        assert!(game.try_move(sq(7, 4), sq(0, 4)));
        assert_eq!(game.winner(), Some(Winner::White));
        assert!(game.is_white_turn());
    }

    #[test]
    fn round_trip_through_a_long_sequence() {
        let moves = [
            (sq(6, 4), sq(4, 4)),
            (sq(1, 4), sq(3, 4)),
            (sq(7, 6), sq(5, 5)),
            (sq(0, 1), sq(2, 2)),
            (sq(7, 5), sq(4, 2)),
            (sq(0, 5), sq(3, 2)),
            (sq(7, 4), sq(7, 6)),
            (sq(0, 6), sq(2, 5)),
            (sq(5, 5), sq(3, 4)),
            (sq(2, 2), sq(3, 4)),
        ];
        let mut game = GameManager::new();
        let mut states = vec![game.clone()];
        for (from, to) in moves {
            play_with_round_trip(&mut game, from, to);
            states.push(game.clone());
        }
        while let Some(expected) = states.pop() {
            assert_eq!(game, expected);
            if !game.undo() {
                break;
            }
        }
        assert!(states.is_empty());
        assert!(game.board().is_starting_layout());
    }

    #[test]
    fn algebraic_entry_point() {
        let mut game = GameManager::new();
        assert_eq!(game.try_move_algebraic("e2e4"), Ok(true));
        assert_eq!(game.try_move_algebraic("e2e4"), Ok(false));
        assert!(game.try_move_algebraic("e9e4").is_err());
        assert_eq!(game.piece_at(sq(4, 4)).map(|piece| piece.kind), Some(PieceKind::Pawn));
    }

    #[test]
    fn reset_discards_everything() {
        let mut game = GameManager::new();
        assert!(game.try_move(sq(6, 4), sq(4, 4)));
        game.reset();
        assert_eq!(game, GameManager::new());
    }

    #[test]
    fn missing_king_is_an_invariant_error() {
        let board = layout([
            "....k...", "........", "........", "........", "........", "........", "........",
            "........",
        ]);
        let finished = GameManager::from_position(board, Color::White);
        // A side without a king has already lost.
        assert_eq!(finished.winner(), Some(Winner::Black));
        assert_eq!(finished.is_in_check(), Ok(true));

        let corrupted = GameManager {
            board,
            turn: Color::White,
            status: GameStatus::InProgress,
            en_passant_target: None,
            history: Vec::new(),
        };
        assert_eq!(
            corrupted.is_in_check(),
            Err(ChessError::MissingKing(Color::White))
        );
        assert_eq!(GameManager::new().is_in_check(), Ok(false));
    }
}
