//! Authoritative 8x8 grid storage and the low-level mutation primitives.
//!
//! The board knows nothing about legality. `commit`/`undo` give an exact,
//! allocation-free make/unmake pair used both by the game history and by the
//! rules layer's simulations.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{BACK_RANK, STARTING_LAYOUT};
use crate::game_state::chess_types::{Color, Piece, PieceId, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

/// Everything needed to reverse one `Board::commit`.
///
/// `moved` is the piece exactly as it was before the move, so undo restores
/// its `has_moved` flag along with its square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveBackup {
    pub moved: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl MoveBackup {
    #[inline]
    pub fn had_moved(&self) -> bool {
        self.moved.has_moved
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        let mut next_id = 0u8;
        let mut spawn = |kind: PieceKind, color: Color| {
            let piece = Piece::new(kind, color, PieceId(next_id));
            next_id += 1;
            Some(piece)
        };

        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[Color::Black.back_row() as usize][col] = spawn(*kind, Color::Black);
        }
        for col in 0..8 {
            board.squares[Color::Black.pawn_home_row() as usize][col] =
                spawn(PieceKind::Pawn, Color::Black);
        }
        for col in 0..8 {
            board.squares[Color::White.pawn_home_row() as usize][col] =
                spawn(PieceKind::Pawn, Color::White);
        }
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[Color::White.back_row() as usize][col] = spawn(*kind, Color::White);
        }

        board
    }

    /// Build a board from eight row strings (row 0 first). Upper case letters
    /// are White, lower case Black, `.` is empty. All pieces start unmoved.
    pub fn from_layout(rows: &[&str; 8]) -> ChessResult<Self> {
        let mut board = Self::empty();
        let mut next_id = 0u8;

        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != 8 {
                return Err(ChessError::InvalidLayoutRow {
                    row,
                    line: (*line).to_owned(),
                });
            }
            for (col, ch) in chars.into_iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let kind = match ch.to_ascii_lowercase() {
                    'k' => PieceKind::King,
                    'q' => PieceKind::Queen,
                    'r' => PieceKind::Rook,
                    'b' => PieceKind::Bishop,
                    'n' => PieceKind::Knight,
                    'p' => PieceKind::Pawn,
                    _ => return Err(ChessError::InvalidLayoutChar(ch)),
                };
                board.squares[row][col] = Some(Piece::new(kind, color, PieceId(next_id)));
                next_id = next_id.wrapping_add(1);
            }
        }

        Ok(board)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (row, col) = square.index()?;
        self.squares[row][col]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Unconditional overwrite. Off-board squares are ignored.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Option<Piece>) {
        if let Some((row, col)) = square.index() {
            self.squares[row][col] = piece;
        }
    }

    /// Relocate the piece on `from` to `to` and return whatever stood on `to`.
    /// No legality or same-color checks.
    pub fn move_raw(&mut self, from: Square, to: Square) -> Option<Piece> {
        self.commit(from, to).and_then(|backup| backup.captured)
    }

    /// `move_raw` that also returns what `undo` needs. `None` when the origin
    /// is empty or either square is off board, in which case nothing changed.
    pub fn commit(&mut self, from: Square, to: Square) -> Option<MoveBackup> {
        if !to.is_on_board() {
            return None;
        }
        let moved = self.piece_at(from)?;
        let captured = self.piece_at(to);

        self.place(from, None);
        self.place(
            to,
            Some(Piece {
                has_moved: true,
                ..moved
            }),
        );

        Some(MoveBackup {
            moved,
            from,
            to,
            captured,
        })
    }

    pub fn undo(&mut self, backup: &MoveBackup) {
        self.place(backup.to, backup.captured);
        self.place(backup.from, Some(backup.moved));
    }

    pub fn reset(&mut self) {
        *self = Self::starting_position();
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Layout rows in the same notation `from_layout` accepts.
    pub fn to_layout(&self) -> [String; 8] {
        std::array::from_fn(|row| {
            (0..8)
                .map(|col| match self.squares[row][col] {
                    None => '.',
                    Some(piece) => piece_char(piece),
                })
                .collect()
        })
    }

    pub fn is_starting_layout(&self) -> bool {
        self.to_layout()
            .iter()
            .zip(STARTING_LAYOUT.iter())
            .all(|(actual, expected)| actual == expected)
    }
}

fn piece_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::King => 'k',
        PieceKind::Queen => 'q',
        PieceKind::Rook => 'r',
        PieceKind::Bishop => 'b',
        PieceKind::Knight => 'n',
        PieceKind::Pawn => 'p',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
