//! Terminal-oriented Unicode board renderer.
//!
//! Rank 8 (row 0) is printed first, so White sits at the bottom.

use crate::game::game_manager::GameManager;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameStatus;

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8i8 {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..8i8 {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece.color, piece.kind)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus a one-line status footer.
pub fn render_game_state(game: &GameManager) -> String {
    let footer = match game.status() {
        GameStatus::InProgress => {
            let check = if game.validator().is_in_check(game.turn()) {
                " (check)"
            } else {
                ""
            };
            format!("{} to move{check}", game.turn())
        }
        GameStatus::Over(winner) => format!("game over: {winner}"),
    };
    format!("{}\n{footer}", render_board(game.board()))
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
