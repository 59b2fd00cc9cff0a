//! Canonical chess-rule constants.
//!
//! Holds the standard starting layout used to initialize and validate board
//! setup, and the fixed geometry shared by the rules layer.

use crate::game_state::chess_types::{PieceKind, Square};

/// Piece order on both back ranks, column 0 through 7.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard starting position, row 0 first. Upper case is White.
pub const STARTING_LAYOUT: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
    "RNBQKBNR",
];

/// Heuristic tier centre of attraction.
pub const BOARD_CENTER: Square = Square::new(3, 3);

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
