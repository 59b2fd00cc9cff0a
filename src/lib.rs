//! Crate root module declarations for the chess game core.
//!
//! Exposes the board model, the rules oracle, the game state machine, the
//! AI tiers, and text helpers so binaries, tests, and front ends can import
//! stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod move_validator;
}

pub mod game {
    pub mod game_manager;
}

pub mod engines {
    pub mod ai_player;
    pub mod engine_greedy;
    pub mod engine_heuristic;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod game_record;
    pub mod render_game_state;
}
