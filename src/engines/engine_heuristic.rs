//! Tier 3: single-ply score of captured material and centralisation.
//!
//! `score = 10 * captured_value - 2 * manhattan(destination, centre)`. The
//! first move reaching the best score wins; there is no randomness.

use log::debug;

use crate::engines::engine_trait::Engine;
use crate::game::game_manager::GameManager;
use crate::game_state::chess_rules::BOARD_CENTER;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::CandidateMove;

pub const CAPTURE_WEIGHT: i32 = 10;
pub const CENTER_DISTANCE_WEIGHT: i32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEngine;

impl HeuristicEngine {
    #[inline]
    pub fn score(mv: &CandidateMove) -> i32 {
        CAPTURE_WEIGHT * mv.capture_value()
            - CENTER_DISTANCE_WEIGHT * mv.to.manhattan_distance(BOARD_CENTER)
    }
}

impl Engine for HeuristicEngine {
    fn name(&self) -> &str {
        "Heuristic"
    }

    fn choose_move(&mut self, game: &GameManager, color: Color) -> Option<CandidateMove> {
        let mut best: Option<(i32, CandidateMove)> = None;
        for mv in game.validator().legal_moves(color) {
            let score = Self::score(&mv);
            if best.is_none_or(|(best_score, _)| score > best_score) {
                best = Some((score, mv));
            }
        }

        if let Some((score, mv)) = best {
            debug!("heuristic_engine {color} {}->{} score {score}", mv.from, mv.to);
        }
        best.map(|(_, mv)| mv)
    }
}

#[cfg(test)]
mod tests {
    use super::HeuristicEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game::game_manager::GameManager;
    use crate::game_state::chess_types::{Board, Color, Square};

    #[test]
    fn opening_choice_is_deterministic_and_central() {
        let game = GameManager::new();
        let first = HeuristicEngine.choose_move(&game, Color::White);
        let second = HeuristicEngine.choose_move(&game, Color::White);
        assert_eq!(first, second);

        // d2-d4 is the only opening move landing one step from the centre.
        let choice = first.expect("start position has moves");
        assert_eq!(choice.from, Square::new(6, 3));
        assert_eq!(choice.to, Square::new(4, 3));
        assert_eq!(HeuristicEngine::score(&choice), -2);
    }

    #[test]
    fn captures_outweigh_centralisation() {
        let rows = [
            "....k...", "........", "........", "........", "........", "r.......", "........",
            ".N..K...",
        ];
        let board = Board::from_layout(&rows).expect("layout should parse");
        let game = GameManager::from_position(board, Color::White);
        let choice = HeuristicEngine
            .choose_move(&game, Color::White)
            .expect("moves available");
        assert_eq!(choice.to, Square::new(5, 0));
        assert_eq!(HeuristicEngine::score(&choice), 10 * 500 - 2 * 5);
    }

    #[test]
    fn no_moves_no_choice() {
        let rows = [
            ".......k", "........", "......Q.", "........", "........", "........", "........",
            "K.......",
        ];
        let board = Board::from_layout(&rows).expect("layout should parse");
        let game = GameManager::from_position(board, Color::White);
        assert!(HeuristicEngine.choose_move(&game, Color::Black).is_none());
    }
}
