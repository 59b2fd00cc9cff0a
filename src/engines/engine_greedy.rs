//! Tier 2: take the most valuable capture available, breaking ties at
//! random. Quiet moves all score zero.

use log::debug;
use rand::seq::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::game::game_manager::GameManager;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::CandidateMove;

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(&mut self, game: &GameManager, color: Color) -> Option<CandidateMove> {
        let legal_moves = game.validator().legal_moves(color);

        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();
        for mv in legal_moves {
            let value = mv.capture_value();
            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(mv);
            } else if value == best_value {
                best_moves.push(mv);
            }
        }

        debug!(
            "greedy_engine {color} capture_value {best_value} ties {}",
            best_moves.len()
        );
        best_moves.as_slice().choose(&mut self.rng).copied()
    }
}
