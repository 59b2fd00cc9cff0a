//! Tier 1: uniform random choice among all legal moves.

use log::debug;
use rand::seq::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::game::game_manager::GameManager;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::CandidateMove;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
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

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game: &GameManager, color: Color) -> Option<CandidateMove> {
        let legal_moves = game.validator().legal_moves(color);
        debug!("random_engine {color} legal_moves {}", legal_moves.len());
        legal_moves.as_slice().choose(&mut self.rng).copied()
    }
}
