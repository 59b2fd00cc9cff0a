//! Computer opponent.
//!
//! `AiPlayer` owns one engine per difficulty tier and is the only place an
//! engine's choice reaches the game: the engines see `&GameManager`, and the
//! single mutation is the final `try_move`.

use std::fmt;

use log::debug;

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_heuristic::HeuristicEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game::game_manager::GameManager;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AiLevel {
    #[default]
    Random,
    Greedy,
    Heuristic,
}

impl AiLevel {
    /// 1, 2 and 3 select a tier; anything else plays randomly.
    pub fn from_level(level: u8) -> Self {
        match level {
            2 => AiLevel::Greedy,
            3 => AiLevel::Heuristic,
            _ => AiLevel::Random,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            AiLevel::Random => 1,
            AiLevel::Greedy => 2,
            AiLevel::Heuristic => 3,
        }
    }
}

impl fmt::Display for AiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

pub struct AiPlayer {
    level: AiLevel,
    engine: Box<dyn Engine>,
    /// Plays when the tier engine declines to choose. The built-in tiers only
    /// decline when no legal move exists, in which case this finds none
    /// either.
    fallback: RandomEngine,
}

impl AiPlayer {
    pub fn new(level: AiLevel) -> Self {
        let engine: Box<dyn Engine> = match level {
            AiLevel::Random => Box::new(RandomEngine::new()),
            AiLevel::Greedy => Box::new(GreedyEngine::new()),
            AiLevel::Heuristic => Box::new(HeuristicEngine),
        };
        Self {
            level,
            engine,
            fallback: RandomEngine::new(),
        }
    }

    /// Reproducible player: every random draw derives from `seed`.
    pub fn with_seed(level: AiLevel, seed: u64) -> Self {
        let engine: Box<dyn Engine> = match level {
            AiLevel::Random => Box::new(RandomEngine::with_seed(seed)),
            AiLevel::Greedy => Box::new(GreedyEngine::with_seed(seed)),
            AiLevel::Heuristic => Box::new(HeuristicEngine),
        };
        Self {
            level,
            engine,
            fallback: RandomEngine::with_seed(seed.rotate_left(17) ^ 0x5EED),
        }
    }

    pub fn level(&self) -> AiLevel {
        self.level
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Choose and play one move for `color`. Returns whether a move was
    /// committed; `false` when the game is over, it is not `color`'s turn, or
    /// `color` has no legal move.
    pub fn make_best_move(&mut self, game: &mut GameManager, color: Color) -> bool {
        if game.is_game_over() || game.turn() != color {
            return false;
        }

        let choice = match self.engine.choose_move(game, color) {
            Some(mv) => Some(mv),
            None => {
                debug!("{} found nothing for {color}, falling back", self.engine.name());
                self.fallback.choose_move(game, color)
            }
        };

        let Some(mv) = choice else {
            debug!("ai {color} has no legal move");
            return false;
        };

        debug!(
            "ai level {} plays {}->{} capture_value {}",
            self.level,
            mv.from,
            mv.to,
            mv.capture_value()
        );
        game.try_move(mv.from, mv.to)
    }
}

#[cfg(test)]
mod tests {
    use super::{AiLevel, AiPlayer};
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game::game_manager::GameManager;
    use crate::game_state::chess_types::{Board, Color, Square};
    use crate::move_generation::move_generator::CandidateMove;

    struct DecliningEngine;

    impl Engine for DecliningEngine {
        fn name(&self) -> &str {
            "Declining"
        }

        fn choose_move(&mut self, _game: &GameManager, _color: Color) -> Option<CandidateMove> {
            None
        }
    }

    #[test]
    fn declining_engine_falls_back_to_random() {
        let mut ai = AiPlayer {
            level: AiLevel::Heuristic,
            engine: Box::new(DecliningEngine),
            fallback: RandomEngine::with_seed(3),
        };
        let mut game = GameManager::new();
        assert!(ai.make_best_move(&mut game, Color::White));
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn unknown_levels_play_randomly() {
        assert_eq!(AiLevel::from_level(1), AiLevel::Random);
        assert_eq!(AiLevel::from_level(2), AiLevel::Greedy);
        assert_eq!(AiLevel::from_level(3), AiLevel::Heuristic);
        assert_eq!(AiLevel::from_level(0), AiLevel::Random);
        assert_eq!(AiLevel::from_level(9), AiLevel::Random);
        assert_eq!(AiLevel::Heuristic.to_string(), "3");
    }

    #[test]
    fn every_tier_commits_exactly_one_move() {
        for level in [AiLevel::Random, AiLevel::Greedy, AiLevel::Heuristic] {
            let mut game = GameManager::new();
            let mut ai = AiPlayer::with_seed(level, 11);
            assert!(ai.make_best_move(&mut game, Color::White));
            assert_eq!(game.move_count(), 1);
            assert_eq!(game.turn(), Color::Black);
        }
    }

    #[test]
    fn refuses_out_of_turn_and_after_the_game() {
        let mut game = GameManager::new();
        let mut ai = AiPlayer::with_seed(AiLevel::Greedy, 5);
        assert!(!ai.make_best_move(&mut game, Color::Black));
        assert_eq!(game.move_count(), 0);

        let rows = [
            "....k...", "........", "........", "........", "........", "........", "........",
            "....K...",
        ];
        let board = Board::from_layout(&rows).expect("layout should parse");
        let mut drawn = GameManager::from_position(board, Color::White);
        assert!(drawn.is_game_over());
        assert!(!ai.make_best_move(&mut drawn, Color::White));
    }

    #[test]
    fn greedy_tier_takes_the_hanging_queen() {
        let rows = [
            "....k...", "........", "........", "...q....", "........", "........", "........",
            "...RK...",
        ];
        let board = Board::from_layout(&rows).expect("layout should parse");
        let mut game = GameManager::from_position(board, Color::White);
        let mut ai = AiPlayer::with_seed(AiLevel::Greedy, 1);
        assert!(ai.make_best_move(&mut game, Color::White));
        let taker = game.piece_at(Square::new(3, 3)).expect("rook took the queen");
        assert_eq!(taker.color, Color::White);
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let play = |seed: u64| {
            let mut game = GameManager::new();
            let mut white = AiPlayer::with_seed(AiLevel::Random, seed);
            let mut black = AiPlayer::with_seed(AiLevel::Greedy, seed + 1);
            for _ in 0..20 {
                let color = game.turn();
                let ai = if color == Color::White { &mut white } else { &mut black };
                if !ai.make_best_move(&mut game, color) {
                    break;
                }
            }
            game.board().to_layout()
        };
        assert_eq!(play(99), play(99));
    }
}
