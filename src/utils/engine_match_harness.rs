//! Minimal head-to-head AI match harness for local testing.
//!
//! Runs two `AiPlayer` tiers against each other through `GameManager`, with
//! an optional seeded random opening prefix so repeated games diverge.

use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::ai_player::{AiLevel, AiPlayer};
use crate::errors::{ChessError, ChessResult};
use crate::game::game_manager::GameManager;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::{GameStatus, Winner};
use crate::utils::algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWin,
    BlackWin,
    Draw,
    DrawMaxPlies,
}

impl MatchOutcome {
    fn from_status(status: GameStatus) -> Self {
        match status {
            GameStatus::Over(Winner::White) => MatchOutcome::WhiteWin,
            GameStatus::Over(Winner::Black) => MatchOutcome::BlackWin,
            GameStatus::Over(Winner::Draw) => MatchOutcome::Draw,
            GameStatus::InProgress => MatchOutcome::DrawMaxPlies,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    Draw,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 2,
            opening_max_plies: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_game: GameManager,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded AI-vs-AI match from the standard start.
pub fn play_engine_match(
    white: AiLevel,
    black: AiLevel,
    seed: u64,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_game_internal(GameManager::new(), white, black, seed, config, true)
}

/// Play a single seeded match from a caller-provided game, skipping the
/// random opening.
pub fn play_engine_match_from_game(
    start: GameManager,
    white: AiLevel,
    black: AiLevel,
    seed: u64,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_game_internal(start, white, black, seed, config, false)
}

fn play_engine_match_from_game_internal(
    mut game: GameManager,
    white: AiLevel,
    black: AiLevel,
    seed: u64,
    config: MatchConfig,
    apply_random_opening: bool,
) -> ChessResult<MatchResult> {
    let opening_moves_lan = if apply_random_opening {
        apply_seeded_random_opening(
            &mut game,
            seed,
            config.opening_min_plies,
            config.opening_max_plies,
        )?
    } else {
        Vec::new()
    };

    let mut white_player = AiPlayer::with_seed(white, seed);
    let mut black_player = AiPlayer::with_seed(black, seed ^ 0x0B1A_C0DE);

    let mut played_moves_lan = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        if game.is_game_over() {
            break;
        }

        let mover = game.turn();
        let plies_before = game.move_count();
        let started = Instant::now();
        let moved = match mover {
            Color::White => white_player.make_best_move(&mut game, mover),
            Color::Black => black_player.make_best_move(&mut game, mover),
        };
        let elapsed_ns = started.elapsed().as_nanos();

        if !moved {
            return Err(ChessError::EngineStalled(mover));
        }

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        if let Some(record) = game.history().get(plies_before) {
            played_moves_lan.push(move_to_long_algebraic(record.from(), record.to())?);
        }
    }

    Ok(MatchResult {
        outcome: MatchOutcome::from_status(game.status()),
        final_game: game,
        opening_moves_lan,
        played_moves_lan,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series(
    player1: AiLevel,
    player2: AiLevel,
    config: MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats> {
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let (white, black) = if player1_is_white {
            (player1, player2)
        } else {
            (player2, player1)
        };
        info!(
            "[series] game {}/{} seed={} white=level{} black=level{}",
            i + 1,
            config.games,
            seed,
            white,
            black
        );

        let result = play_engine_match(white, black, seed, config.per_game.clone())?;

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome {
            MatchOutcome::WhiteWin | MatchOutcome::BlackWin => {
                let color = if result.outcome == MatchOutcome::WhiteWin {
                    Color::White
                } else {
                    Color::Black
                };
                let player = if (color == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
            MatchOutcome::Draw => {
                stats.draws += 1;
                SeriesOutcome::Draw
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        info!(
            "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}",
            i + 1,
            config.games,
            mapped,
            stats.player1_wins,
            stats.player2_wins,
            stats.draws
        );
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Play between `min_plies` and `max_plies` uniformly random moves on `game`.
fn apply_seeded_random_opening(
    game: &mut GameManager,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> ChessResult<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves_lan = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        if game.is_game_over() {
            break;
        }
        let legal_moves = game.validator().legal_moves(game.turn());
        if legal_moves.is_empty() {
            break;
        }

        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        if !game.try_move(chosen.from, chosen.to) {
            return Err(ChessError::EngineStalled(game.turn()));
        }
        opening_moves_lan.push(move_to_long_algebraic(chosen.from, chosen.to)?);
    }

    Ok(opening_moves_lan)
}
