//! Engine abstraction shared by the AI tiers.
//!
//! An engine only *chooses*: it sees the game through a shared reference and
//! returns a candidate. Committing the choice is the caller's job, which
//! keeps the board untouched during selection.

use crate::game::game_manager::GameManager;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::CandidateMove;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Pick a legal move for `color`, or `None` when it has none.
    fn choose_move(&mut self, game: &GameManager, color: Color) -> Option<CandidateMove>;
}
