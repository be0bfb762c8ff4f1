//! Rules: action validation and application.
//!
//! [`Arcana`] is the only writer of [`GameState`](crate::core::GameState).
//! Drivers submit an [`Action`](crate::core::Action) on behalf of a
//! player; the engine validates it in full, applies it to a clone, and
//! returns the successor state, or a [`RuleError`](crate::core::RuleError)
//! with the input state untouched. [`ArcanaBuilder`] assembles the
//! catalog, decks, and hooks, and deals the opening hands.

mod builder;
mod engine;

pub use builder::{ArcanaBuilder, DEFAULT_STARTING_LIFE, OPENING_HAND_SIZE};
pub use engine::{Arcana, ATTUNEMENT_GAIN};

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players fell together.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}
