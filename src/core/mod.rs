//! Core engine types: players, phases, actions, errors, state, RNG.
//!
//! This module contains the fundamental building blocks the rest of the
//! crate composes: who is playing, where in the turn the game is, what a
//! player may ask for, why a request was refused, and the authoritative
//! game state itself.

pub mod action;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, AttackTarget};
pub use error::RuleError;
pub use phase::Phase;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, PlayerState, TurnEffect, TurnState};
