//! Game state: players, turn, history.
//!
//! ## PlayerState
//!
//! One player's life, Aether pool, and zones.
//!
//! ## TurnState
//!
//! Where the current turn stands: phase, active player, the actions taken
//! so far this phase (per-phase limits are enforced against this log), and
//! the until-end-of-turn effect records.
//!
//! ## GameState
//!
//! The complete, authoritative state. It evolves only through
//! `Arcana::apply`, which clones it per action; the `im` action history
//! keeps that clone O(1) no matter how long the game runs. Everything
//! here serializes, including the RNG, so a snapshot restores mid-game.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::ledger::AetherPool;
use crate::rules::GameResult;
use crate::zones::PlayerZones;

use super::action::{Action, ActionRecord};
use super::error::RuleError;
use super::phase::Phase;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;

/// One player's life, resources, and zones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    life: u8,
    max_life: u8,

    /// Bounded Aether balance.
    pub aether: AetherPool,

    /// Hand, deck, discard pile, and board slots.
    pub zones: PlayerZones,
}

impl PlayerState {
    /// Create a player at full life with an empty pool and the given deck.
    #[must_use]
    pub fn new(starting_life: u8, deck: Vec<CardId>) -> Self {
        Self {
            life: starting_life,
            max_life: starting_life,
            aether: AetherPool::new(),
            zones: PlayerZones::with_deck(deck),
        }
    }

    /// Current life total.
    #[must_use]
    pub const fn life(&self) -> u8 {
        self.life
    }

    /// The life total heals clamp to.
    #[must_use]
    pub const fn max_life(&self) -> u8 {
        self.max_life
    }

    /// Whether this player has been reduced to zero life.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.life == 0
    }

    /// Subtract life, flooring at zero. Returns the new total.
    pub fn apply_damage(&mut self, amount: u8) -> u8 {
        self.life = self.life.saturating_sub(amount);
        self.life
    }

    /// Add life, clamping at the starting total. Returns the new total.
    pub fn heal(&mut self, amount: u8) -> u8 {
        self.life = self.life.saturating_add(amount).min(self.max_life);
        self.life
    }
}

/// An until-end-of-turn effect record.
///
/// Recorded by effect hooks, never interpreted by the engine: the payload
/// is an opaque key/value pair for drivers and hooks to read back. All
/// records are dropped when the turn ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEffect {
    /// The card whose effect recorded this.
    pub source: CardId,

    /// Effect payload key (hook-defined convention).
    pub key: String,

    /// Effect payload value.
    pub value: i64,
}

impl TurnEffect {
    /// Create a new effect record.
    #[must_use]
    pub fn new(source: CardId, key: impl Into<String>, value: i64) -> Self {
        Self {
            source,
            key: key.into(),
            value,
        }
    }
}

/// Where the current turn stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Current phase.
    pub phase: Phase,

    /// The player whose turn this is.
    pub active_player: PlayerId,

    /// Actions taken in the current phase, cleared at every phase change.
    phase_actions: Vec<Action>,

    /// Until-end-of-turn effects, cleared when the turn ends.
    effects: Vec<TurnEffect>,
}

impl TurnState {
    /// Create the state for a game opening: `Setup`, first player active.
    #[must_use]
    pub fn new(active_player: PlayerId) -> Self {
        Self {
            phase: Phase::Setup,
            active_player,
            phase_actions: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Actions taken so far this phase.
    #[must_use]
    pub fn phase_actions(&self) -> &[Action] {
        &self.phase_actions
    }

    /// Whether any action this phase satisfies `predicate`.
    pub fn took_action(&self, predicate: impl Fn(&Action) -> bool) -> bool {
        self.phase_actions.iter().any(predicate)
    }

    /// Append to the phase action log.
    pub(crate) fn log_action(&mut self, action: Action) {
        self.phase_actions.push(action);
    }

    /// Move to the next phase within this turn, clearing the phase log.
    ///
    /// Fails with `IllegalPhaseAdvance` in `Respite`; leaving `Respite`
    /// is `EndTurn`'s job.
    pub(crate) fn advance_phase(&mut self) -> Result<Phase, RuleError> {
        let next = self
            .phase
            .next_in_turn()
            .ok_or(RuleError::IllegalPhaseAdvance { phase: self.phase })?;
        self.phase = next;
        self.phase_actions.clear();
        Ok(next)
    }

    /// Start a fresh turn for `next_active`: phase back to `Attunement`,
    /// phase log and effect records cleared.
    pub(crate) fn begin_turn(&mut self, next_active: PlayerId) {
        self.phase = Phase::Attunement;
        self.active_player = next_active;
        self.phase_actions.clear();
        self.effects.clear();
    }

    /// The until-end-of-turn effects currently in force.
    #[must_use]
    pub fn effects(&self) -> &[TurnEffect] {
        &self.effects
    }

    /// Record an until-end-of-turn effect.
    pub(crate) fn record_effect(&mut self, effect: TurnEffect) {
        self.effects.push(effect);
    }
}

/// The complete, authoritative game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    players: PlayerMap<PlayerState>,

    /// Phase, active player, phase log, temporary effects.
    pub turn: TurnState,

    turn_number: u32,
    history: Vector<ActionRecord>,
    outcome: Option<GameResult>,

    /// Deterministic randomness source (deck shuffling).
    pub rng: GameRng,
}

impl GameState {
    /// Assemble a state at the start of `Setup`, turn 1.
    pub(crate) fn new(players: PlayerMap<PlayerState>, first: PlayerId, rng: GameRng) -> Self {
        Self {
            players,
            turn: TurnState::new(first),
            turn_number: 1,
            history: Vector::new(),
            outcome: None,
            rng,
        }
    }

    /// A player's state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// Mutable access for the rules pipeline.
    pub(crate) fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turn.active_player
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    /// The turn counter, starting at 1 and incrementing at every handoff.
    #[must_use]
    pub const fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every action ever applied, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The decided result, if the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.outcome
    }

    /// Whether the game has a decided result.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub(crate) fn set_outcome(&mut self, result: GameResult) {
        // The first decided outcome stands
        if self.outcome.is_none() {
            self.outcome = Some(result);
        }
    }

    /// Append a record to the permanent action history.
    ///
    /// The phase log is separate (`turn.log_action`): phase-ending
    /// actions reach the history but never any phase log.
    pub(crate) fn push_history(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Draw for `player`, recycling the discard pile if needed.
    pub(crate) fn draw_card(&mut self, player: PlayerId) -> Result<CardId, RuleError> {
        let Self { players, rng, .. } = self;
        players[player].zones.draw(rng)
    }

    /// Hand the turn to the opponent: flags reset, effects expire,
    /// counter up, phase back to `Attunement`.
    pub(crate) fn end_turn(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.zones.reset_spirit_flags();
        }
        self.turn_number += 1;
        let next = self.turn.active_player.opponent();
        self.turn.begin_turn(next);
    }
}
