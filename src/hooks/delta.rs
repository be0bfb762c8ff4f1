//! State deltas: the bounded mutation vocabulary for hooks.
//!
//! Hooks never touch `GameState` directly. They return a `StateDelta`,
//! a list of primitive operations drawn from a fixed vocabulary, and
//! the engine applies those through its own clamping primitives. That
//! keeps card behavior out of the engine and engine invariants out of
//! reach of card code.
//!
//! ## Application semantics
//!
//! Ops apply in order. An op whose target has vanished by the time it
//! applies (an emptied Spirit slot, an exhausted deck mid-draw) is
//! skipped, not an error: the rest of the delta still applies.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardCatalog, CardId};
use crate::core::{GameState, PlayerId, RuleError, TurnEffect};

/// One primitive state mutation.
///
/// ## Resource ops
///
/// - `GainAether` / `DrainAether`: clamped at the pool bounds
///
/// ## Life and damage ops
///
/// - `DamageSpirit`: damage tokens, with destruction when they reach
///   the card's printed health
/// - `DamagePlayer`: floors at zero (and decides the game there)
/// - `HealPlayer`: clamps at the starting life total
///
/// ## Card ops
///
/// - `DrawCards`: draws with discard recycling, stopping early if both
///   piles run dry
///
/// ## Bookkeeping ops
///
/// - `RecordTurnEffect`: stores an opaque until-end-of-turn record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeltaOp {
    /// Credit a player's Aether pool, clamping at the cap.
    GainAether { player: PlayerId, amount: u8 },

    /// Debit a player's Aether pool, flooring at zero.
    DrainAether { player: PlayerId, amount: u8 },

    /// Put damage tokens on the Spirit in `slot`, destroying it if its
    /// printed health is reached. Skipped if the slot is empty.
    DamageSpirit {
        player: PlayerId,
        slot: usize,
        amount: u8,
    },

    /// Deal damage to a player's life total.
    DamagePlayer { player: PlayerId, amount: u8 },

    /// Heal a player, clamping at their starting life.
    HealPlayer { player: PlayerId, amount: u8 },

    /// Draw cards, recycling the discard pile as needed.
    DrawCards { player: PlayerId, count: usize },

    /// Record an until-end-of-turn effect for hooks to read back.
    RecordTurnEffect {
        source: CardId,
        key: String,
        value: i64,
    },
}

/// An ordered, bounded batch of [`DeltaOp`]s returned by a hook.
///
/// Built with chained helpers:
///
/// ```
/// use arcana_core::core::PlayerId;
/// use arcana_core::hooks::StateDelta;
///
/// let delta = StateDelta::new()
///     .damage_player(PlayerId::Second, 3)
///     .gain_aether(PlayerId::First, 1);
/// assert_eq!(delta.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDelta {
    ops: SmallVec<[DeltaOp; 4]>,
}

impl StateDelta {
    /// An empty delta (the default for unimplemented hooks).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary op.
    #[must_use]
    pub fn push(mut self, op: DeltaOp) -> Self {
        self.ops.push(op);
        self
    }

    /// Credit `player`'s Aether pool.
    #[must_use]
    pub fn gain_aether(self, player: PlayerId, amount: u8) -> Self {
        self.push(DeltaOp::GainAether { player, amount })
    }

    /// Debit `player`'s Aether pool.
    #[must_use]
    pub fn drain_aether(self, player: PlayerId, amount: u8) -> Self {
        self.push(DeltaOp::DrainAether { player, amount })
    }

    /// Damage the Spirit in `player`'s `slot`.
    #[must_use]
    pub fn damage_spirit(self, player: PlayerId, slot: usize, amount: u8) -> Self {
        self.push(DeltaOp::DamageSpirit {
            player,
            slot,
            amount,
        })
    }

    /// Damage `player`'s life total.
    #[must_use]
    pub fn damage_player(self, player: PlayerId, amount: u8) -> Self {
        self.push(DeltaOp::DamagePlayer { player, amount })
    }

    /// Heal `player`, clamped at their starting life.
    #[must_use]
    pub fn heal_player(self, player: PlayerId, amount: u8) -> Self {
        self.push(DeltaOp::HealPlayer { player, amount })
    }

    /// Draw `count` cards for `player`.
    #[must_use]
    pub fn draw_cards(self, player: PlayerId, count: usize) -> Self {
        self.push(DeltaOp::DrawCards { player, count })
    }

    /// Record an until-end-of-turn effect.
    #[must_use]
    pub fn record_effect(self, source: CardId, key: impl Into<String>, value: i64) -> Self {
        self.push(DeltaOp::RecordTurnEffect {
            source,
            key: key.into(),
            value,
        })
    }

    /// Number of ops in the delta.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the delta does nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate the ops in application order.
    pub fn iter(&self) -> impl Iterator<Item = &DeltaOp> {
        self.ops.iter()
    }

    /// Apply every op to `state` in order.
    ///
    /// Ops whose target vanished are skipped. Errors surface only for
    /// catalog inconsistencies, which `ArcanaBuilder` rules out up
    /// front.
    pub(crate) fn apply_to(
        &self,
        state: &mut GameState,
        catalog: &CardCatalog,
    ) -> Result<(), RuleError> {
        for op in &self.ops {
            match op {
                DeltaOp::GainAether { player, amount } => {
                    state.player_mut(*player).aether.gain(*amount);
                }
                DeltaOp::DrainAether { player, amount } => {
                    state.player_mut(*player).aether.drain(*amount);
                }
                DeltaOp::DamageSpirit {
                    player,
                    slot,
                    amount,
                } => {
                    let zones = &mut state.player_mut(*player).zones;
                    let Some(instance) = zones.spirit_mut(*slot).ok() else {
                        continue;
                    };
                    let card = instance.card;
                    let total = instance.apply_damage(*amount);
                    let health = catalog.spirit_stats(card)?.health;
                    if total >= health {
                        zones.destroy_spirit(*slot)?;
                    }
                }
                DeltaOp::DamagePlayer { player, amount } => {
                    state.player_mut(*player).apply_damage(*amount);
                }
                DeltaOp::HealPlayer { player, amount } => {
                    state.player_mut(*player).heal(*amount);
                }
                DeltaOp::DrawCards { player, count } => {
                    for _ in 0..*count {
                        if state.draw_card(*player).is_err() {
                            break;
                        }
                    }
                }
                DeltaOp::RecordTurnEffect { source, key, value } => {
                    state
                        .turn
                        .record_effect(TurnEffect::new(*source, key.clone(), *value));
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a StateDelta {
    type Item = &'a DeltaOp;
    type IntoIter = std::slice::Iter<'a, DeltaOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
