//! Extension hooks: card effects and player abilities.
//!
//! The engine knows phases, resources, zones, and combat; it does not
//! know what any particular card does. Card behavior plugs in through
//! the traits here, registered against card ids (or a player) in a
//! [`HookRegistry`] owned by the rules value. Hooks read the state and
//! answer with a [`StateDelta`]; they never mutate anything themselves.

mod delta;
mod registry;

pub use delta::{DeltaOp, StateDelta};
pub use registry::HookRegistry;

use crate::cards::CardId;
use crate::core::{GameState, PlayerId};

/// What the engine knows when it invokes a card hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectContext {
    /// The player whose card is acting.
    pub player: PlayerId,

    /// The acting card.
    pub card: CardId,

    /// Board slot the card occupies. For a spell activation this is the
    /// stack's slot; for a counter-attack it is the defender's slot.
    pub slot: usize,

    /// Copies consumed by a spell activation. Always 1 for counter-attacks.
    pub copies: usize,
}

/// Behavior attached to a card id.
///
/// Both methods default to doing nothing, so an implementation only
/// overrides the hook it cares about. A card with no registered effect
/// behaves as if both hooks returned an empty delta.
pub trait CardEffect: Send + Sync {
    /// Resolve a spell activation.
    ///
    /// Invoked exactly once per activation, with `ctx.copies` carrying
    /// how many copies were consumed together.
    fn activate(&self, _state: &GameState, _ctx: &EffectContext) -> StateDelta {
        StateDelta::new()
    }

    /// React after surviving an attack as the defender.
    ///
    /// Invoked whenever a defending Spirit with a registered effect is
    /// attacked and not destroyed. No base-set card overrides it.
    fn counter_attack(&self, _state: &GameState, _ctx: &EffectContext) -> StateDelta {
        StateDelta::new()
    }
}

/// A once-per-turn ability belonging to a player rather than a card.
pub trait PlayerAbility: Send + Sync {
    /// Resolve the ability for `player`.
    fn invoke(&self, state: &GameState, player: PlayerId) -> StateDelta;
}
