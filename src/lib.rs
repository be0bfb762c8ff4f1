//! # arcana-core
//!
//! A deterministic rules engine for Arcana, a two-player collectible
//! card game.
//!
//! ## Design Principles
//!
//! 1. **One Writer**: `GameState` changes only through `Arcana::apply`,
//!    which validates an action in full and returns the successor state.
//!    A rejected action is a typed `RuleError` and an untouched input;
//!    no partial mutation is ever observable.
//!
//! 2. **Determinism**: the only randomness in the rules is deck
//!    shuffling, driven by a seeded, serializable RNG. A seed plus an
//!    action sequence replays a game exactly.
//!
//! 3. **Data Apart From Behavior**: `GameState` is plain data (`Clone`
//!    plus serde, O(1) action history via `im`). Card behavior lives in
//!    hooks registered with the rules value, and hooks answer with
//!    bounded `StateDelta`s the engine applies through its own clamping
//!    primitives.
//!
//! ## Modules
//!
//! - `core`: Players, phases, actions, errors, state, RNG
//! - `zones`: Hand, deck, discard pile, spirit slots, spell-stack slots
//! - `cards`: Card definitions, the catalog, in-play spirit instances
//! - `ledger`: The bounded Aether pool
//! - `combat`: Attack and spell-activation resolution
//! - `hooks`: `CardEffect` and `PlayerAbility` extension traits
//! - `rules`: The `Arcana` engine and the game builder
//! - `sets`: Ready-made card sets

pub mod core;
pub mod zones;
pub mod cards;
pub mod ledger;
pub mod combat;
pub mod hooks;
pub mod rules;
pub mod sets;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, AttackTarget, GameRng, GameRngState, GameState, Phase, PlayerId,
    PlayerMap, PlayerState, RuleError, TurnEffect, TurnState,
};

pub use crate::zones::{PlayerZones, SpellStack, SPELL_SLOT_COUNT, SPIRIT_SLOT_COUNT, STACK_LIMIT};

pub use crate::cards::{
    ActivationCost, CardCatalog, CardDefinition, CardId, CardKind, SpiritInstance, SpiritStats,
};

pub use crate::ledger::{AetherPool, AETHER_CAP};

pub use crate::combat::check_attack_target;

pub use crate::hooks::{
    CardEffect, DeltaOp, EffectContext, HookRegistry, PlayerAbility, StateDelta,
};

pub use crate::rules::{
    Arcana, ArcanaBuilder, GameResult, ATTUNEMENT_GAIN, DEFAULT_STARTING_LIFE, OPENING_HAND_SIZE,
};
