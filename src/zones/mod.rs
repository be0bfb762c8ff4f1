//! Zone system for card locations.
//!
//! Every player has the same fixed board: a hand, a deck, a discard pile,
//! three spirit slots, and four spell slots holding stacks of identical
//! spells.
//!
//! ## Key Types
//!
//! - `PlayerZones`: One player's zones and the operations that move cards
//! - `SpellStack`: Bounded pile of 1-3 identical spell cards
//!
//! Slot and stack bounds are the `SPIRIT_SLOT_COUNT`, `SPELL_SLOT_COUNT`,
//! and `STACK_LIMIT` constants.

pub mod manager;
pub mod stack;

pub use manager::{PlayerZones, SPELL_SLOT_COUNT, SPIRIT_SLOT_COUNT};
pub use stack::{SpellStack, STACK_LIMIT};
