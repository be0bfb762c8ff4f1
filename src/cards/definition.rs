//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its kind
//! (Spirit or Spell), its combat statistics, and its activation-cost
//! model. Cards in the hand, deck, and discard pile are represented by
//! `CardId` alone; the definition is the single source of truth for
//! everything printed on the card.
//!
//! Instance-specific data (damage tokens, attack flags) is stored
//! separately in `SpiritInstance` and exists only while a spirit is in
//! play.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// This identifies the "printing" of a card (e.g. "Frost Wyrm"), not a
/// specific copy in a game. Two copies of the same card are
/// indistinguishable outside of play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Combat statistics printed on a Spirit card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpiritStats {
    /// Damage dealt per attack.
    pub power: u8,
    /// Damage tokens required to destroy the spirit.
    pub health: u8,
}

/// What kind of card this is.
///
/// Spirits carry combat statistics; spells carry nothing beyond their
/// catalog entry; their behavior lives in a registered effect hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// A creature summoned into a spirit slot.
    Spirit(SpiritStats),
    /// A spell prepared into a spell-slot stack.
    Spell,
}

impl CardKind {
    /// Whether this is a Spirit card.
    #[must_use]
    pub const fn is_spirit(&self) -> bool {
        matches!(self, CardKind::Spirit(_))
    }

    /// Whether this is a Spell card.
    #[must_use]
    pub const fn is_spell(&self) -> bool {
        matches!(self, CardKind::Spell)
    }
}

/// Aether cost model for activating a card.
///
/// The cost of an activation is a pure function of the number of copies
/// consumed; the combat resolver asks the catalog and never hardcodes a
/// formula. Spirits attack at `copies = 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivationCost {
    /// Cost scales linearly: `n` Aether per copy consumed.
    PerCopy(u8),
    /// Flat cost regardless of how many copies are consumed.
    Flat(u8),
}

impl ActivationCost {
    /// The Aether price of consuming `copies` copies.
    #[must_use]
    pub const fn price(self, copies: usize) -> u8 {
        match self {
            ActivationCost::PerCopy(per) => per.saturating_mul(copies as u8),
            ActivationCost::Flat(cost) => cost,
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use arcana_core::cards::{CardDefinition, CardId};
///
/// let wyrm = CardDefinition::spirit(CardId::new(1), "Frost Wyrm", 2, 4, 12);
/// assert!(wyrm.kind.is_spirit());
/// assert_eq!(wyrm.cost.price(1), 2);
///
/// let storm = CardDefinition::spell(CardId::new(2), "Firestorm", 3);
/// assert_eq!(storm.cost.price(2), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Spirit or Spell, with kind-specific statistics.
    pub kind: CardKind,

    /// Activation cost model.
    pub cost: ActivationCost,
}

impl CardDefinition {
    /// Create a Spirit definition with a linear activation cost.
    #[must_use]
    pub fn spirit(id: CardId, name: impl Into<String>, cost: u8, power: u8, health: u8) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CardKind::Spirit(SpiritStats { power, health }),
            cost: ActivationCost::PerCopy(cost),
        }
    }

    /// Create a Spell definition with a linear (per-copy) activation cost.
    #[must_use]
    pub fn spell(id: CardId, name: impl Into<String>, cost_per_copy: u8) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CardKind::Spell,
            cost: ActivationCost::PerCopy(cost_per_copy),
        }
    }

    /// Override the cost model (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: ActivationCost) -> Self {
        self.cost = cost;
        self
    }

    /// The spirit statistics, if this is a Spirit card.
    #[must_use]
    pub const fn spirit_stats(&self) -> Option<SpiritStats> {
        match self.kind {
            CardKind::Spirit(stats) => Some(stats),
            CardKind::Spell => None,
        }
    }
}
