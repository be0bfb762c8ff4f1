//! In-play card instances.
//!
//! Cards only acquire per-instance state while they sit in a spirit slot.
//! Everywhere else (hand, deck, discard, spell stacks) a card is just its
//! `CardId`: two copies of the same card are indistinguishable, and a
//! destroyed spirit's damage tokens vanish with the instance when its card
//! returns to the discard pile.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// A spirit on the board.
///
/// Power and health are read from the catalog; the instance only carries
/// what changes during play.
///
/// ## Example
///
/// ```
/// use arcana_core::cards::{CardId, SpiritInstance};
///
/// let mut wyrm = SpiritInstance::summon(CardId::new(1));
/// wyrm.apply_damage(5);
/// wyrm.apply_damage(5);
///
/// assert_eq!(wyrm.damage, 10);
/// assert!(!wyrm.is_destroyed(12));
/// assert!(wyrm.is_destroyed(10));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpiritInstance {
    /// The catalog card this spirit is a copy of.
    pub card: CardId,

    /// Damage tokens accumulated. The spirit is destroyed when this
    /// reaches its printed health.
    pub damage: u8,

    /// Set by a successful attack; cleared when the turn ends.
    pub has_attacked: bool,

    /// Set at summoning; cleared when the turn ends. No base-set rule
    /// reads it, but hooks and drivers can.
    pub summoned_this_turn: bool,
}

impl SpiritInstance {
    /// Create a freshly summoned spirit: no damage, no flags spent.
    #[must_use]
    pub const fn summon(card: CardId) -> Self {
        Self {
            card,
            damage: 0,
            has_attacked: false,
            summoned_this_turn: true,
        }
    }

    /// Add damage tokens. Returns the new total.
    pub fn apply_damage(&mut self, amount: u8) -> u8 {
        self.damage = self.damage.saturating_add(amount);
        self.damage
    }

    /// Whether accumulated damage has reached the printed health.
    #[must_use]
    pub const fn is_destroyed(&self, health: u8) -> bool {
        self.damage >= health
    }

    /// Record that this spirit has attacked this turn.
    pub fn mark_attacked(&mut self) {
        self.has_attacked = true;
    }

    /// Clear the per-turn flags. Called when a turn ends.
    pub fn reset_turn_flags(&mut self) {
        self.has_attacked = false;
        self.summoned_this_turn = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summon_is_fresh() {
        let spirit = SpiritInstance::summon(CardId::new(3));

        assert_eq!(spirit.card, CardId::new(3));
        assert_eq!(spirit.damage, 0);
        assert!(!spirit.has_attacked);
        assert!(spirit.summoned_this_turn);
    }

    #[test]
    fn test_damage_accumulates() {
        let mut spirit = SpiritInstance::summon(CardId::new(1));

        assert_eq!(spirit.apply_damage(3), 3);
        assert_eq!(spirit.apply_damage(4), 7);
        assert_eq!(spirit.damage, 7);
    }

    #[test]
    fn test_destruction_threshold() {
        let mut spirit = SpiritInstance::summon(CardId::new(1));
        spirit.apply_damage(7);

        assert!(!spirit.is_destroyed(8));
        spirit.apply_damage(1);
        assert!(spirit.is_destroyed(8));
    }

    #[test]
    fn test_damage_saturates() {
        let mut spirit = SpiritInstance::summon(CardId::new(1));
        spirit.apply_damage(250);
        spirit.apply_damage(250);
        assert_eq!(spirit.damage, u8::MAX);
    }

    #[test]
    fn test_turn_flags() {
        let mut spirit = SpiritInstance::summon(CardId::new(1));
        spirit.mark_attacked();
        assert!(spirit.has_attacked);

        spirit.reset_turn_flags();
        assert!(!spirit.has_attacked);
        assert!(!spirit.summoned_this_turn);
    }

    #[test]
    fn test_serialization() {
        let mut spirit = SpiritInstance::summon(CardId::new(5));
        spirit.apply_damage(4);

        let json = serde_json::to_string(&spirit).unwrap();
        let back: SpiritInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(spirit, back);
    }
}
