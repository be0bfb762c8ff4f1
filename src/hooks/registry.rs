//! Hook registration, keyed by card id and by player.

use rustc_hash::FxHashMap;

use crate::cards::CardId;
use crate::core::{PlayerId, PlayerMap};

use super::{CardEffect, PlayerAbility};

/// All registered hooks for one game.
///
/// Owned by the rules value, never by `GameState`: state stays plain
/// data while behavior lives here. Registration is a set-up-time
/// concern, so duplicates panic rather than erroring.
pub struct HookRegistry {
    effects: FxHashMap<CardId, Box<dyn CardEffect>>,
    abilities: PlayerMap<Option<Box<dyn PlayerAbility>>>,
}

impl HookRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            effects: FxHashMap::default(),
            abilities: PlayerMap::new(|_| None),
        }
    }

    /// Attach an effect to a card id.
    ///
    /// # Panics
    ///
    /// Panics if the card already has an effect.
    pub fn register_effect(&mut self, card: CardId, effect: Box<dyn CardEffect>) {
        if self.effects.insert(card, effect).is_some() {
            panic!("Effect for {:?} already registered", card);
        }
    }

    /// The effect attached to `card`, if any.
    #[must_use]
    pub fn effect(&self, card: CardId) -> Option<&dyn CardEffect> {
        self.effects.get(&card).map(|e| e.as_ref())
    }

    /// Whether `card` has an effect attached.
    #[must_use]
    pub fn has_effect(&self, card: CardId) -> bool {
        self.effects.contains_key(&card)
    }

    /// Attach a once-per-turn ability to a player.
    ///
    /// # Panics
    ///
    /// Panics if the player already has an ability.
    pub fn register_ability(&mut self, player: PlayerId, ability: Box<dyn PlayerAbility>) {
        let slot = &mut self.abilities[player];
        if slot.is_some() {
            panic!("Ability for {} already registered", player);
        }
        *slot = Some(ability);
    }

    /// The ability registered for `player`, if any.
    #[must_use]
    pub fn ability(&self, player: PlayerId) -> Option<&dyn PlayerAbility> {
        self.abilities[player].as_deref()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
