//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition a game can reference.
//! It is assembled before the game starts and read-only during play;
//! decks, hands, and stacks refer into it by `CardId`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::RuleError;

use super::definition::{CardDefinition, CardId, SpiritStats};

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use arcana_core::cards::{CardCatalog, CardDefinition, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::spell(CardId::new(1), "Firestorm", 3));
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Firestorm");
/// assert_eq!(catalog.activation_cost(CardId::new(1), 2).unwrap(), 6);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists; duplicate ids in
    /// a set are a programming error, not a game-time condition.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, or fail with `UnknownCard`.
    ///
    /// This is the lookup the rules pipeline uses: an action naming an
    /// unregistered card is a rejection, not a panic.
    pub fn lookup(&self, id: CardId) -> Result<&CardDefinition, RuleError> {
        self.cards
            .get(&id)
            .ok_or(RuleError::UnknownCard { card: id })
    }

    /// The Aether price of consuming `copies` copies of a card.
    ///
    /// This is the pluggable cost function: the combat resolver calls it
    /// and never hardcodes a formula.
    pub fn activation_cost(&self, id: CardId, copies: usize) -> Result<u8, RuleError> {
        Ok(self.lookup(id)?.cost.price(copies))
    }

    /// The spirit statistics of a card, or `NotASpiritCard`.
    pub fn spirit_stats(&self, id: CardId) -> Result<SpiritStats, RuleError> {
        self.lookup(id)?
            .spirit_stats()
            .ok_or(RuleError::NotASpiritCard { card: id })
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Iterate over the Spirit definitions.
    pub fn spirits(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(|c| c.kind.is_spirit())
    }

    /// Iterate over the Spell definitions.
    pub fn spells(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(|c| c.kind.is_spell())
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
