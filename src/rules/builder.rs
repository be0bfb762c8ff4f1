//! Game assembly.
//!
//! `ArcanaBuilder` gathers everything a match needs before the first
//! action: the card catalog, each player's deck list, the starting life
//! total, and any hooks. `build` then performs Setup: it validates the
//! decks against the catalog, shuffles them with the seeded RNG, and
//! deals the opening hands. The returned state sits in the `Setup`
//! phase with the first player active.

use crate::cards::{CardCatalog, CardId};
use crate::core::{GameRng, GameState, PlayerId, PlayerMap, PlayerState, RuleError};
use crate::hooks::{CardEffect, HookRegistry, PlayerAbility};

use super::engine::Arcana;

/// Cards dealt to each player during Setup.
pub const OPENING_HAND_SIZE: usize = 7;

/// Life total each player starts with unless overridden.
pub const DEFAULT_STARTING_LIFE: u8 = 20;

/// Builder for a configured game.
///
/// ## Example
///
/// ```
/// use arcana_core::cards::{CardCatalog, CardDefinition, CardId};
/// use arcana_core::core::PlayerId;
/// use arcana_core::rules::ArcanaBuilder;
///
/// let golem = CardId::new(1);
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::spirit(golem, "Stone Golem", 1, 2, 8));
///
/// let (arcana, state) = ArcanaBuilder::new(catalog)
///     .deck(PlayerId::First, vec![golem; 12])
///     .deck(PlayerId::Second, vec![golem; 12])
///     .build(42)
///     .unwrap();
///
/// assert_eq!(state.player(PlayerId::First).zones.hand().len(), 7);
/// assert!(!arcana.legal_actions(&state, PlayerId::First).is_empty());
/// ```
pub struct ArcanaBuilder {
    catalog: CardCatalog,
    decks: PlayerMap<Vec<CardId>>,
    starting_life: u8,
    hooks: HookRegistry,
}

impl ArcanaBuilder {
    /// Start building a game played with `catalog`.
    #[must_use]
    pub fn new(catalog: CardCatalog) -> Self {
        Self {
            catalog,
            decks: PlayerMap::with_default(),
            starting_life: DEFAULT_STARTING_LIFE,
            hooks: HookRegistry::new(),
        }
    }

    /// Set a player's deck list, in any order; `build` shuffles.
    #[must_use]
    pub fn deck(mut self, player: PlayerId, cards: Vec<CardId>) -> Self {
        self.decks[player] = cards;
        self
    }

    /// Override the starting life total for both players.
    #[must_use]
    pub fn starting_life(mut self, life: u8) -> Self {
        self.starting_life = life;
        self
    }

    /// Attach an effect hook to a card id.
    ///
    /// # Panics
    ///
    /// Panics if the card already has an effect.
    #[must_use]
    pub fn effect(mut self, card: CardId, effect: Box<dyn CardEffect>) -> Self {
        self.hooks.register_effect(card, effect);
        self
    }

    /// Attach a once-per-turn ability to a player.
    ///
    /// # Panics
    ///
    /// Panics if the player already has an ability.
    #[must_use]
    pub fn ability(mut self, player: PlayerId, ability: Box<dyn PlayerAbility>) -> Self {
        self.hooks.register_ability(player, ability);
        self
    }

    /// Validate, shuffle, and deal.
    ///
    /// Fails with `UnknownCard` if a deck names a card the catalog does
    /// not hold, and with `DeckExhausted` if a deck cannot cover the
    /// opening hand. The same seed always deals the same game.
    pub fn build(self, seed: u64) -> Result<(Arcana, GameState), RuleError> {
        for (_, deck) in self.decks.iter() {
            for &card in deck.iter() {
                self.catalog.lookup(card)?;
            }
        }

        let Self {
            catalog,
            mut decks,
            starting_life,
            hooks,
        } = self;

        let mut rng = GameRng::new(seed);
        for (_, deck) in decks.iter_mut() {
            rng.shuffle(deck);
        }

        let players =
            PlayerMap::new(|p| PlayerState::new(starting_life, std::mem::take(&mut decks[p])));
        let mut state = GameState::new(players, PlayerId::First, rng);

        for player in PlayerId::BOTH {
            for _ in 0..OPENING_HAND_SIZE {
                state.draw_card(player)?;
            }
        }

        Ok((Arcana::new(catalog, hooks), state))
    }
}
