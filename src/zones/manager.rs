//! Zone manager for card locations and movement.
//!
//! Each player owns one `PlayerZones`: their hand, deck, discard pile,
//! three spirit slots, and four spell slots. All card movement goes
//! through the operations here, and every operation is atomic: it either
//! completes or fails with a `RuleError` without touching anything.
//!
//! ## Conventions
//!
//! - Decks are ordered with the **top at the end** of the vec, so drawing
//!   is a pop.
//! - Hand order is preserved for display but never matters for legality.
//! - Cards in the hand, deck, and discard pile are bare `CardId`s;
//!   per-instance state exists only in spirit slots.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, SpiritInstance};
use crate::core::{GameRng, RuleError};

use super::stack::SpellStack;

/// Number of spirit slots on each player's board.
pub const SPIRIT_SLOT_COUNT: usize = 3;

/// Number of spell slots on each player's board.
pub const SPELL_SLOT_COUNT: usize = 4;

/// One player's card zones.
///
/// ## Usage
///
/// ```
/// use arcana_core::cards::CardId;
/// use arcana_core::core::GameRng;
/// use arcana_core::zones::PlayerZones;
///
/// let deck: Vec<_> = (0..10).map(CardId::new).collect();
/// let mut zones = PlayerZones::with_deck(deck);
/// let mut rng = GameRng::new(42);
///
/// let drawn = zones.draw(&mut rng).unwrap();
/// assert_eq!(zones.hand(), &[drawn]);
/// assert_eq!(zones.deck_size(), 9);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerZones {
    hand: Vec<CardId>,
    deck: Vec<CardId>,
    discard: Vec<CardId>,
    spirit_slots: [Option<SpiritInstance>; SPIRIT_SLOT_COUNT],
    spell_slots: [Option<SpellStack>; SPELL_SLOT_COUNT],
}

impl PlayerZones {
    /// Create empty zones.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create zones with a deck, top at the end.
    #[must_use]
    pub fn with_deck(deck: Vec<CardId>) -> Self {
        Self {
            deck,
            ..Self::default()
        }
    }

    // ---- Accessors -------------------------------------------------------

    /// The hand, in display order.
    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    /// The deck, bottom to top. Visibility filtering is a driver concern.
    #[must_use]
    pub fn deck(&self) -> &[CardId] {
        &self.deck
    }

    /// The discard pile, oldest first.
    #[must_use]
    pub fn discard(&self) -> &[CardId] {
        &self.discard
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Whether the hand contains at least one copy of `card`.
    #[must_use]
    pub fn hand_contains(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    /// All spirit slots, in board order.
    #[must_use]
    pub fn spirit_slots(&self) -> &[Option<SpiritInstance>; SPIRIT_SLOT_COUNT] {
        &self.spirit_slots
    }

    /// All spell slots, in board order.
    #[must_use]
    pub fn spell_slots(&self) -> &[Option<SpellStack>; SPELL_SLOT_COUNT] {
        &self.spell_slots
    }

    /// The spirit in `slot`, or why there is none.
    pub fn spirit(&self, slot: usize) -> Result<&SpiritInstance, RuleError> {
        self.spirit_slots
            .get(slot)
            .ok_or(RuleError::InvalidSlot { index: slot })?
            .as_ref()
            .ok_or(RuleError::SlotEmpty { index: slot })
    }

    /// Mutable access to the spirit in `slot`.
    pub fn spirit_mut(&mut self, slot: usize) -> Result<&mut SpiritInstance, RuleError> {
        self.spirit_slots
            .get_mut(slot)
            .ok_or(RuleError::InvalidSlot { index: slot })?
            .as_mut()
            .ok_or(RuleError::SlotEmpty { index: slot })
    }

    /// The stack in spell slot `slot`, or why there is none.
    pub fn stack(&self, slot: usize) -> Result<&SpellStack, RuleError> {
        self.spell_slots
            .get(slot)
            .ok_or(RuleError::InvalidSlot { index: slot })?
            .as_ref()
            .ok_or(RuleError::SlotEmpty { index: slot })
    }

    /// Whether any spirit slot is occupied.
    #[must_use]
    pub fn has_spirits(&self) -> bool {
        self.spirit_slots.iter().any(Option::is_some)
    }

    /// Number of occupied spirit slots.
    #[must_use]
    pub fn spirit_count(&self) -> usize {
        self.spirit_slots.iter().flatten().count()
    }

    /// Iterate over `(slot, spirit)` for occupied spirit slots.
    pub fn spirits(&self) -> impl Iterator<Item = (usize, &SpiritInstance)> {
        self.spirit_slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|spirit| (i, spirit)))
    }

    /// Iterate over `(slot, stack)` for occupied spell slots.
    pub fn stacks(&self) -> impl Iterator<Item = (usize, &SpellStack)> {
        self.spell_slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|stack| (i, stack)))
    }

    // ---- Deck and hand ---------------------------------------------------

    /// Draw the top card of the deck into the hand.
    ///
    /// An empty deck is first replenished by shuffling the discard pile
    /// into it; only when both are empty does the draw fail with
    /// `DeckExhausted`.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<CardId, RuleError> {
        if self.deck.is_empty() && !self.discard.is_empty() {
            self.deck.append(&mut self.discard);
            rng.shuffle(&mut self.deck);
        }
        let card = self.deck.pop().ok_or(RuleError::DeckExhausted)?;
        self.hand.push(card);
        Ok(card)
    }

    /// Remove one copy of `card` from the hand.
    pub fn remove_from_hand(&mut self, card: CardId) -> Result<(), RuleError> {
        let index = self
            .hand
            .iter()
            .position(|&c| c == card)
            .ok_or(RuleError::CardNotInHand { card })?;
        self.hand.remove(index);
        Ok(())
    }

    /// Put a card into the hand directly. Used by effect deltas and tests.
    pub fn add_to_hand(&mut self, card: CardId) {
        self.hand.push(card);
    }

    /// Put a card on top of the discard pile.
    pub fn add_to_discard(&mut self, card: CardId) {
        self.discard.push(card);
    }

    // ---- Spirit slots ----------------------------------------------------

    /// Move a Spirit card from the hand into the first empty spirit slot.
    ///
    /// Returns the slot it landed in. The caller has already verified the
    /// card's kind against the catalog.
    pub fn summon_spirit(&mut self, card: CardId) -> Result<usize, RuleError> {
        let slot = self
            .spirit_slots
            .iter()
            .position(Option::is_none)
            .ok_or(RuleError::NoEmptySlot)?;
        self.remove_from_hand(card)?;
        self.spirit_slots[slot] = Some(SpiritInstance::summon(card));
        Ok(slot)
    }

    /// Remove the spirit in `slot`, discarding its card.
    ///
    /// The instance and its damage tokens cease to exist; only the bare
    /// `CardId` reaches the discard pile.
    pub fn destroy_spirit(&mut self, slot: usize) -> Result<CardId, RuleError> {
        let spirit = self
            .spirit_slots
            .get_mut(slot)
            .ok_or(RuleError::InvalidSlot { index: slot })?
            .take()
            .ok_or(RuleError::SlotEmpty { index: slot })?;
        self.discard.push(spirit.card);
        Ok(spirit.card)
    }

    // ---- Spell slots -----------------------------------------------------

    /// Move a Spell card from the hand onto the board.
    ///
    /// Placement order: the first empty spell slot as a new stack, else on
    /// top of the first unfilled stack of the same card, else
    /// `NoLegalSlotOrStack`. Returns the slot used. The caller has already
    /// verified the card's kind against the catalog.
    pub fn prepare_spell(&mut self, card: CardId) -> Result<usize, RuleError> {
        let empty = self.spell_slots.iter().position(Option::is_none);
        let growable = self
            .spell_slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|stack| stack.can_push(card)));

        let slot = empty
            .or(growable)
            .ok_or(RuleError::NoLegalSlotOrStack { card })?;

        self.remove_from_hand(card)?;
        match &mut self.spell_slots[slot] {
            Some(stack) => stack.push(card),
            s @ None => *s = Some(SpellStack::new(card)),
        }
        Ok(slot)
    }

    /// Discard the stack in `slot` and start a fresh stack there with
    /// `card` from the hand. The old stack is discarded top-first.
    pub fn replace_spell(&mut self, slot: usize, card: CardId) -> Result<(), RuleError> {
        // Validate everything before moving a card.
        let occupied = self
            .spell_slots
            .get(slot)
            .ok_or(RuleError::InvalidSlot { index: slot })?
            .is_some();
        if !occupied {
            return Err(RuleError::SlotEmpty { index: slot });
        }
        self.remove_from_hand(card)?;

        let mut old = self.spell_slots[slot].take().unwrap_or_else(|| {
            unreachable!("slot occupancy checked above")
        });
        let size = old.len();
        let taken = old
            .take_top(size)
            .unwrap_or_else(|_| unreachable!("taking a stack's own size cannot fail"));
        self.discard.extend(taken);
        self.spell_slots[slot] = Some(SpellStack::new(card));
        Ok(())
    }

    /// Discard `count` cards from the top of the stack in `slot`.
    ///
    /// A stack drained to zero leaves the slot empty.
    pub fn discard_from_stack(&mut self, slot: usize, count: usize) -> Result<(), RuleError> {
        let stack = self
            .spell_slots
            .get_mut(slot)
            .ok_or(RuleError::InvalidSlot { index: slot })?
            .as_mut()
            .ok_or(RuleError::SlotEmpty { index: slot })?;

        let taken = stack.take_top(count)?;
        let emptied = stack.is_empty();
        self.discard.extend(taken);
        if emptied {
            self.spell_slots[slot] = None;
        }
        Ok(())
    }

    // ---- Turn upkeep -----------------------------------------------------

    /// Clear the per-turn flags on every spirit. Called when a turn ends.
    pub fn reset_spirit_flags(&mut self) {
        for spirit in self.spirit_slots.iter_mut().flatten() {
            spirit.reset_turn_flags();
        }
    }
}
