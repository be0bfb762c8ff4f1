//! Spell stacks.
//!
//! A spell slot holds a *stack*: an ordered pile of 1 to 3 cards that are
//! all copies of the same catalog card. A stack is created by placing one
//! card in an empty slot and grows only by placing another identical copy
//! on top; stacks never merge. Cards leave from the top.
//!
//! A stack sitting in a slot is never empty: zone operations that drain
//! the last card clear the slot instead.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::RuleError;

/// Maximum number of copies a stack can hold.
pub const STACK_LIMIT: usize = 3;

/// An ordered pile of identical spell cards. Top = end.
///
/// ## Example
///
/// ```
/// use arcana_core::cards::CardId;
/// use arcana_core::zones::SpellStack;
///
/// let fireball = CardId::new(4);
/// let mut stack = SpellStack::new(fireball);
/// stack.push(fireball);
///
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.card(), fireball);
/// assert!(!stack.is_full());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpellStack {
    cards: SmallVec<[CardId; STACK_LIMIT]>,
}

impl SpellStack {
    /// Create a stack from a single card.
    #[must_use]
    pub fn new(card: CardId) -> Self {
        let mut cards = SmallVec::new();
        cards.push(card);
        Self { cards }
    }

    /// The card identity shared by every copy in the stack.
    ///
    /// Panics on an empty stack; stacks in slots are never empty.
    #[must_use]
    pub fn card(&self) -> CardId {
        self.cards[0]
    }

    /// Number of copies in the stack, `1..=3` at rest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the stack has been drained. Only observable mid-operation;
    /// the zone manager clears the slot before returning.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the stack is at the copy limit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= STACK_LIMIT
    }

    /// Whether `card` may be placed on top: same identity and room left.
    #[must_use]
    pub fn can_push(&self, card: CardId) -> bool {
        !self.is_full() && self.card() == card
    }

    /// Place a copy on top.
    ///
    /// Panics if the insertion precondition fails; callers check
    /// `can_push` first. Growing a stack with a different card or past the
    /// limit is a programming error, not a game-time condition.
    pub fn push(&mut self, card: CardId) {
        assert!(
            self.can_push(card),
            "cannot push {:?} onto a stack of {} x {:?}",
            card,
            self.len(),
            self.card()
        );
        self.cards.push(card);
    }

    /// Take `count` cards off the top, returned top-first.
    ///
    /// Fails with `InsufficientStackSize` when `count` is zero or exceeds
    /// the stack, leaving the stack unchanged.
    pub fn take_top(&mut self, count: usize) -> Result<SmallVec<[CardId; STACK_LIMIT]>, RuleError> {
        if count == 0 || count > self.cards.len() {
            return Err(RuleError::InsufficientStackSize {
                requested: count,
                available: self.cards.len(),
            });
        }
        let split = self.cards.len() - count;
        let mut taken: SmallVec<[CardId; STACK_LIMIT]> = self.cards.drain(split..).collect();
        taken.reverse();
        Ok(taken)
    }

    /// Iterate bottom-to-top.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }
}

impl std::fmt::Display for SpellStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x{}", self.card(), self.len())
    }
}
