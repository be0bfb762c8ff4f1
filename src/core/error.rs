//! Rule rejection errors.
//!
//! Every way an action can fail maps to exactly one `RuleError` kind, so
//! drivers (UI, bots, tests) can match on the rejection instead of parsing
//! message strings. Rejections carry the data needed to explain themselves:
//! how much Aether was missing, which slot was empty, and so on.
//!
//! A failed action never mutates state; see `Arcana::apply`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardId;
use crate::core::{Phase, PlayerId};

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RuleError {
    /// `AdvancePhase` submitted in `Respite`; only `EndTurn` leaves it.
    #[error("cannot advance past {phase}: the turn ends with EndTurn")]
    IllegalPhaseAdvance {
        /// The phase the game was in.
        phase: Phase,
    },

    /// The action exists but not in the current phase.
    #[error("action belongs to {expected}, but the game is in {actual}")]
    WrongPhase {
        /// The phase that hosts this action.
        expected: Phase,
        /// The phase the game is in.
        actual: Phase,
    },

    /// An action was submitted by the player whose turn it is not.
    #[error("{player} acted out of turn")]
    NotActivePlayer {
        /// The player who submitted the action.
        player: PlayerId,
    },

    /// The game already has an outcome; no further actions are legal.
    #[error("the game is over")]
    GameOver,

    /// The phase's action allowance is used up.
    #[error("the {phase} action for this turn has already been taken")]
    ActionLimitExceeded {
        /// The phase whose limit was hit.
        phase: Phase,
    },

    /// Summoning requires a free spirit slot.
    #[error("no empty spirit slot")]
    NoEmptySlot,

    /// Summoning requires a Spirit card.
    #[error("card {card} is not a spirit")]
    NotASpiritCard {
        /// The offending card.
        card: CardId,
    },

    /// Preparing or replacing requires a Spell card.
    #[error("card {card} is not a spell")]
    NotASpellCard {
        /// The offending card.
        card: CardId,
    },

    /// The acting player's hand does not contain the named card.
    #[error("card {card} is not in hand")]
    CardNotInHand {
        /// The card that was named.
        card: CardId,
    },

    /// No empty spell slot and no matching stack with room.
    #[error("no empty slot and no unfilled stack of {card}")]
    NoLegalSlotOrStack {
        /// The spell that could not be placed.
        card: CardId,
    },

    /// The slot index is outside the board.
    #[error("slot {index} does not exist")]
    InvalidSlot {
        /// The out-of-range index.
        index: usize,
    },

    /// The named slot exists but holds nothing.
    #[error("slot {index} is empty")]
    SlotEmpty {
        /// The empty slot.
        index: usize,
    },

    /// A stack operation asked for more cards than the stack holds
    /// (or for zero).
    #[error("stack holds {available} cards, cannot take {requested}")]
    InsufficientStackSize {
        /// How many cards the operation asked for.
        requested: usize,
        /// How many the stack actually holds.
        available: usize,
    },

    /// The player cannot pay the activation cost.
    #[error("need {required} aether, have {available}")]
    InsufficientAether {
        /// The exact cost.
        required: u8,
        /// The player's balance.
        available: u8,
    },

    /// The declared target violates forced targeting: spirits must be
    /// attacked while the defender controls any, and only then may the
    /// player be attacked.
    #[error("illegal attack target")]
    IllegalAttackTarget,

    /// Each spirit attacks at most once per turn.
    #[error("the spirit in slot {slot} has already attacked this turn")]
    SpiritAlreadyAttacked {
        /// The attacker's slot.
        slot: usize,
    },

    /// Both the deck and the discard pile are empty; nothing to draw.
    #[error("deck exhausted")]
    DeckExhausted,

    /// The card id has no catalog entry.
    #[error("card {card} is not in the catalog")]
    UnknownCard {
        /// The unrecognized id.
        card: CardId,
    },
}
