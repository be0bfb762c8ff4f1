//! Action representation.
//!
//! Every legal move in the game is one `Action` variant: the rules engine
//! exposes a closed vocabulary rather than a generic verb/pointer scheme,
//! so drivers (UI, bots, tests) construct actions by name and the validator
//! can match exhaustively. Payloads name cards by catalog id and board
//! positions by slot index.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

use super::phase::Phase;
use super::player::PlayerId;

/// A complete game action, as submitted by a driver on behalf of a player.
///
/// ## Example
///
/// ```
/// use arcana_core::core::{Action, AttackTarget};
/// use arcana_core::cards::CardId;
///
/// // Attunement: draw, then channel aether
/// let draw = Action::Draw;
/// let gain = Action::GainAether;
///
/// // Memorization: put a spell copy on the board
/// let prepare = Action::PrepareSpell { card: CardId::new(4) };
///
/// // Invocation: attack the defender's spirit in slot 1
/// let attack = Action::DeclareAttack {
///     attacker: 0,
///     target: AttackTarget::Spirit { slot: 1 },
/// };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Attunement: draw the top card of the deck (recycling the discard
    /// pile into a fresh shuffled deck first if the deck is empty).
    Draw,

    /// Attunement: gain 2 Aether, clamped at the cap.
    GainAether,

    /// Memorization: move a Spirit card from hand into the first empty
    /// spirit slot.
    SummonSpirit {
        /// The Spirit card to summon.
        card: CardId,
    },

    /// Memorization: move a Spell card from hand onto the board, into the
    /// first empty spell slot or on top of the first unfilled stack of the
    /// same card.
    PrepareSpell {
        /// The Spell card to prepare.
        card: CardId,
    },

    /// Memorization: discard the stack in `slot` and start a fresh
    /// single-card stack there with `card` from hand.
    ReplaceSpell {
        /// The spell slot whose stack is discarded.
        slot: usize,
        /// The Spell card that takes its place.
        card: CardId,
    },

    /// Memorization: invoke the player's ability, if one is registered.
    ActivatePlayerAbility,

    /// Invocation: pay the activation cost for `copies` cards of the stack
    /// in `slot`, discard them off the top, and resolve the card's effect
    /// once at that magnitude.
    ActivateSpellStack {
        /// The spell slot holding the stack.
        slot: usize,
        /// How many copies to consume, `1..=3` and at most the stack size.
        copies: usize,
    },

    /// Invocation: attack with the spirit in slot `attacker`, paying its
    /// activation cost. Spirits must be targeted while the defender
    /// controls any.
    DeclareAttack {
        /// The attacker's spirit slot.
        attacker: usize,
        /// What the attack is aimed at.
        target: AttackTarget,
    },

    /// Move to the next phase of the turn. Illegal in `Respite`.
    AdvancePhase,

    /// End the turn from `Respite`: temporary effects expire, spirit
    /// attack flags reset, and the opponent becomes active.
    EndTurn,
}

impl Action {
    /// The phase that hosts this action.
    ///
    /// `AdvancePhase` is legal in every phase except `Respite`, so it has
    /// no single home and returns `None`.
    #[must_use]
    pub const fn home_phase(self) -> Option<Phase> {
        match self {
            Action::Draw | Action::GainAether => Some(Phase::Attunement),
            Action::SummonSpirit { .. }
            | Action::PrepareSpell { .. }
            | Action::ReplaceSpell { .. }
            | Action::ActivatePlayerAbility => Some(Phase::Memorization),
            Action::ActivateSpellStack { .. } | Action::DeclareAttack { .. } => {
                Some(Phase::Invocation)
            }
            Action::EndTurn => Some(Phase::Respite),
            Action::AdvancePhase => None,
        }
    }

    /// Whether this action consumes the single Memorization allowance.
    #[must_use]
    pub const fn is_memorization_action(self) -> bool {
        matches!(
            self,
            Action::SummonSpirit { .. }
                | Action::PrepareSpell { .. }
                | Action::ReplaceSpell { .. }
                | Action::ActivatePlayerAbility
        )
    }
}

/// What a declared attack is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackTarget {
    /// One of the defender's spirits, by slot index.
    Spirit {
        /// The defender's spirit slot.
        slot: usize,
    },
    /// The defending player. Only legal once the defender controls no
    /// spirits.
    Player,
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Per-phase action limits (via the turn state's phase log)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Phase the game was in.
    pub phase: Phase,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, phase: Phase) -> Self {
        Self {
            player,
            action,
            turn,
            phase,
        }
    }
}
