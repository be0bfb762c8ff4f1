//! Turn phases.
//!
//! Every turn walks the same fixed sequence:
//! `Setup → Attunement → Memorization → Invocation → Respite`.
//! `Setup` only exists for the very first moments of a game (decks are
//! shuffled and opening hands dealt during construction); once a turn ends,
//! every later turn begins at `Attunement`.

use serde::{Deserialize, Serialize};

/// A phase of the turn sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Pre-game: decks shuffled, opening hands dealt. Never recurs.
    Setup,
    /// Resource phase: the active player may draw a card and gain Aether.
    Attunement,
    /// Preparation phase: at most one board-changing action.
    Memorization,
    /// Main phase: spell activations and attacks, limited only by resources.
    Invocation,
    /// End phase: temporary effects expire; the turn is handed over.
    Respite,
}

impl Phase {
    /// All phases in turn order.
    pub const ALL: [Phase; 5] = [
        Phase::Setup,
        Phase::Attunement,
        Phase::Memorization,
        Phase::Invocation,
        Phase::Respite,
    ];

    /// The next phase within the same turn, or `None` from `Respite`
    /// (leaving `Respite` is a turn handoff, not a phase advance).
    #[must_use]
    pub const fn next_in_turn(self) -> Option<Phase> {
        match self {
            Phase::Setup => Some(Phase::Attunement),
            Phase::Attunement => Some(Phase::Memorization),
            Phase::Memorization => Some(Phase::Invocation),
            Phase::Invocation => Some(Phase::Respite),
            Phase::Respite => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "Setup",
            Phase::Attunement => "Attunement",
            Phase::Memorization => "Memorization",
            Phase::Invocation => "Invocation",
            Phase::Respite => "Respite",
        };
        write!(f, "{name}")
    }
}
