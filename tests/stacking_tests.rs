//! Zone and spell stacking integration tests.
//!
//! Placement discipline for spell slots, stack growth and its cap,
//! replacement, spirit slot reuse, and deck recycling, exercised both
//! through `Arcana::apply` and directly against `PlayerZones`.

use arcana_core::sets::basic::{self, FIRESTORM, HEALING_WAVE, STONE_GOLEM};
use arcana_core::{
    Action, Arcana, ArcanaBuilder, CardId, GameRng, GameState, Phase, PlayerId, PlayerZones,
    RuleError, STACK_LIMIT,
};

fn advance_to(arcana: &Arcana, mut state: GameState, phase: Phase) -> GameState {
    while state.phase() != phase {
        let player = state.active_player();
        state = arcana
            .apply(&state, player, &Action::AdvancePhase)
            .unwrap();
    }
    state
}

fn pass_turn(arcana: &Arcana, state: GameState) -> GameState {
    let player = state.active_player();
    let state = advance_to(arcana, state, Phase::Respite);
    arcana.apply(&state, player, &Action::EndTurn).unwrap()
}

/// A game with mixed spell decks: six Firestorms, six Healing Waves.
fn spell_game(seed: u64) -> (Arcana, GameState) {
    let deck = [vec![FIRESTORM; 6], vec![HEALING_WAVE; 6]].concat();
    ArcanaBuilder::new(basic::catalog())
        .deck(PlayerId::First, deck.clone())
        .deck(PlayerId::Second, deck)
        .build(seed)
        .unwrap()
}

// =============================================================================
// Spell Placement Tests
// =============================================================================

/// Test that identical copies claim empty slots before stacking.
#[test]
fn test_prepare_fills_empty_slots_first() {
    let (arcana, state) = spell_game(1);

    // Eight cards out of six and six guarantee two Firestorms in hand.
    let state = advance_to(&arcana, state, Phase::Attunement);
    let state = arcana.apply(&state, PlayerId::First, &Action::Draw).unwrap();
    let state = advance_to(&arcana, state, Phase::Memorization);
    let state = arcana
        .apply(
            &state,
            PlayerId::First,
            &Action::PrepareSpell { card: FIRESTORM },
        )
        .unwrap();
    let state = pass_turn(&arcana, state);
    let state = pass_turn(&arcana, state);

    let state = advance_to(&arcana, state, Phase::Memorization);
    let state = arcana
        .apply(
            &state,
            PlayerId::First,
            &Action::PrepareSpell { card: FIRESTORM },
        )
        .unwrap();

    let stacks: Vec<_> = state
        .player(PlayerId::First)
        .zones
        .stacks()
        .map(|(slot, stack)| (slot, stack.card(), stack.len()))
        .collect();
    assert_eq!(stacks, vec![(0, FIRESTORM, 1), (1, FIRESTORM, 1)]);
}

/// Test that a full board routes copies onto matching stacks and
/// rejects cards with nowhere to go.
#[test]
fn test_stack_grows_only_without_empty_slot() {
    let mut zones = PlayerZones::new();
    for _ in 0..2 {
        zones.add_to_hand(HEALING_WAVE);
    }
    for _ in 0..3 {
        zones.add_to_hand(FIRESTORM);
    }

    assert_eq!(zones.prepare_spell(HEALING_WAVE).unwrap(), 0);
    assert_eq!(zones.prepare_spell(FIRESTORM).unwrap(), 1);
    assert_eq!(zones.prepare_spell(FIRESTORM).unwrap(), 2);
    assert_eq!(zones.prepare_spell(FIRESTORM).unwrap(), 3);

    // No slot left: the wave lands on its own stack.
    assert_eq!(zones.prepare_spell(HEALING_WAVE).unwrap(), 0);
    assert_eq!(zones.stack(0).unwrap().len(), 2);
    assert_eq!(zones.stack(1).unwrap().len(), 1);
}

/// Test that a stack caps at three copies and a fourth is rejected,
/// not dropped.
#[test]
fn test_fourth_copy_rejected() {
    let mut zones = PlayerZones::new();
    for _ in 0..4 {
        zones.add_to_hand(HEALING_WAVE);
    }
    for _ in 0..3 {
        zones.add_to_hand(FIRESTORM);
    }

    zones.prepare_spell(HEALING_WAVE).unwrap();
    for _ in 0..3 {
        zones.prepare_spell(FIRESTORM).unwrap();
    }
    zones.prepare_spell(HEALING_WAVE).unwrap();
    zones.prepare_spell(HEALING_WAVE).unwrap();
    assert_eq!(zones.stack(0).unwrap().len(), STACK_LIMIT);
    assert!(zones.stack(0).unwrap().is_full());

    assert_eq!(
        zones.prepare_spell(HEALING_WAVE),
        Err(RuleError::NoLegalSlotOrStack { card: HEALING_WAVE })
    );
    assert!(zones.hand_contains(HEALING_WAVE));
}

/// Test that replacing discards the whole stack and starts fresh.
#[test]
fn test_replace_discards_whole_stack() {
    let mut zones = PlayerZones::new();
    for _ in 0..3 {
        zones.add_to_hand(HEALING_WAVE);
    }
    for _ in 0..4 {
        zones.add_to_hand(FIRESTORM);
    }

    zones.prepare_spell(HEALING_WAVE).unwrap();
    for _ in 0..3 {
        zones.prepare_spell(FIRESTORM).unwrap();
    }
    zones.prepare_spell(HEALING_WAVE).unwrap();
    zones.prepare_spell(HEALING_WAVE).unwrap();

    zones.replace_spell(0, FIRESTORM).unwrap();
    assert_eq!(zones.discard(), &[HEALING_WAVE; 3]);
    let fresh = zones.stack(0).unwrap();
    assert_eq!((fresh.card(), fresh.len()), (FIRESTORM, 1));
}

/// Test replacement through the engine: it consumes the Memorization
/// allowance and demands an occupied slot.
#[test]
fn test_replace_through_engine() {
    let (arcana, state) = spell_game(2);
    let state = advance_to(&arcana, state, Phase::Memorization);
    let state = arcana
        .apply(
            &state,
            PlayerId::First,
            &Action::PrepareSpell { card: FIRESTORM },
        )
        .unwrap();
    let state = pass_turn(&arcana, state);
    let state = pass_turn(&arcana, state);

    // An empty target slot rejects without spending the allowance.
    let state = advance_to(&arcana, state, Phase::Memorization);
    assert_eq!(
        arcana
            .apply(
                &state,
                PlayerId::First,
                &Action::ReplaceSpell {
                    slot: 2,
                    card: HEALING_WAVE,
                },
            )
            .unwrap_err(),
        RuleError::SlotEmpty { index: 2 }
    );

    let state = arcana
        .apply(
            &state,
            PlayerId::First,
            &Action::ReplaceSpell {
                slot: 0,
                card: HEALING_WAVE,
            },
        )
        .unwrap();
    assert_eq!(state.player(PlayerId::First).zones.discard(), &[FIRESTORM]);
    let fresh = state.player(PlayerId::First).zones.stack(0).unwrap();
    assert_eq!((fresh.card(), fresh.len()), (HEALING_WAVE, 1));

    assert_eq!(
        arcana
            .apply(
                &state,
                PlayerId::First,
                &Action::ReplaceSpell {
                    slot: 0,
                    card: FIRESTORM,
                },
            )
            .unwrap_err(),
        RuleError::ActionLimitExceeded {
            phase: Phase::Memorization
        }
    );
}

// =============================================================================
// Spirit Slot Tests
// =============================================================================

/// Test that summoning takes the first empty slot and reuses freed ones.
#[test]
fn test_summon_fills_first_empty_slot() {
    let mut zones = PlayerZones::new();
    for _ in 0..4 {
        zones.add_to_hand(STONE_GOLEM);
    }

    assert_eq!(zones.summon_spirit(STONE_GOLEM).unwrap(), 0);
    assert_eq!(zones.summon_spirit(STONE_GOLEM).unwrap(), 1);
    assert_eq!(zones.summon_spirit(STONE_GOLEM).unwrap(), 2);
    assert_eq!(
        zones.summon_spirit(STONE_GOLEM),
        Err(RuleError::NoEmptySlot)
    );

    zones.destroy_spirit(1).unwrap();
    assert_eq!(zones.discard(), &[STONE_GOLEM]);
    assert_eq!(zones.summon_spirit(STONE_GOLEM).unwrap(), 1);
}

/// Test the catalog checks guarding summoning and preparation.
#[test]
fn test_card_kind_and_hand_checks() {
    let deck = vec![FIRESTORM; 12];
    let (arcana, state) = ArcanaBuilder::new(basic::catalog())
        .deck(PlayerId::First, deck.clone())
        .deck(PlayerId::Second, deck)
        .build(3)
        .unwrap();
    let state = advance_to(&arcana, state, Phase::Memorization);

    assert_eq!(
        arcana
            .apply(
                &state,
                PlayerId::First,
                &Action::SummonSpirit { card: FIRESTORM },
            )
            .unwrap_err(),
        RuleError::NotASpiritCard { card: FIRESTORM }
    );
    assert_eq!(
        arcana
            .apply(
                &state,
                PlayerId::First,
                &Action::SummonSpirit { card: STONE_GOLEM },
            )
            .unwrap_err(),
        RuleError::CardNotInHand { card: STONE_GOLEM }
    );
    assert_eq!(
        arcana
            .apply(
                &state,
                PlayerId::First,
                &Action::PrepareSpell { card: STONE_GOLEM },
            )
            .unwrap_err(),
        RuleError::NotASpellCard { card: STONE_GOLEM }
    );

    let ghost = CardId::new(99);
    assert_eq!(
        arcana
            .apply(&state, PlayerId::First, &Action::SummonSpirit { card: ghost })
            .unwrap_err(),
        RuleError::UnknownCard { card: ghost }
    );
}

// =============================================================================
// Deck Recycling Tests
// =============================================================================

/// Test that an empty deck is replenished from the discard pile and
/// only fails once both are empty.
#[test]
fn test_draw_recycles_discard() {
    let mut rng = GameRng::new(42);
    let mut zones = PlayerZones::with_deck(vec![FIRESTORM]);

    assert_eq!(zones.draw(&mut rng).unwrap(), FIRESTORM);
    assert_eq!(zones.deck_size(), 0);

    zones.add_to_discard(HEALING_WAVE);
    zones.add_to_discard(HEALING_WAVE);
    assert_eq!(zones.draw(&mut rng).unwrap(), HEALING_WAVE);
    assert_eq!(zones.deck_size(), 1);
    assert!(zones.discard().is_empty());

    zones.draw(&mut rng).unwrap();
    assert_eq!(zones.draw(&mut rng), Err(RuleError::DeckExhausted));
    assert_eq!(zones.hand().len(), 3);
}
