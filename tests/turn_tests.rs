//! Turn structure integration tests.
//!
//! These tests drive full games through `Arcana::apply`, covering the
//! phase machine, per-phase action allowances, turn handover, the
//! action history, and state serialization.

use arcana_core::sets::basic::{self, ChannelAether, FIRESTORM, STONE_GOLEM};
use arcana_core::{
    Action, Arcana, ArcanaBuilder, GameState, Phase, PlayerId, RuleError, AETHER_CAP,
    ATTUNEMENT_GAIN, DEFAULT_STARTING_LIFE, OPENING_HAND_SIZE,
};

/// Advance the active player to `phase` within the current turn.
fn advance_to(arcana: &Arcana, mut state: GameState, phase: Phase) -> GameState {
    while state.phase() != phase {
        let player = state.active_player();
        state = arcana
            .apply(&state, player, &Action::AdvancePhase)
            .unwrap();
    }
    state
}

/// Advance the active player through Respite and end their turn.
fn pass_turn(arcana: &Arcana, state: GameState) -> GameState {
    let player = state.active_player();
    let state = advance_to(arcana, state, Phase::Respite);
    arcana.apply(&state, player, &Action::EndTurn).unwrap()
}

/// A game where First can channel one extra Aether per turn.
fn channeling_game() -> (Arcana, GameState) {
    ArcanaBuilder::new(basic::catalog())
        .deck(PlayerId::First, vec![STONE_GOLEM; 12])
        .deck(PlayerId::Second, vec![STONE_GOLEM; 12])
        .ability(PlayerId::First, Box::new(ChannelAether))
        .build(3)
        .unwrap()
}

// =============================================================================
// Setup and Phase Machine Tests
// =============================================================================

/// Test that a built game starts with dealt hands in the Setup phase.
#[test]
fn test_opening_deal() {
    let (_, state) = basic::standard_game(11).unwrap();

    assert_eq!(state.phase(), Phase::Setup);
    assert_eq!(state.turn_number(), 1);
    assert_eq!(state.active_player(), PlayerId::First);
    assert_eq!(state.outcome(), None);
    assert!(state.history().is_empty());

    for player in PlayerId::BOTH {
        let side = state.player(player);
        assert_eq!(side.zones.hand().len(), OPENING_HAND_SIZE);
        assert_eq!(side.zones.deck_size(), 15 - OPENING_HAND_SIZE);
        assert_eq!(side.life(), DEFAULT_STARTING_LIFE);
        assert_eq!(side.aether.balance(), 0);
    }
}

/// Test that Setup offers nothing but advancing into Attunement.
#[test]
fn test_setup_offers_only_advance() {
    let (arcana, state) = basic::standard_game(11).unwrap();

    assert_eq!(
        arcana.legal_actions(&state, PlayerId::First),
        vec![Action::AdvancePhase]
    );
    assert!(arcana.legal_actions(&state, PlayerId::Second).is_empty());
}

/// Test that AdvancePhase walks the fixed phase order within one turn.
#[test]
fn test_phase_progression() {
    let (arcana, state) = basic::standard_game(11).unwrap();
    let mut state = state;

    let expected = [
        Phase::Attunement,
        Phase::Memorization,
        Phase::Invocation,
        Phase::Respite,
    ];
    for phase in expected {
        state = arcana
            .apply(&state, PlayerId::First, &Action::AdvancePhase)
            .unwrap();
        assert_eq!(state.phase(), phase);
        assert_eq!(state.turn_number(), 1);
    }
}

/// Test that Respite cannot be advanced out of; the turn ends there.
#[test]
fn test_no_advance_out_of_respite() {
    let (arcana, state) = basic::standard_game(11).unwrap();
    let state = advance_to(&arcana, state, Phase::Respite);

    assert_eq!(
        arcana
            .apply(&state, PlayerId::First, &Action::AdvancePhase)
            .unwrap_err(),
        RuleError::IllegalPhaseAdvance {
            phase: Phase::Respite
        }
    );
    assert_eq!(
        arcana.legal_actions(&state, PlayerId::First),
        vec![Action::EndTurn]
    );
}

/// Test that EndTurn hands the game to the opponent's Attunement.
#[test]
fn test_end_turn_hands_over() {
    let (arcana, state) = basic::standard_game(11).unwrap();

    let state = pass_turn(&arcana, state);
    assert_eq!(state.active_player(), PlayerId::Second);
    assert_eq!(state.turn_number(), 2);
    assert_eq!(state.phase(), Phase::Attunement);

    let state = pass_turn(&arcana, state);
    assert_eq!(state.active_player(), PlayerId::First);
    assert_eq!(state.turn_number(), 3);
}

/// Test that actions submitted outside their home phase are rejected.
#[test]
fn test_actions_gated_by_phase() {
    let (arcana, state) = basic::standard_game(11).unwrap();

    assert_eq!(
        arcana.apply(&state, PlayerId::First, &Action::Draw).unwrap_err(),
        RuleError::WrongPhase {
            expected: Phase::Attunement,
            actual: Phase::Setup,
        }
    );

    let state = advance_to(&arcana, state, Phase::Attunement);
    assert_eq!(
        arcana
            .apply(&state, PlayerId::First, &Action::EndTurn)
            .unwrap_err(),
        RuleError::WrongPhase {
            expected: Phase::Respite,
            actual: Phase::Attunement,
        }
    );
    assert_eq!(
        arcana
            .apply(
                &state,
                PlayerId::First,
                &Action::SummonSpirit { card: STONE_GOLEM }
            )
            .unwrap_err(),
        RuleError::WrongPhase {
            expected: Phase::Memorization,
            actual: Phase::Attunement,
        }
    );
}

/// Test that the non-active player can take no action at all.
#[test]
fn test_not_active_player_rejected() {
    let (arcana, state) = basic::standard_game(11).unwrap();
    let state = advance_to(&arcana, state, Phase::Attunement);

    assert_eq!(
        arcana
            .apply(&state, PlayerId::Second, &Action::Draw)
            .unwrap_err(),
        RuleError::NotActivePlayer {
            player: PlayerId::Second
        }
    );
    assert!(arcana.legal_actions(&state, PlayerId::Second).is_empty());
}

// =============================================================================
// Attunement Allowance Tests
// =============================================================================

/// Test that Attunement allows one draw and one gain, in either order.
#[test]
fn test_attunement_allowances() {
    let (arcana, state) = basic::standard_game(11).unwrap();
    let state = advance_to(&arcana, state, Phase::Attunement);

    let state = arcana.apply(&state, PlayerId::First, &Action::Draw).unwrap();
    assert_eq!(state.player(PlayerId::First).zones.hand().len(), 8);

    let state = arcana
        .apply(&state, PlayerId::First, &Action::GainAether)
        .unwrap();
    assert_eq!(
        state.player(PlayerId::First).aether.balance(),
        ATTUNEMENT_GAIN
    );

    assert_eq!(
        arcana.apply(&state, PlayerId::First, &Action::Draw).unwrap_err(),
        RuleError::ActionLimitExceeded {
            phase: Phase::Attunement
        }
    );
    assert_eq!(
        arcana
            .apply(&state, PlayerId::First, &Action::GainAether)
            .unwrap_err(),
        RuleError::ActionLimitExceeded {
            phase: Phase::Attunement
        }
    );
}

/// Test that the allowances reset with the next turn.
#[test]
fn test_attunement_allowances_reset() {
    let (arcana, state) = basic::standard_game(11).unwrap();
    let state = advance_to(&arcana, state, Phase::Attunement);
    let state = arcana.apply(&state, PlayerId::First, &Action::Draw).unwrap();

    let state = pass_turn(&arcana, state);
    let state = arcana
        .apply(&state, PlayerId::Second, &Action::Draw)
        .unwrap();
    assert_eq!(state.player(PlayerId::Second).zones.hand().len(), 8);

    let state = pass_turn(&arcana, state);
    let state = arcana.apply(&state, PlayerId::First, &Action::Draw).unwrap();
    assert_eq!(state.player(PlayerId::First).zones.hand().len(), 9);
}

/// Test that the Attunement gain clamps at the Aether cap.
#[test]
fn test_gain_clamps_at_cap() {
    let (arcana, state) = channeling_game();
    let mut state = state;

    // Seven turns of +2 leave First at 14.
    for _ in 0..7 {
        state = advance_to(&arcana, state, Phase::Attunement);
        state = arcana
            .apply(&state, PlayerId::First, &Action::GainAether)
            .unwrap();
        state = pass_turn(&arcana, state);
        state = pass_turn(&arcana, state);
    }
    assert_eq!(state.player(PlayerId::First).aether.balance(), 14);

    // Channel Aether nudges the balance onto 15.
    state = advance_to(&arcana, state, Phase::Memorization);
    state = arcana
        .apply(&state, PlayerId::First, &Action::ActivatePlayerAbility)
        .unwrap();
    assert_eq!(state.player(PlayerId::First).aether.balance(), 15);
    state = pass_turn(&arcana, state);
    state = pass_turn(&arcana, state);

    // 15 + 2 clamps to 16, not 17.
    state = arcana
        .apply(&state, PlayerId::First, &Action::GainAether)
        .unwrap();
    assert_eq!(state.player(PlayerId::First).aether.balance(), AETHER_CAP);
}

/// Test that drawing from an empty deck and discard pile is rejected
/// and never offered.
#[test]
fn test_draw_exhausts_deck() {
    // A seven card deck is consumed whole by the opening deal.
    let (arcana, state) = ArcanaBuilder::new(basic::catalog())
        .deck(PlayerId::First, vec![STONE_GOLEM; 7])
        .deck(PlayerId::Second, vec![STONE_GOLEM; 12])
        .build(5)
        .unwrap();
    assert_eq!(state.player(PlayerId::First).zones.deck_size(), 0);

    let state = advance_to(&arcana, state, Phase::Attunement);
    assert_eq!(
        arcana.apply(&state, PlayerId::First, &Action::Draw).unwrap_err(),
        RuleError::DeckExhausted
    );
    assert!(!arcana
        .legal_actions(&state, PlayerId::First)
        .contains(&Action::Draw));
}

// =============================================================================
// Memorization Allowance Tests
// =============================================================================

/// Test that Memorization permits exactly one action per turn.
#[test]
fn test_memorization_single_action() {
    let deck = [vec![STONE_GOLEM; 6], vec![FIRESTORM; 6]].concat();
    let (arcana, state) = ArcanaBuilder::new(basic::catalog())
        .deck(PlayerId::First, deck.clone())
        .deck(PlayerId::Second, deck)
        .build(17)
        .unwrap();

    // Seven cards out of six golems and six firestorms hold at least
    // one of each.
    let state = advance_to(&arcana, state, Phase::Memorization);
    let state = arcana
        .apply(
            &state,
            PlayerId::First,
            &Action::SummonSpirit { card: STONE_GOLEM },
        )
        .unwrap();

    assert_eq!(
        arcana
            .apply(
                &state,
                PlayerId::First,
                &Action::PrepareSpell { card: FIRESTORM }
            )
            .unwrap_err(),
        RuleError::ActionLimitExceeded {
            phase: Phase::Memorization
        }
    );
    assert_eq!(
        arcana.legal_actions(&state, PlayerId::First),
        vec![Action::AdvancePhase]
    );
}

/// Test that invoking the player ability spends the Memorization
/// allowance.
#[test]
fn test_ability_consumes_allowance() {
    let (arcana, state) = channeling_game();
    let state = advance_to(&arcana, state, Phase::Memorization);

    let state = arcana
        .apply(&state, PlayerId::First, &Action::ActivatePlayerAbility)
        .unwrap();
    assert_eq!(state.player(PlayerId::First).aether.balance(), 1);

    assert_eq!(
        arcana
            .apply(
                &state,
                PlayerId::First,
                &Action::SummonSpirit { card: STONE_GOLEM }
            )
            .unwrap_err(),
        RuleError::ActionLimitExceeded {
            phase: Phase::Memorization
        }
    );
}

/// Test that invoking an unregistered ability is a legal no-op that
/// still spends the allowance.
#[test]
fn test_unregistered_ability_is_noop() {
    let (arcana, state) = ArcanaBuilder::new(basic::catalog())
        .deck(PlayerId::First, vec![STONE_GOLEM; 12])
        .deck(PlayerId::Second, vec![STONE_GOLEM; 12])
        .build(3)
        .unwrap();
    let state = advance_to(&arcana, state, Phase::Memorization);
    assert!(arcana
        .legal_actions(&state, PlayerId::First)
        .contains(&Action::ActivatePlayerAbility));

    let state = arcana
        .apply(&state, PlayerId::First, &Action::ActivatePlayerAbility)
        .unwrap();
    assert_eq!(state.player(PlayerId::First).aether.balance(), 0);

    assert_eq!(
        arcana
            .apply(
                &state,
                PlayerId::First,
                &Action::SummonSpirit { card: STONE_GOLEM },
            )
            .unwrap_err(),
        RuleError::ActionLimitExceeded {
            phase: Phase::Memorization
        }
    );
}

// =============================================================================
// History and Serialization Tests
// =============================================================================

/// Test that the history records every applied action with the turn
/// and phase it was taken in.
#[test]
fn test_history_records_actions() {
    let (arcana, state) = basic::standard_game(11).unwrap();
    let state = advance_to(&arcana, state, Phase::Attunement);
    let state = arcana.apply(&state, PlayerId::First, &Action::Draw).unwrap();
    let state = pass_turn(&arcana, state);

    let history: Vec<_> = state.history().iter().copied().collect();
    assert_eq!(history.len(), 6);

    assert_eq!(history[0].action, Action::AdvancePhase);
    assert_eq!(history[0].phase, Phase::Setup);
    assert_eq!(history[1].action, Action::Draw);
    assert_eq!(history[1].phase, Phase::Attunement);
    assert_eq!(history[5].action, Action::EndTurn);
    assert_eq!(history[5].phase, Phase::Respite);
    assert!(history.iter().all(|r| r.player == PlayerId::First));
    assert!(history.iter().all(|r| r.turn == 1));
}

/// Test that a mid-game state round-trips through serde_json and
/// bincode, RNG included, and keeps playing identically.
#[test]
fn test_state_serialization_round_trips() {
    let (arcana, state) = basic::standard_game(23).unwrap();
    let state = advance_to(&arcana, state, Phase::Attunement);
    let state = arcana.apply(&state, PlayerId::First, &Action::Draw).unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let from_json: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_string(&from_json).unwrap(), json);

    let bytes = bincode::serialize(&state).unwrap();
    let from_bytes: GameState = bincode::deserialize(&bytes).unwrap();
    assert_eq!(bincode::serialize(&from_bytes).unwrap(), bytes);

    // The restored RNG continues the same shuffle stream.
    let direct = pass_turn(&arcana, state);
    let restored = pass_turn(&arcana, from_json);
    assert_eq!(
        serde_json::to_string(&direct).unwrap(),
        serde_json::to_string(&restored).unwrap()
    );
}

/// Test that the same seed and action script reproduce the same game.
#[test]
fn test_same_seed_replays_identically() {
    let script = |(arcana, state): (Arcana, GameState)| -> GameState {
        let state = advance_to(&arcana, state, Phase::Attunement);
        let state = arcana.apply(&state, PlayerId::First, &Action::Draw).unwrap();
        let state = arcana
            .apply(&state, PlayerId::First, &Action::GainAether)
            .unwrap();
        let state = pass_turn(&arcana, state);
        let state = arcana
            .apply(&state, PlayerId::Second, &Action::Draw)
            .unwrap();
        pass_turn(&arcana, state)
    };

    let a = script(basic::standard_game(99).unwrap());
    let b = script(basic::standard_game(99).unwrap());
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

/// Test that a rejected action leaves the state byte-identical.
#[test]
fn test_rejection_leaves_state_untouched() {
    let (arcana, state) = basic::standard_game(11).unwrap();
    let state = advance_to(&arcana, state, Phase::Attunement);
    let state = arcana.apply(&state, PlayerId::First, &Action::Draw).unwrap();

    let before = bincode::serialize(&state).unwrap();

    assert!(arcana.apply(&state, PlayerId::First, &Action::Draw).is_err());
    assert!(arcana
        .apply(&state, PlayerId::Second, &Action::GainAether)
        .is_err());
    assert!(arcana.apply(&state, PlayerId::First, &Action::EndTurn).is_err());

    assert_eq!(bincode::serialize(&state).unwrap(), before);
}
