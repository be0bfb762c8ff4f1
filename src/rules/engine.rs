//! The Arcana rules engine.
//!
//! ## Validation pipeline
//!
//! `apply` rejects before it mutates: game over, wrong seat, wrong
//! phase, then the action-specific checks (per-phase allowances, costs,
//! targets). Only a fully validated action produces a successor state,
//! built by mutating a clone of the input; the `im` history makes that
//! clone cheap. A rejected action returns the input state untouched.
//!
//! ## Outcome
//!
//! After every applied action the engine re-reads both life totals. A
//! player at zero loses on the spot; both at zero is a draw. The first
//! decided outcome is final and every later action fails `GameOver`.

use crate::cards::{CardCatalog, CardKind};
use crate::combat;
use crate::core::{
    Action, ActionRecord, AttackTarget, GameState, Phase, PlayerId, RuleError,
};
use crate::hooks::HookRegistry;
use crate::zones::{SPELL_SLOT_COUNT, SPIRIT_SLOT_COUNT};

use super::GameResult;

/// Aether credited by the Attunement `GainAether` action.
pub const ATTUNEMENT_GAIN: u8 = 2;

/// The rules of one configured game: catalog plus hooks.
///
/// `Arcana` is stateless with respect to any particular match. The same
/// value can drive many [`GameState`]s concurrently, which is what the
/// apply-returns-successor shape is for.
pub struct Arcana {
    catalog: CardCatalog,
    hooks: HookRegistry,
}

impl std::fmt::Debug for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `hooks` holds non-Debug trait objects, so it is elided.
        f.debug_struct("Arcana")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl Arcana {
    pub(crate) fn new(catalog: CardCatalog, hooks: HookRegistry) -> Self {
        Self { catalog, hooks }
    }

    /// The card catalog this game is played with.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Validate and apply `action` for `player`, returning the successor
    /// state.
    ///
    /// On any rejection the input state is returned to the caller
    /// exactly as it was: no partial mutation is ever observable.
    pub fn apply(
        &self,
        state: &GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<GameState, RuleError> {
        if state.is_over() {
            return Err(RuleError::GameOver);
        }
        if player != state.active_player() {
            return Err(RuleError::NotActivePlayer { player });
        }
        if let Some(expected) = action.home_phase() {
            if expected != state.phase() {
                return Err(RuleError::WrongPhase {
                    expected,
                    actual: state.phase(),
                });
            }
        }

        let mut next = state.clone();
        let turn = next.turn_number();
        let phase = next.phase();

        self.dispatch(&mut next, player, action)?;

        next.push_history(ActionRecord::new(player, *action, turn, phase));
        // Phase-ending actions belong to the phase they left, whose log
        // is already cleared
        if !matches!(action, Action::AdvancePhase | Action::EndTurn) {
            next.turn.log_action(*action);
        }
        self.check_outcome(&mut next);

        Ok(next)
    }

    /// Every action `player` could legally submit right now.
    ///
    /// Empty for the non-active player and for a decided game. Each
    /// returned action is guaranteed to pass `apply` against this
    /// state.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        let mut actions = Vec::new();
        if state.is_over() || player != state.active_player() {
            return actions;
        }

        match state.phase() {
            Phase::Setup => {}
            Phase::Attunement => self.attunement_actions(state, player, &mut actions),
            Phase::Memorization => self.memorization_actions(state, player, &mut actions),
            Phase::Invocation => self.invocation_actions(state, player, &mut actions),
            Phase::Respite => actions.push(Action::EndTurn),
        }

        if state.phase().next_in_turn().is_some() {
            actions.push(Action::AdvancePhase);
        }
        actions
    }

    /// The decided outcome of `state`, if any.
    #[must_use]
    pub fn result(&self, state: &GameState) -> Option<GameResult> {
        state.outcome()
    }

    fn dispatch(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<(), RuleError> {
        match *action {
            Action::Draw => {
                if state.turn.took_action(|a| matches!(a, Action::Draw)) {
                    return Err(RuleError::ActionLimitExceeded {
                        phase: Phase::Attunement,
                    });
                }
                state.draw_card(player)?;
            }
            Action::GainAether => {
                if state.turn.took_action(|a| matches!(a, Action::GainAether)) {
                    return Err(RuleError::ActionLimitExceeded {
                        phase: Phase::Attunement,
                    });
                }
                state.player_mut(player).aether.gain(ATTUNEMENT_GAIN);
            }
            Action::SummonSpirit { card } => {
                self.check_memorization_allowance(state)?;
                if !self.catalog.lookup(card)?.kind.is_spirit() {
                    return Err(RuleError::NotASpiritCard { card });
                }
                state.player_mut(player).zones.summon_spirit(card)?;
            }
            Action::PrepareSpell { card } => {
                self.check_memorization_allowance(state)?;
                if !self.catalog.lookup(card)?.kind.is_spell() {
                    return Err(RuleError::NotASpellCard { card });
                }
                state.player_mut(player).zones.prepare_spell(card)?;
            }
            Action::ReplaceSpell { slot, card } => {
                self.check_memorization_allowance(state)?;
                if !self.catalog.lookup(card)?.kind.is_spell() {
                    return Err(RuleError::NotASpellCard { card });
                }
                state.player_mut(player).zones.replace_spell(slot, card)?;
            }
            Action::ActivatePlayerAbility => {
                self.check_memorization_allowance(state)?;
                if let Some(ability) = self.hooks.ability(player) {
                    let delta = ability.invoke(state, player);
                    delta.apply_to(state, &self.catalog)?;
                }
            }
            Action::ActivateSpellStack { slot, copies } => {
                combat::resolve_spell_activation(
                    &self.catalog,
                    &self.hooks,
                    state,
                    player,
                    slot,
                    copies,
                )?;
            }
            Action::DeclareAttack { attacker, target } => {
                combat::resolve_attack(
                    &self.catalog,
                    &self.hooks,
                    state,
                    player,
                    attacker,
                    target,
                )?;
            }
            Action::AdvancePhase => {
                state.turn.advance_phase()?;
            }
            Action::EndTurn => {
                state.end_turn();
            }
        }
        Ok(())
    }

    fn check_memorization_allowance(&self, state: &GameState) -> Result<(), RuleError> {
        if state.turn.took_action(|a| a.is_memorization_action()) {
            return Err(RuleError::ActionLimitExceeded {
                phase: Phase::Memorization,
            });
        }
        Ok(())
    }

    fn attunement_actions(&self, state: &GameState, player: PlayerId, out: &mut Vec<Action>) {
        let zones = &state.player(player).zones;
        let can_draw = !zones.deck().is_empty() || !zones.discard().is_empty();
        if can_draw && !state.turn.took_action(|a| matches!(a, Action::Draw)) {
            out.push(Action::Draw);
        }
        if !state.turn.took_action(|a| matches!(a, Action::GainAether)) {
            out.push(Action::GainAether);
        }
    }

    fn memorization_actions(&self, state: &GameState, player: PlayerId, out: &mut Vec<Action>) {
        if state.turn.took_action(|a| a.is_memorization_action()) {
            return;
        }
        let zones = &state.player(player).zones;
        let mut seen: Vec<_> = Vec::new();
        for &card in zones.hand() {
            if seen.contains(&card) {
                continue;
            }
            seen.push(card);
            let Ok(def) = self.catalog.lookup(card) else {
                continue;
            };
            match def.kind {
                CardKind::Spirit(_) => {
                    if zones.spirit_count() < SPIRIT_SLOT_COUNT {
                        out.push(Action::SummonSpirit { card });
                    }
                }
                CardKind::Spell => {
                    let has_empty_slot = zones.stacks().count() < SPELL_SLOT_COUNT;
                    if has_empty_slot || zones.stacks().any(|(_, s)| s.can_push(card)) {
                        out.push(Action::PrepareSpell { card });
                    }
                    for (slot, _) in zones.stacks() {
                        out.push(Action::ReplaceSpell { slot, card });
                    }
                }
            }
        }
        // Legal with or without a registered ability; dispatch treats the
        // unregistered case as a no-op that still spends the allowance.
        out.push(Action::ActivatePlayerAbility);
    }

    fn invocation_actions(&self, state: &GameState, player: PlayerId, out: &mut Vec<Action>) {
        let me = state.player(player);
        let enemy = state.player(player.opponent());

        for (slot, stack) in me.zones.stacks() {
            let card = stack.card();
            for copies in 1..=stack.len() {
                let Ok(cost) = self.catalog.activation_cost(card, copies) else {
                    continue;
                };
                if me.aether.can_spend(cost) {
                    out.push(Action::ActivateSpellStack { slot, copies });
                }
            }
        }

        for (slot, instance) in me.zones.spirits() {
            if instance.has_attacked {
                continue;
            }
            let Ok(def) = self.catalog.lookup(instance.card) else {
                continue;
            };
            if !me.aether.can_spend(def.cost.price(1)) {
                continue;
            }
            if enemy.zones.has_spirits() {
                for (target, _) in enemy.zones.spirits() {
                    out.push(Action::DeclareAttack {
                        attacker: slot,
                        target: AttackTarget::Spirit { slot: target },
                    });
                }
            } else {
                out.push(Action::DeclareAttack {
                    attacker: slot,
                    target: AttackTarget::Player,
                });
            }
        }
    }

    fn check_outcome(&self, state: &mut GameState) {
        let first_down = state.player(PlayerId::First).is_defeated();
        let second_down = state.player(PlayerId::Second).is_defeated();
        let result = match (first_down, second_down) {
            (true, true) => GameResult::Draw,
            (true, false) => GameResult::Winner(PlayerId::Second),
            (false, true) => GameResult::Winner(PlayerId::First),
            (false, false) => return,
        };
        state.set_outcome(result);
    }
}
