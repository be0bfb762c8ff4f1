//! Combat and spell resolution.
//!
//! ## Forced targeting
//!
//! An attack never bypasses the defender's board: while the defending
//! player controls any Spirit, the attack must target one of those
//! Spirits, and only an empty board exposes the player themselves.
//! [`check_attack_target`] is the single source of that rule.
//!
//! ## Resolution
//!
//! Attacks and spell activations share a shape: validate everything,
//! pay the Aether price, then mutate. Attack damage lands as tokens on
//! the defender; a Spirit whose tokens reach its printed health is
//! destroyed and its card returned to the discard pile. The attacker
//! takes no damage back unless the surviving defender carries a
//! counter-attack hook.
//!
//! Costs are never hardcoded here. Every price comes from the catalog's
//! [`ActivationCost`](crate::cards::ActivationCost) model: a Spirit
//! attacks at one copy's price, a spell activation is priced at however
//! many copies it consumes.

use crate::cards::{CardCatalog, CardId};
use crate::core::{AttackTarget, GameState, PlayerId, RuleError};
use crate::hooks::{EffectContext, HookRegistry};
use crate::zones::{PlayerZones, SPIRIT_SLOT_COUNT};

/// Validate `target` against the defender's board.
///
/// Rejects with `InvalidSlot` for an out-of-range slot, `SlotEmpty` for
/// an unoccupied slot while other defenders exist, and
/// `IllegalAttackTarget` when the target class itself is wrong: a
/// Spirit target against an empty board, or a player target while any
/// defender stands.
pub fn check_attack_target(defender: &PlayerZones, target: AttackTarget) -> Result<(), RuleError> {
    match target {
        AttackTarget::Spirit { slot } => {
            if slot >= SPIRIT_SLOT_COUNT {
                return Err(RuleError::InvalidSlot { index: slot });
            }
            if !defender.has_spirits() {
                return Err(RuleError::IllegalAttackTarget);
            }
            defender.spirit(slot)?;
            Ok(())
        }
        AttackTarget::Player => {
            if defender.has_spirits() {
                return Err(RuleError::IllegalAttackTarget);
            }
            Ok(())
        }
    }
}

/// Resolve a declared attack for the active player.
///
/// Validation order: the attacker must exist and not have attacked,
/// the target must satisfy forced targeting, and the price (the
/// attacker's one-copy activation cost) must be payable. Only then
/// does damage land.
pub(crate) fn resolve_attack(
    catalog: &CardCatalog,
    hooks: &HookRegistry,
    state: &mut GameState,
    player: PlayerId,
    attacker: usize,
    target: AttackTarget,
) -> Result<(), RuleError> {
    let defender_side = player.opponent();

    let instance = *state.player(player).zones.spirit(attacker)?;
    if instance.has_attacked {
        return Err(RuleError::SpiritAlreadyAttacked { slot: attacker });
    }
    check_attack_target(&state.player(defender_side).zones, target)?;

    let power = catalog.spirit_stats(instance.card)?.power;
    let cost = catalog.lookup(instance.card)?.cost.price(1);
    state.player_mut(player).aether.spend(cost)?;
    state
        .player_mut(player)
        .zones
        .spirit_mut(attacker)?
        .mark_attacked();

    match target {
        AttackTarget::Spirit { slot } => {
            let (card, survived) = {
                let zones = &mut state.player_mut(defender_side).zones;
                let defender = zones.spirit_mut(slot)?;
                let card = defender.card;
                let total = defender.apply_damage(power);
                if total >= catalog.spirit_stats(card)?.health {
                    zones.destroy_spirit(slot)?;
                    (card, false)
                } else {
                    (card, true)
                }
            };
            if survived {
                if let Some(effect) = hooks.effect(card) {
                    let ctx = EffectContext {
                        player: defender_side,
                        card,
                        slot,
                        copies: 1,
                    };
                    let delta = effect.counter_attack(state, &ctx);
                    delta.apply_to(state, catalog)?;
                }
            }
        }
        AttackTarget::Player => {
            state.player_mut(defender_side).apply_damage(power);
        }
    }

    Ok(())
}

/// Resolve a spell-stack activation for the active player.
///
/// Consumes `copies` cards off the top of the stack in `slot`, paying
/// the catalog price for that count, then invokes the card's `activate`
/// hook exactly once with the copy count. A card with no registered
/// effect still activates: the copies are spent and discarded.
pub(crate) fn resolve_spell_activation(
    catalog: &CardCatalog,
    hooks: &HookRegistry,
    state: &mut GameState,
    player: PlayerId,
    slot: usize,
    copies: usize,
) -> Result<(), RuleError> {
    let (card, available) = {
        let stack = state.player(player).zones.stack(slot)?;
        (stack.card(), stack.len())
    };
    if copies == 0 || copies > available {
        return Err(RuleError::InsufficientStackSize {
            requested: copies,
            available,
        });
    }

    let cost = catalog.activation_cost(card, copies)?;
    state.player_mut(player).aether.spend(cost)?;
    state
        .player_mut(player)
        .zones
        .discard_from_stack(slot, copies)?;

    if let Some(effect) = hooks.effect(card) {
        let ctx = EffectContext {
            player,
            card,
            slot,
            copies,
        };
        let delta = effect.activate(state, &ctx);
        delta.apply_to(state, catalog)?;
    }

    Ok(())
}
