//! The basic Arcana card set.
//!
//! Three Spirits and two Spells, enough for a real game and for
//! exercising every engine path:
//!
//! - Stone Golem, Frost Wyrm, Inferno Dragon: plain bodies at three
//!   price points
//! - Firestorm: sweeps the enemy board for `3 x copies`
//! - Healing Wave: restores `4 x copies` life, clamped at the start total
//!
//! plus Channel Aether, the baseline player ability (one extra Aether
//! during Memorization).
//!
//! [`standard_game`] wires all of it into a ready-to-play match.

use crate::cards::{CardCatalog, CardDefinition, CardId};
use crate::core::{GameState, PlayerId, RuleError};
use crate::hooks::{CardEffect, EffectContext, PlayerAbility, StateDelta};
use crate::rules::{Arcana, ArcanaBuilder};

/// Stone Golem: cheap wall. Cost 1, power 2, health 8.
pub const STONE_GOLEM: CardId = CardId::new(1);

/// Frost Wyrm: mid-range attacker. Cost 2, power 4, health 12.
pub const FROST_WYRM: CardId = CardId::new(2);

/// Inferno Dragon: expensive finisher. Cost 3, power 6, health 16.
pub const INFERNO_DRAGON: CardId = CardId::new(3);

/// Firestorm: board sweep. Cost 3 per copy.
pub const FIRESTORM: CardId = CardId::new(10);

/// Healing Wave: life restoration. Cost 2 per copy.
pub const HEALING_WAVE: CardId = CardId::new(11);

/// The basic set's card definitions.
#[must_use]
pub fn catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    catalog.register(CardDefinition::spirit(STONE_GOLEM, "Stone Golem", 1, 2, 8));
    catalog.register(CardDefinition::spirit(FROST_WYRM, "Frost Wyrm", 2, 4, 12));
    catalog.register(CardDefinition::spirit(
        INFERNO_DRAGON,
        "Inferno Dragon",
        3,
        6,
        16,
    ));
    catalog.register(CardDefinition::spell(FIRESTORM, "Firestorm", 3));
    catalog.register(CardDefinition::spell(HEALING_WAVE, "Healing Wave", 2));
    catalog
}

/// Firestorm hits every enemy Spirit for `3 x copies`.
pub struct Firestorm;

impl CardEffect for Firestorm {
    fn activate(&self, state: &GameState, ctx: &EffectContext) -> StateDelta {
        let enemy = ctx.player.opponent();
        let amount = 3 * ctx.copies as u8;
        let mut delta = StateDelta::new();
        for (slot, _) in state.player(enemy).zones.spirits() {
            delta = delta.damage_spirit(enemy, slot, amount);
        }
        delta
    }
}

/// Healing Wave restores `4 x copies` life to its caster.
pub struct HealingWave;

impl CardEffect for HealingWave {
    fn activate(&self, _state: &GameState, ctx: &EffectContext) -> StateDelta {
        StateDelta::new().heal_player(ctx.player, 4 * ctx.copies as u8)
    }
}

/// Channel Aether: one extra Aether, once per turn.
pub struct ChannelAether;

impl PlayerAbility for ChannelAether {
    fn invoke(&self, _state: &GameState, player: PlayerId) -> StateDelta {
        StateDelta::new().gain_aether(player, 1)
    }
}

/// The standard 15-card deck list.
#[must_use]
pub fn standard_deck() -> Vec<CardId> {
    [
        vec![STONE_GOLEM; 4],
        vec![FROST_WYRM; 3],
        vec![INFERNO_DRAGON; 2],
        vec![FIRESTORM; 3],
        vec![HEALING_WAVE; 3],
    ]
    .concat()
}

/// A ready-to-play standard match: basic catalog, standard decks, all
/// hooks registered, Channel Aether on both sides.
pub fn standard_game(seed: u64) -> Result<(Arcana, GameState), RuleError> {
    ArcanaBuilder::new(catalog())
        .deck(PlayerId::First, standard_deck())
        .deck(PlayerId::Second, standard_deck())
        .effect(FIRESTORM, Box::new(Firestorm))
        .effect(HEALING_WAVE, Box::new(HealingWave))
        .ability(PlayerId::First, Box::new(ChannelAether))
        .ability(PlayerId::Second, Box::new(ChannelAether))
        .build(seed)
}
