//! Assault resolution: the combat phase of each round.
//!
//! All five slots resolve in index order within one
//! [`Director::turn_attack`] call. A lone card deals face damage to the
//! opposing health pool; a contested slot runs ability application
//! (both directions) and then the damage exchange, including overflow
//! and the stalemate fatigue rule.
//!
//! Ability math operates on plain [`Combatant`] stat snapshots so each
//! ability resolves deterministically from literal inputs; results are
//! written back to the arena afterwards.

use rustc_hash::FxHashMap;

use crate::board::ASSAULT_SLOTS;
use crate::cards::{CardHandle, CardId, SpecialAbility};
use crate::core::Side;

use super::Director;

/// Stat snapshot of one card during an assault exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Combatant {
    /// Catalog identity (consulted by `Hate`).
    pub card_id: CardId,
    /// The card's special ability.
    pub special: SpecialAbility,
    /// Attack for this exchange.
    pub attack: i32,
    /// Defense for this exchange.
    pub defense: i32,
    /// Health going into this exchange.
    pub health: i32,
}

/// Apply `attacker`'s assault-time ability against `defender`.
///
/// Called twice per contested slot, once per direction, before any
/// damage is computed, so ability-driven stat changes feed into the same
/// resolution pass:
///
/// - `ArmorPierce`: the defender's defense drops to 0.
/// - `Hate`: the attacker gains the configured bonus if the defender's
///   type is in the hated set.
/// - `Kamikaze`: both combatants' health drops to 0 - a guaranteed
///   mutual kill. The attacker's damage output is unaffected (damage
///   uses the attack stat, not health).
///
/// Everything else is a no-op here.
pub fn apply_assault_abilities(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    hate_bonuses: &FxHashMap<CardId, i32>,
) {
    match attacker.special {
        SpecialAbility::ArmorPierce => {
            defender.defense = 0;
        }
        SpecialAbility::Hate => {
            if let Some(bonus) = hate_bonuses.get(&defender.card_id) {
                attacker.attack += bonus;
            }
        }
        SpecialAbility::Kamikaze => {
            attacker.health = 0;
            defender.health = 0;
        }
        _ => {}
    }
}

impl Director {
    fn snapshot(&self, handle: CardHandle) -> Combatant {
        let card = self.board().card_unchecked(handle);
        Combatant {
            card_id: card.card_id,
            special: self.definition_of(handle).special,
            attack: card.attack,
            defense: card.defense,
            health: card.curr_health,
        }
    }

    fn write_back(&mut self, handle: CardHandle, combatant: &Combatant) {
        if let Some(card) = self.board_mut().card_mut(handle) {
            card.attack = combatant.attack;
            card.defense = combatant.defense;
            card.curr_health = combatant.health;
        }
    }

    fn damage_side(&mut self, side: Side, amount: i32) {
        let health = self.board().health(side);
        self.board_mut().set_health(side, health - amount);
    }

    /// Resolve the assault phase across all five slots.
    ///
    /// Per slot: empty slots are skipped; a lone card deals its current
    /// attack as face damage; a contested slot applies assault abilities
    /// in both directions, exchanges `max(0, attack - defense)` damage,
    /// spills overflow (`max(0, damage - pre-damage health)`) onto the
    /// owner's health pool, applies the 1-health fatigue of war when
    /// both damages are 0, and discards the dead back to their decks.
    ///
    /// Afterwards every surviving board card's attack/defense is reset
    /// to catalog base, both decks reshuffle, and both health pools are
    /// clamped to 0.
    ///
    /// Returns `true` iff both health pools remain above 0 (the match is
    /// still running).
    pub fn turn_attack(&mut self) -> bool {
        for slot in 0..ASSAULT_SLOTS {
            let player = self.board().slot(Side::Player, slot);
            let enemy = self.board().slot(Side::Enemy, slot);

            match (player, enemy) {
                (None, None) => {}
                (Some(handle), None) => {
                    let attack = self.board().card_unchecked(handle).attack;
                    self.damage_side(Side::Enemy, attack);
                }
                (None, Some(handle)) => {
                    let attack = self.board().card_unchecked(handle).attack;
                    self.damage_side(Side::Player, attack);
                }
                (Some(player_handle), Some(enemy_handle)) => {
                    self.resolve_contested(slot, player_handle, enemy_handle);
                }
            }
        }

        // Buffs, piercing and fatigue apply per round only
        for side in Side::all() {
            for slot in 0..ASSAULT_SLOTS {
                if let Some(handle) = self.board().slot(side, slot) {
                    let def = self.definition_of(handle).clone();
                    if let Some(card) = self.board_mut().card_mut(handle) {
                        card.reset_combat_stats(&def);
                    }
                }
            }
        }

        self.shuffle_deck(Side::Player);
        self.shuffle_deck(Side::Enemy);

        for side in Side::all() {
            let health = self.board().health(side);
            self.board_mut().set_health(side, health.max(0));
        }

        self.board().health(Side::Player) > 0 && self.board().health(Side::Enemy) > 0
    }

    fn resolve_contested(&mut self, slot: usize, player_handle: CardHandle, enemy_handle: CardHandle) {
        let mut player = self.snapshot(player_handle);
        let mut enemy = self.snapshot(enemy_handle);

        apply_assault_abilities(&mut player, &mut enemy, &self.config().hate_bonuses);
        apply_assault_abilities(&mut enemy, &mut player, &self.config().hate_bonuses);

        let dmg_to_player = (enemy.attack - player.defense).max(0);
        let dmg_to_enemy = (player.attack - enemy.defense).max(0);

        // Pre-damage health is read after abilities: a kamikaze target is
        // already at 0 here, so damage dealt to it spills over in full.
        let prev_player_hp = player.health;
        let prev_enemy_hp = enemy.health;

        player.health -= dmg_to_player;
        enemy.health -= dmg_to_enemy;

        let overflow_to_player = (dmg_to_player - prev_player_hp).max(0);
        let overflow_to_enemy = (dmg_to_enemy - prev_enemy_hp).max(0);

        // Fatigue of war: a pure defensive standoff wears both cards down
        if dmg_to_player == 0 && dmg_to_enemy == 0 {
            player.health -= 1;
            enemy.health -= 1;
        }

        self.write_back(player_handle, &player);
        self.write_back(enemy_handle, &enemy);

        if player.health <= 0 {
            self.discard_card(Side::Player, slot)
                .expect("contested slot holds the player card");
        }
        if enemy.health <= 0 {
            self.discard_card(Side::Enemy, slot)
                .expect("contested slot holds the enemy card");
        }

        if overflow_to_player > 0 {
            self.damage_side(Side::Player, overflow_to_player);
        }
        if overflow_to_enemy > 0 {
            self.damage_side(Side::Enemy, overflow_to_enemy);
        }
    }
}
