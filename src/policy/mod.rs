//! The AI opponent's decision logic.
//!
//! `OpponentPolicy` drives one side of the match with simple
//! probabilistic/greedy heuristics: fill empty slots left to right when
//! attacking, block occupied opposing slots when defending, and with a
//! small fixed probability skip a slot entirely to simulate imperfect
//! aggression.
//!
//! Every placement goes through [`Director::play_card`], so the policy
//! can never bypass the legality rules; rejected attempts just move it
//! on to the next candidate.

use crate::board::ASSAULT_SLOTS;
use crate::cards::PlayCondition;
use crate::core::{GameRng, Side};
use crate::director::Director;

/// Default probability of skipping a slot.
pub const DEFAULT_SKIP_CHANCE: f64 = 0.2;

/// Greedy, slightly random slot-filling policy for one side.
#[derive(Clone, Debug)]
pub struct OpponentPolicy {
    side: Side,
    skip_chance: f64,
    rng: GameRng,
}

impl OpponentPolicy {
    /// Create a policy driving `side`, with its own seeded RNG.
    #[must_use]
    pub fn new(side: Side, seed: u64) -> Self {
        Self {
            side,
            skip_chance: DEFAULT_SKIP_CHANCE,
            rng: GameRng::new(seed),
        }
    }

    /// Override the per-slot skip probability (0.0 disables skipping).
    #[must_use]
    pub fn with_skip_chance(mut self, skip_chance: f64) -> Self {
        assert!((0.0..=1.0).contains(&skip_chance));
        self.skip_chance = skip_chance;
        self
    }

    /// The side this policy drives.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Take one placement turn: replenish the hand, then attack or
    /// defend according to this round's turn order.
    pub fn take_turn(&mut self, director: &mut Director) {
        director.draw_cards(self.side, director.config().hand_limit);

        if director.is_attacking(self.side) {
            self.attack(director);
        } else {
            self.defend(director);
        }
    }

    /// Index of the first hand card that may legally attack, if any.
    fn first_eligible_attacker(&self, director: &Director) -> Option<usize> {
        director.hand(self.side).iter().position(|&handle| {
            director.definition_of(handle).condition != PlayCondition::DefenseOnly
        })
    }

    fn attack(&mut self, director: &mut Director) {
        for slot in 0..ASSAULT_SLOTS {
            if director.slots(self.side)[slot].is_some() {
                continue;
            }
            if self.rng.gen_bool(self.skip_chance) {
                continue;
            }

            while director.slots(self.side)[slot].is_none() {
                let Some(index) = self.first_eligible_attacker(director) else {
                    return; // Nothing left worth playing anywhere
                };
                if director.play_card(self.side, index, slot).is_err() {
                    break;
                }
            }
        }
    }

    fn defend(&mut self, director: &mut Director) {
        let opponent = self.side.opponent();

        for slot in 0..ASSAULT_SLOTS {
            if director.slots(opponent)[slot].is_none() {
                continue;
            }
            if director.slots(self.side)[slot].is_some() {
                continue;
            }
            if self.rng.gen_bool(self.skip_chance) {
                continue;
            }

            // First playable card wins; play_card enforces full legality
            for index in 0..director.hand(self.side).len() {
                if director.play_card(self.side, index, slot).is_ok() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, CardDefinition, CardId, SpecialAbility};
    use crate::director::{MatchConfig, MatchConfigBuilder};

    const FOOTMAN: CardId = CardId::new(0);
    const SENTRY: CardId = CardId::new(1);
    const RAIDER: CardId = CardId::new(10);
    const AMBUSHER: CardId = CardId::new(11);

    fn config() -> MatchConfig {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::new(FOOTMAN, "Footman", 3, 2, 2));
        catalog.register(
            CardDefinition::new(SENTRY, "Sentry", 6, 1, 5)
                .with_condition(PlayCondition::DefenseOnly),
        );
        catalog.register(CardDefinition::new(RAIDER, "Raider", 3, 4, 0));
        catalog.register(
            CardDefinition::new(AMBUSHER, "Ambusher", 2, 10, 1)
                .with_special(SpecialAbility::Surprise)
                .with_condition(PlayCondition::AttackOnly),
        );

        MatchConfigBuilder::new(catalog)
            .deck(Side::Player, vec![(FOOTMAN, 15), (SENTRY, 5)])
            .deck(Side::Enemy, vec![(RAIDER, 15), (AMBUSHER, 5)])
            .build()
    }

    #[test]
    fn test_attack_fills_slots_without_skipping() {
        let mut director = Director::new(config(), 3);
        director.start_game();
        director.flip_first(); // Enemy attacks

        let mut policy = OpponentPolicy::new(Side::Enemy, 9).with_skip_chance(0.0);
        policy.take_turn(&mut director);

        // Hand limit is 5, so all five slots get a card
        assert!(director
            .slots(Side::Enemy)
            .iter()
            .all(Option::is_some));
    }

    #[test]
    fn test_attack_never_plays_defense_only() {
        let mut director = Director::new(config(), 4);
        director.start_game();

        let mut policy = OpponentPolicy::new(Side::Player, 9).with_skip_chance(0.0);
        policy.take_turn(&mut director);

        for slot in 0..ASSAULT_SLOTS {
            if let Some(card) = director.slot_card(Side::Player, slot) {
                assert_ne!(card.card_id, SENTRY);
            }
        }
    }

    #[test]
    fn test_defend_blocks_only_occupied_slots() {
        let mut director = Director::new(config(), 5);
        director.start_game();

        // Player attacks slots 1 and 3
        for slot in [1, 3] {
            let index = director
                .hand(Side::Player)
                .iter()
                .position(|&h| director.definition_of(h).condition != PlayCondition::DefenseOnly)
                .unwrap();
            director.play_card(Side::Player, index, slot).unwrap();
        }

        // Guarantee the enemy hand holds blockers regardless of the deal
        let raider = director.config().catalog.get_unchecked(RAIDER).clone();
        for _ in 0..2 {
            director.board_mut().spawn_into_hand(Side::Enemy, &raider);
        }

        let mut policy = OpponentPolicy::new(Side::Enemy, 9).with_skip_chance(0.0);
        policy.take_turn(&mut director);

        for slot in 0..ASSAULT_SLOTS {
            let blocked = director.slots(Side::Enemy)[slot].is_some();
            let attacked = director.slots(Side::Player)[slot].is_some();
            assert!(
                !blocked || attacked,
                "enemy placed a defender in unattacked slot {slot}"
            );
        }
        // Raiders are free to block; both attacked slots got defenders
        assert!(director.slots(Side::Enemy)[1].is_some());
        assert!(director.slots(Side::Enemy)[3].is_some());
    }

    #[test]
    fn test_take_turn_replenishes_hand() {
        let mut director = Director::new(config(), 6);
        director.start_game();

        // Burn the enemy hand down by playing while attacking
        director.flip_first();
        let mut policy = OpponentPolicy::new(Side::Enemy, 9).with_skip_chance(0.0);
        policy.take_turn(&mut director);
        assert!(director.hand(Side::Enemy).len() < 5);

        policy.take_turn(&mut director);
        assert_eq!(director.hand(Side::Enemy).len(), 5);
    }

    #[test]
    fn test_policy_is_deterministic_per_seed() {
        let run = |seed: u64| -> Vec<Option<CardId>> {
            let mut director = Director::new(config(), 11);
            director.start_game();
            director.flip_first();
            let mut policy = OpponentPolicy::new(Side::Enemy, seed);
            policy.take_turn(&mut director);
            (0..ASSAULT_SLOTS)
                .map(|slot| director.slot_card(Side::Enemy, slot).map(|c| c.card_id))
                .collect()
        };

        assert_eq!(run(21), run(21));
    }
}
