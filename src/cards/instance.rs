//! Card instances - runtime card state.
//!
//! A `CardInstance` is a live copy of a catalog entry. Its health,
//! attack and defense start at the definition's base values, get bent
//! around by abilities and combat, and snap back to base when the card
//! is discarded or the round's assault resolves.
//!
//! Instances live in the Board's arena and are referred to everywhere
//! else by `CardHandle`. A handle sits in exactly one container (deck,
//! hand, or board slot) at any time; ownership transfers on
//! draw/play/discard, never duplicates.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};

/// Arena handle for a card instance.
///
/// Containers hold handles, never the instances themselves, so moving a
/// card between deck, hand and board is a handle move with no lifetime
/// bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardHandle(pub u32);

impl CardHandle {
    /// Create a new handle.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Handle({})", self.0)
    }
}

/// A card instance in a match.
///
/// `curr_health`, `attack` and `defense` are the mutable combat stats;
/// the immutable base values live in the `CardDefinition` referenced by
/// `card_id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Arena handle for this instance.
    pub handle: CardHandle,

    /// Which catalog entry this is a copy of.
    pub card_id: CardId,

    /// Current health. A card at 0 or below is dead and gets discarded.
    pub curr_health: i32,

    /// Current attack, possibly modified by buffs for this round.
    pub attack: i32,

    /// Current defense, possibly modified for this round.
    pub defense: i32,
}

impl CardInstance {
    /// Create a fresh instance from its definition, stats at base values.
    #[must_use]
    pub fn from_definition(handle: CardHandle, def: &CardDefinition) -> Self {
        Self {
            handle,
            card_id: def.id,
            curr_health: def.max_health,
            attack: def.attack,
            defense: def.defense,
        }
    }

    /// Reset health, attack and defense to the definition's base values.
    ///
    /// Used when a dead card recirculates to the bottom of its deck.
    pub fn reset_stats(&mut self, def: &CardDefinition) {
        debug_assert_eq!(self.card_id, def.id);
        self.curr_health = def.max_health;
        self.attack = def.attack;
        self.defense = def.defense;
    }

    /// Reset attack and defense only, leaving accumulated damage in place.
    ///
    /// Used on survivors after assault resolution: buffs, armor piercing
    /// and hate bonuses apply per round.
    pub fn reset_combat_stats(&mut self, def: &CardDefinition) {
        debug_assert_eq!(self.card_id, def.id);
        self.attack = def.attack;
        self.defense = def.defense;
    }

    /// Check whether this card is dead (health at or below 0).
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.curr_health <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recruit() -> CardDefinition {
        CardDefinition::new(CardId::new(2), "Recruit", 3, 2, 2)
    }

    #[test]
    fn test_from_definition() {
        let def = recruit();
        let card = CardInstance::from_definition(CardHandle::new(7), &def);

        assert_eq!(card.handle, CardHandle::new(7));
        assert_eq!(card.card_id, def.id);
        assert_eq!(card.curr_health, 3);
        assert_eq!(card.attack, 2);
        assert_eq!(card.defense, 2);
        assert!(!card.is_dead());
    }

    #[test]
    fn test_reset_stats() {
        let def = recruit();
        let mut card = CardInstance::from_definition(CardHandle::new(0), &def);

        card.curr_health = -2;
        card.attack = 9;
        card.defense = 0;

        card.reset_stats(&def);
        assert_eq!(card.curr_health, 3);
        assert_eq!(card.attack, 2);
        assert_eq!(card.defense, 2);
    }

    #[test]
    fn test_reset_combat_stats_keeps_damage() {
        let def = recruit();
        let mut card = CardInstance::from_definition(CardHandle::new(0), &def);

        card.curr_health = 1;
        card.attack = 5;
        card.defense = 0;

        card.reset_combat_stats(&def);
        assert_eq!(card.curr_health, 1); // Damage persists across rounds
        assert_eq!(card.attack, 2);
        assert_eq!(card.defense, 2);
    }

    #[test]
    fn test_is_dead() {
        let def = recruit();
        let mut card = CardInstance::from_definition(CardHandle::new(0), &def);

        card.curr_health = 0;
        assert!(card.is_dead());
        card.curr_health = -4;
        assert!(card.is_dead());
    }

    #[test]
    fn test_instance_serialization() {
        let def = recruit();
        let card = CardInstance::from_definition(CardHandle::new(3), &def);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
