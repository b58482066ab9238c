//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type.
//! For example, "Uruk-Hai" has 3 max health, 5 attack and 1 defense -
//! these are part of the definition and never change during a match.
//!
//! Instance-specific data (current health, buffed attack) is stored
//! separately in `CardInstance`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// This identifies the "type" of card (e.g., "Uruk-Hai"),
/// not a specific copy in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Special abilities a card type can carry.
///
/// Abilities split into two groups:
/// - On-play (`Inspire`, `Rally`, `Reinforce`): resolved by the Director
///   the moment the card lands on the board.
/// - Assault-time (`Surprise`, `ArmorPierce`, `Hate`, `Kamikaze`):
///   resolved during combat, or (for `Surprise`) consulted by the
///   defender-legality check.
///
/// The set is closed: dispatch is a plain `match`, not trait objects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialAbility {
    /// No special ability.
    #[default]
    None,
    /// Cannot be blocked by defenders unless they are `DefenseOnly`.
    Surprise,
    /// On play: +1 attack to every placed card on the acting side.
    Inspire,
    /// Alias of `Inspire` with different flavor.
    Rally,
    /// On play: grants the configured reinforcement cards to the acting
    /// side's hand.
    Reinforce,
    /// In combat: the opposing card's defense drops to 0 for the exchange.
    ArmorPierce,
    /// In combat: bonus attack against the configured hated card types.
    Hate,
    /// In combat: both combatants' health drops to 0 before damage math.
    Kamikaze,
}

/// Restrictions on when a card may be played.
///
/// Whether a play counts as attacking or defending is decided by the
/// round's turn order, not by the card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayCondition {
    /// May be played while attacking or defending.
    #[default]
    Free,
    /// May only be played while the acting side is attacking.
    AttackOnly,
    /// May only be played while the acting side is defending.
    DefenseOnly,
}

/// Static card definition.
///
/// Contains the unchanging data about a card type. Exactly one
/// definition exists per `CardId` in a `CardCatalog`.
///
/// ## Example
///
/// ```
/// use laststand::cards::{CardDefinition, CardId, PlayCondition, SpecialAbility};
///
/// let ram = CardDefinition::new(CardId::new(13), "Battering Ram", 2, 10, 1)
///     .with_special(SpecialAbility::Surprise)
///     .with_condition(PlayCondition::AttackOnly);
///
/// assert_eq!(ram.attack, 10);
/// assert_eq!(ram.condition, PlayCondition::AttackOnly);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Health a fresh copy starts with.
    pub max_health: i32,

    /// Base attack.
    pub attack: i32,

    /// Base defense.
    pub defense: i32,

    /// Special ability, if any.
    pub special: SpecialAbility,

    /// Play-legality condition.
    pub condition: PlayCondition,
}

impl CardDefinition {
    /// Create a new card definition with no special ability and no
    /// play condition.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        max_health: i32,
        attack: i32,
        defense: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            max_health,
            attack,
            defense,
            special: SpecialAbility::None,
            condition: PlayCondition::Free,
        }
    }

    /// Set the special ability (builder pattern).
    #[must_use]
    pub fn with_special(mut self, special: SpecialAbility) -> Self {
        self.special = special;
        self
    }

    /// Set the play condition (builder pattern).
    #[must_use]
    pub fn with_condition(mut self, condition: PlayCondition) -> Self {
        self.condition = condition;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_definition_builder() {
        let card = CardDefinition::new(CardId::new(1), "Test Card", 3, 2, 2);

        assert_eq!(card.name, "Test Card");
        assert_eq!(card.id, CardId::new(1));
        assert_eq!(card.special, SpecialAbility::None);
        assert_eq!(card.condition, PlayCondition::Free);

        let card = card
            .with_special(SpecialAbility::Hate)
            .with_condition(PlayCondition::DefenseOnly);

        assert_eq!(card.special, SpecialAbility::Hate);
        assert_eq!(card.condition, PlayCondition::DefenseOnly);
    }

    #[test]
    fn test_card_definition_serialization() {
        let card = CardDefinition::new(CardId::new(1), "Test", 5, 4, 3)
            .with_special(SpecialAbility::Surprise);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
