//! Match configuration.
//!
//! Everything that used to be a static table - the card catalog, the two
//! deck compositions, the reinforcement grant, the hated-card bonuses -
//! is an explicitly constructed `MatchConfig` handed to the `Director`
//! at startup. The engine hardcodes no card data.

use rustc_hash::FxHashMap;

use crate::cards::{CardCatalog, CardId};
use crate::core::{Side, SideMap};

/// Deck composition: copy counts per card type, consumed once at deck
/// build time.
pub type DeckList = Vec<(CardId, u32)>;

/// Immutable configuration for a match.
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// All card definitions a match can reference.
    pub catalog: CardCatalog,
    /// Per-side deck composition.
    pub decks: SideMap<DeckList>,
    /// Health both pools start at.
    pub starting_health: i32,
    /// Hands are replenished up to this many cards.
    pub hand_limit: usize,
    /// Cards granted to the acting side's hand when a `Reinforce` card
    /// is played. Duplicates mean multiple copies.
    pub reinforcements: Vec<CardId>,
    /// Bonus attack a `Hate` card gains per hated defender type.
    pub hate_bonuses: FxHashMap<CardId, i32>,
}

/// Builder for `MatchConfig`.
///
/// ## Example
///
/// ```
/// use laststand::cards::{CardCatalog, CardDefinition, CardId};
/// use laststand::core::Side;
/// use laststand::director::MatchConfigBuilder;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new(CardId::new(0), "Recruit", 3, 2, 2));
/// catalog.register(CardDefinition::new(CardId::new(1), "Orc", 3, 4, 0));
///
/// let config = MatchConfigBuilder::new(catalog)
///     .deck(Side::Player, vec![(CardId::new(0), 20)])
///     .deck(Side::Enemy, vec![(CardId::new(1), 20)])
///     .build();
///
/// assert_eq!(config.starting_health, 20);
/// assert_eq!(config.hand_limit, 5);
/// ```
pub struct MatchConfigBuilder {
    catalog: CardCatalog,
    decks: SideMap<DeckList>,
    starting_health: i32,
    hand_limit: usize,
    reinforcements: Vec<CardId>,
    hate_bonuses: FxHashMap<CardId, i32>,
}

impl MatchConfigBuilder {
    /// Start a builder over `catalog`.
    #[must_use]
    pub fn new(catalog: CardCatalog) -> Self {
        Self {
            catalog,
            decks: SideMap::with_default(),
            starting_health: 20,
            hand_limit: 5,
            reinforcements: Vec::new(),
            hate_bonuses: FxHashMap::default(),
        }
    }

    /// Set a side's deck composition.
    #[must_use]
    pub fn deck(mut self, side: Side, deck: DeckList) -> Self {
        self.decks[side] = deck;
        self
    }

    /// Set the starting health for both pools (default 20).
    #[must_use]
    pub fn starting_health(mut self, health: i32) -> Self {
        assert!(health > 0, "Starting health must be positive");
        self.starting_health = health;
        self
    }

    /// Set the hand replenishment limit (default 5).
    #[must_use]
    pub fn hand_limit(mut self, limit: usize) -> Self {
        assert!(limit > 0, "Hand limit must be positive");
        self.hand_limit = limit;
        self
    }

    /// Set the cards a `Reinforce` play grants.
    #[must_use]
    pub fn reinforcements(mut self, cards: Vec<CardId>) -> Self {
        self.reinforcements = cards;
        self
    }

    /// Add a hated card type with its attack bonus.
    #[must_use]
    pub fn hate_bonus(mut self, target: CardId, bonus: i32) -> Self {
        self.hate_bonuses.insert(target, bonus);
        self
    }

    /// Build the config.
    ///
    /// Panics if any deck list, reinforcement grant or hate entry
    /// references an unregistered card ID.
    #[must_use]
    pub fn build(self) -> MatchConfig {
        for (side, deck) in self.decks.iter() {
            for (id, _) in deck {
                assert!(
                    self.catalog.contains(*id),
                    "{side} deck references unregistered card {id}"
                );
            }
        }
        for id in &self.reinforcements {
            assert!(
                self.catalog.contains(*id),
                "Reinforcement grant references unregistered card {id}"
            );
        }
        for id in self.hate_bonuses.keys() {
            assert!(
                self.catalog.contains(*id),
                "Hate table references unregistered card {id}"
            );
        }

        MatchConfig {
            catalog: self.catalog,
            decks: self.decks,
            starting_health: self.starting_health,
            hand_limit: self.hand_limit,
            reinforcements: self.reinforcements,
            hate_bonuses: self.hate_bonuses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;

    fn catalog() -> CardCatalog {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::new(CardId::new(0), "Recruit", 3, 2, 2));
        catalog
    }

    #[test]
    fn test_defaults() {
        let config = MatchConfigBuilder::new(catalog()).build();
        assert_eq!(config.starting_health, 20);
        assert_eq!(config.hand_limit, 5);
        assert!(config.reinforcements.is_empty());
        assert!(config.hate_bonuses.is_empty());
    }

    #[test]
    fn test_builder_settings() {
        let config = MatchConfigBuilder::new(catalog())
            .deck(Side::Player, vec![(CardId::new(0), 4)])
            .starting_health(30)
            .hand_limit(7)
            .reinforcements(vec![CardId::new(0)])
            .hate_bonus(CardId::new(0), 2)
            .build();

        assert_eq!(config.decks[Side::Player], vec![(CardId::new(0), 4)]);
        assert!(config.decks[Side::Enemy].is_empty());
        assert_eq!(config.starting_health, 30);
        assert_eq!(config.hand_limit, 7);
        assert_eq!(config.hate_bonuses.get(&CardId::new(0)), Some(&2));
    }

    #[test]
    #[should_panic(expected = "unregistered card")]
    fn test_unknown_deck_card_panics() {
        let _ = MatchConfigBuilder::new(catalog())
            .deck(Side::Enemy, vec![(CardId::new(99), 1)])
            .build();
    }
}
