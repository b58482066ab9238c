//! The stock Rohan's Last Stand match: card set, deck compositions,
//! reinforcement grant and hate table.
//!
//! The engine itself hardcodes no card data; this module is the
//! canonical `MatchConfig` the shipped game plays with. Custom card sets
//! build their own config the same way.

use crate::cards::{CardCatalog, CardDefinition, CardId, PlayCondition, SpecialAbility};
use crate::core::Side;
use crate::director::{MatchConfig, MatchConfigBuilder};

// Player cards
/// Strider: inspiring frontline hero.
pub const STRIDER: CardId = CardId::new(0);
/// Elven Prince: fragile armor-piercing striker.
pub const ELVEN_PRINCE: CardId = CardId::new(1);
/// Recruit: the rank and file.
pub const RECRUIT: CardId = CardId::new(2);
/// Elf Soldier: armor-piercing regular.
pub const ELF_SOLDIER: CardId = CardId::new(3);
/// Lockbearer: defensive anchor, inspires while holding.
pub const LOCKBEARER: CardId = CardId::new(4);
/// The White: brings reinforcements when he takes the field.
pub const THE_WHITE: CardId = CardId::new(5);
/// The King: inspiring and hard to bring down.
pub const KING: CardId = CardId::new(6);
/// Eomer: reinforcement rider, not in the starting deck.
pub const EOMER: CardId = CardId::new(7);
/// Cavalry: reinforcement riders striking by surprise.
pub const CAVALRY: CardId = CardId::new(8);

// Enemy cards
/// Uruk-Hai: hard-hitting shock troop.
pub const URUK: CardId = CardId::new(9);
/// Orc: expendable attacker.
pub const ORC: CardId = CardId::new(10);
/// Dunlending: hates the horse-lords and their kin.
pub const DUNLENDING: CardId = CardId::new(11);
/// Berserker: rallies the host as it charges.
pub const BERSERKER: CardId = CardId::new(12);
/// Battering Ram: unblockable by anything but dedicated defenders.
pub const BATTERING_RAM: CardId = CardId::new(13);
/// Felgrom: the bomb-bearer. Mutual annihilation.
pub const FELGROM: CardId = CardId::new(14);

/// Build the stock card catalog.
#[must_use]
pub fn last_stand_catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();

    catalog.register(
        CardDefinition::new(STRIDER, "Strider", 7, 7, 2).with_special(SpecialAbility::Inspire),
    );
    catalog.register(
        CardDefinition::new(ELVEN_PRINCE, "Elven Prince", 4, 9, 0)
            .with_special(SpecialAbility::ArmorPierce),
    );
    catalog.register(CardDefinition::new(RECRUIT, "Recruit", 3, 2, 2));
    catalog.register(
        CardDefinition::new(ELF_SOLDIER, "Elf Soldier", 4, 4, 0)
            .with_special(SpecialAbility::ArmorPierce),
    );
    catalog.register(
        CardDefinition::new(LOCKBEARER, "Lockbearer", 10, 6, 4)
            .with_special(SpecialAbility::Inspire)
            .with_condition(PlayCondition::DefenseOnly),
    );
    catalog.register(
        CardDefinition::new(THE_WHITE, "The White", 24, 8, 0)
            .with_special(SpecialAbility::Reinforce),
    );
    catalog.register(
        CardDefinition::new(KING, "The King", 9, 5, 5).with_special(SpecialAbility::Inspire),
    );
    catalog.register(
        CardDefinition::new(EOMER, "Eomer", 5, 6, 2).with_special(SpecialAbility::Inspire),
    );
    catalog.register(
        CardDefinition::new(CAVALRY, "Cavalry", 5, 5, 2).with_special(SpecialAbility::Surprise),
    );

    catalog.register(CardDefinition::new(URUK, "Uruk-Hai", 3, 5, 1));
    catalog.register(CardDefinition::new(ORC, "Orc", 3, 4, 0));
    catalog.register(
        CardDefinition::new(DUNLENDING, "Dunlending", 3, 3, 1).with_special(SpecialAbility::Hate),
    );
    catalog.register(
        CardDefinition::new(BERSERKER, "Berserker", 9, 6, 3).with_special(SpecialAbility::Rally),
    );
    catalog.register(
        CardDefinition::new(BATTERING_RAM, "Battering Ram", 2, 10, 1)
            .with_special(SpecialAbility::Surprise)
            .with_condition(PlayCondition::AttackOnly),
    );
    catalog.register(
        CardDefinition::new(FELGROM, "Felgrom", 1, 0, 20)
            .with_special(SpecialAbility::Kamikaze)
            .with_condition(PlayCondition::AttackOnly),
    );

    catalog
}

/// Build the stock match configuration: both deck lists, the
/// reinforcement grant (one Eomer, two Cavalry) and the hate table
/// (Cavalry +1, Recruit +1, The King +2).
#[must_use]
pub fn last_stand_config() -> MatchConfig {
    MatchConfigBuilder::new(last_stand_catalog())
        .deck(
            Side::Player,
            vec![
                (STRIDER, 2),
                (ELVEN_PRINCE, 2),
                (RECRUIT, 20),
                (ELF_SOLDIER, 10),
                (LOCKBEARER, 2),
                (THE_WHITE, 1),
                (KING, 1),
            ],
        )
        .deck(
            Side::Enemy,
            vec![
                (URUK, 10),
                (ORC, 15),
                (DUNLENDING, 10),
                (BERSERKER, 8),
                (BATTERING_RAM, 2),
                (FELGROM, 2),
            ],
        )
        .reinforcements(vec![EOMER, CAVALRY, CAVALRY])
        .hate_bonus(CAVALRY, 1)
        .hate_bonus(RECRUIT, 1)
        .hate_bonus(KING, 2)
        .build()
}
