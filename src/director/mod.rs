//! The rules authority.
//!
//! `Director` owns the `Board` and is its only mutator. It validates
//! plays against the turn-order/condition legality rules, resolves
//! on-play special abilities, manages deck building, shuffling and hand
//! replenishment, and (in `assault`) runs the combat-resolution phase.
//!
//! ## Rounds
//!
//! A round has two phases: **Placement** (both sides place cards, in the
//! order given by the `first` flag) and then **Assault**
//! ([`Director::turn_attack`]). The `first` flag also decides which side
//! counts as attacking for legality purposes, and flips once per round -
//! the driving loop calls [`Director::flip_first`] after the assault.

pub mod assault;
pub mod config;

pub use assault::{apply_assault_abilities, Combatant};
pub use config::{DeckList, MatchConfig, MatchConfigBuilder};

use std::fmt::Write as _;

use crate::board::{Board, ASSAULT_SLOTS};
use crate::cards::{CardDefinition, CardHandle, CardInstance, PlayCondition, SpecialAbility};
use crate::core::{GameRng, PlayError, Side};

/// Orchestrates a match: legality, abilities, combat, turn order.
#[derive(Clone, Debug)]
pub struct Director {
    config: MatchConfig,
    board: Board,
    rng: GameRng,
    first: bool,
}

impl Director {
    /// Create a director over `config` with a seeded RNG.
    ///
    /// The board starts empty; call [`Director::start_game`] to build
    /// decks and deal opening hands.
    #[must_use]
    pub fn new(config: MatchConfig, seed: u64) -> Self {
        let starting_health = config.starting_health;
        Self {
            config,
            board: Board::new(starting_health),
            rng: GameRng::new(seed),
            first: true,
        }
    }

    /// (Re)start the match: clear the board, rebuild both decks from the
    /// configured deck lists, shuffle, reset health pools and the first
    /// flag, and deal both opening hands up to the hand limit.
    pub fn start_game(&mut self) {
        self.board.reset_match(self.config.starting_health);
        self.first = true;

        for side in Side::all() {
            let composition: Vec<CardDefinition> = self.config.decks[side]
                .iter()
                .flat_map(|&(id, count)| {
                    let def = self.config.catalog.get_unchecked(id).clone();
                    std::iter::repeat(def).take(count as usize)
                })
                .collect();
            for def in &composition {
                self.board.spawn_into_deck(side, def);
            }
            self.board.shuffle_deck(side, &mut self.rng);
        }

        let limit = self.config.hand_limit;
        self.draw_cards(Side::Player, limit);
        self.draw_cards(Side::Enemy, limit);
    }

    /// Whether `side` is attacking this round.
    ///
    /// The side that places first attacks; the other defends.
    #[must_use]
    pub fn is_attacking(&self, side: Side) -> bool {
        match side {
            Side::Player => self.first,
            Side::Enemy => !self.first,
        }
    }

    /// Play a card from `side`'s hand into an assault slot.
    ///
    /// Checks, in order: hand index, slot range, then the legality rules
    /// for this round's role. Attacking: `DefenseOnly` cards are
    /// rejected. Defending: `AttackOnly` cards are rejected, there must
    /// be an opposing card in the same slot to block, and a `Surprise`
    /// attacker can only be blocked by a `DefenseOnly` card. A rejected
    /// play mutates nothing.
    ///
    /// On success, on-play abilities resolve: `Inspire`/`Rally` grant +1
    /// attack to every placed card on the acting side (the new card
    /// included), and `Reinforce` spawns the configured reinforcement
    /// cards directly into the acting side's hand.
    pub fn play_card(
        &mut self,
        side: Side,
        hand_index: usize,
        slot: usize,
    ) -> Result<(), PlayError> {
        let hand = self.board.hand(side);
        let handle = *hand
            .get(hand_index)
            .ok_or(PlayError::HandIndexOutOfRange {
                index: hand_index,
                hand_size: hand.len(),
            })?;
        if slot >= ASSAULT_SLOTS {
            return Err(PlayError::SlotOutOfRange { slot });
        }

        let def = self.definition_of(handle);
        let (condition, special) = (def.condition, def.special);

        if self.is_attacking(side) {
            if condition == PlayCondition::DefenseOnly {
                return Err(PlayError::DefenseOnlyOnAttack);
            }
        } else {
            if condition == PlayCondition::AttackOnly {
                return Err(PlayError::AttackOnlyOnDefense);
            }
            match self.board.slot(side.opponent(), slot) {
                None => return Err(PlayError::NoAttackerToBlock),
                Some(attacker) => {
                    let attacker_special = self.definition_of(attacker).special;
                    if attacker_special == SpecialAbility::Surprise
                        && condition != PlayCondition::DefenseOnly
                    {
                        return Err(PlayError::SurpriseBlocked);
                    }
                }
            }
        }

        self.board.place_card(side, hand_index, slot)?;

        match special {
            SpecialAbility::Inspire | SpecialAbility::Rally => {
                for i in 0..ASSAULT_SLOTS {
                    if let Some(h) = self.board.slot(side, i) {
                        if let Some(card) = self.board.card_mut(h) {
                            card.attack += 1;
                        }
                    }
                }
            }
            SpecialAbility::Reinforce => {
                let grants: Vec<CardDefinition> = self
                    .config
                    .reinforcements
                    .iter()
                    .map(|&id| self.config.catalog.get_unchecked(id).clone())
                    .collect();
                for def in &grants {
                    self.board.spawn_into_hand(side, def);
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Clear `side`'s slot, reset the card's stats to catalog base, and
    /// return it to the bottom of `side`'s deck.
    ///
    /// Cards are never destroyed; they recirculate.
    pub fn discard_card(&mut self, side: Side, slot: usize) -> Result<(), PlayError> {
        if slot >= ASSAULT_SLOTS {
            return Err(PlayError::SlotOutOfRange { slot });
        }
        let handle = self
            .board
            .take_from_slot(side, slot)
            .ok_or(PlayError::EmptySlot { slot })?;

        let def = self.definition_of(handle).clone();
        if let Some(card) = self.board.card_mut(handle) {
            card.reset_stats(&def);
        }
        self.board.return_to_deck_bottom(side, handle);
        Ok(())
    }

    /// Draw one card for `side`. Returns `false` on an empty deck.
    pub fn draw_one(&mut self, side: Side) -> bool {
        self.board.draw_one(side)
    }

    /// Draw until `side`'s hand holds `target` cards or the deck runs
    /// out. A partial draw is fine.
    pub fn draw_cards(&mut self, side: Side, target: usize) {
        while self.board.hand(side).len() < target && self.board.draw_one(side) {}
    }

    /// Uniformly reshuffle `side`'s deck.
    pub fn shuffle_deck(&mut self, side: Side) {
        self.board.shuffle_deck(side, &mut self.rng);
    }

    /// The last-placing side becomes first-placing next round.
    pub fn flip_first(&mut self) {
        self.first = !self.first;
    }

    // === Read accessors (for the presentation layer and AI driver) ===

    /// Which side places (and attacks) first this round.
    #[must_use]
    pub fn first(&self) -> bool {
        self.first
    }

    /// Health pool of `side`.
    #[must_use]
    pub fn health(&self, side: Side) -> i32 {
        self.board.health(side)
    }

    /// Cards left in `side`'s deck.
    #[must_use]
    pub fn deck_size(&self, side: Side) -> usize {
        self.board.deck_size(side)
    }

    /// `side`'s hand, in display order.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[CardHandle] {
        self.board.hand(side)
    }

    /// `side`'s hand resolved to instances, in display order.
    pub fn hand_cards(&self, side: Side) -> impl Iterator<Item = &CardInstance> {
        self.board
            .hand(side)
            .iter()
            .map(|&h| self.board.card_unchecked(h))
    }

    /// `side`'s assault row.
    #[must_use]
    pub fn slots(&self, side: Side) -> &[Option<CardHandle>; ASSAULT_SLOTS] {
        self.board.slots(side)
    }

    /// The card in `side`'s slot, resolved, if any.
    #[must_use]
    pub fn slot_card(&self, side: Side, slot: usize) -> Option<&CardInstance> {
        self.board.slot(side, slot).map(|h| self.board.card_unchecked(h))
    }

    /// Resolve a handle to its instance.
    #[must_use]
    pub fn card(&self, handle: CardHandle) -> Option<&CardInstance> {
        self.board.card(handle)
    }

    /// The catalog definition behind a live card.
    #[must_use]
    pub fn definition_of(&self, handle: CardHandle) -> &CardDefinition {
        let card = self.board.card_unchecked(handle);
        self.config.catalog.get_unchecked(card.card_id)
    }

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Render the whole board as text, both assault rows column-aligned.
    ///
    /// Diagnostic affordance only; the format is not stable.
    #[must_use]
    pub fn dump_board(&self) -> String {
        // Wide enough for "Defense: NN"; grows to the widest placed name.
        let mut width = 15;
        for side in Side::all() {
            for slot in self.board.slots(side).iter().flatten() {
                width = width.max(self.definition_of(*slot).name.len());
            }
        }
        width += 1;

        let mut out = String::new();
        let _ = writeln!(out, "Enemy Health: {}", self.health(Side::Enemy));
        let _ = writeln!(out, "Enemy Deck: {} Cards", self.deck_size(Side::Enemy));
        let _ = writeln!(out, "Enemy Hand:");
        for card in self.hand_cards(Side::Enemy) {
            let _ = writeln!(out, "{}", self.config.catalog.get_unchecked(card.card_id).name);
        }

        let _ = writeln!(out, "\nEnemy Cards");
        self.dump_row(&mut out, Side::Enemy, width);
        let _ = writeln!(out, "\nPlayer Cards:");
        self.dump_row(&mut out, Side::Player, width);

        let _ = writeln!(out, "Player Hand:");
        for card in self.hand_cards(Side::Player) {
            let _ = writeln!(out, "{}", self.config.catalog.get_unchecked(card.card_id).name);
        }
        let _ = writeln!(out, "\nPlayer Deck: {} Cards", self.deck_size(Side::Player));
        let _ = writeln!(out, "Player Health: {}", self.health(Side::Player));
        out
    }

    fn dump_row(&self, out: &mut String, side: Side, width: usize) {
        let cards: Vec<Option<&CardInstance>> =
            (0..ASSAULT_SLOTS).map(|i| self.slot_card(side, i)).collect();

        for card in &cards {
            let name = card.map_or("Empty", |c| {
                self.config.catalog.get_unchecked(c.card_id).name.as_str()
            });
            let _ = write!(out, "{name:<width$}");
        }
        let _ = writeln!(out);
        let stat_lines: [(&str, fn(&CardInstance) -> i32); 3] = [
            ("Attack", |c| c.attack),
            ("Defense", |c| c.defense),
            ("Health", |c| c.curr_health),
        ];
        for (label, stat) in stat_lines {
            for card in &cards {
                let cell = card.map_or_else(|| "~".to_owned(), |c| format!("{label}: {}", stat(c)));
                let _ = write!(out, "{cell:<width$}");
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(out);
    }
}
