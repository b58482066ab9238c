//! Match state: the card arena plus both sides' health, decks, hands and
//! assault rows.
//!
//! The `Board` owns every `CardInstance` in an arena keyed by
//! `CardHandle`; decks, hands and slots hold handles only, so a card
//! moves between containers as a handle move. The `Board` exposes only
//! primitive, rule-free mutations - legality checking, ability
//! resolution and combat all live in the `Director`, which owns the
//! `Board` by composition.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{CardDefinition, CardHandle, CardInstance};
use crate::core::{GameRng, PlayError, Side, SideMap};

/// Number of assault slots per side. Opposing slots at the same index
/// face each other in combat.
pub const ASSAULT_SLOTS: usize = 5;

/// Per-side match state.
#[derive(Clone, Debug, Default)]
struct SideState {
    /// Health pool. Clamped to 0 only after combat and overflow resolve.
    health: i32,
    /// Draw deck, front = next draw, back = bottom (discards land here).
    deck: VecDeque<CardHandle>,
    /// Hand. Order is insertion order, significant for display only.
    hand: SmallVec<[CardHandle; 8]>,
    /// Assault row. Each slot holds at most one card.
    slots: [Option<CardHandle>; ASSAULT_SLOTS],
}

/// The shared mutable match state.
#[derive(Clone, Debug)]
pub struct Board {
    cards: FxHashMap<CardHandle, CardInstance>,
    next_handle: u32,
    sides: SideMap<SideState>,
}

impl Board {
    /// Create an empty board with both health pools at `starting_health`.
    #[must_use]
    pub fn new(starting_health: i32) -> Self {
        Self {
            cards: FxHashMap::default(),
            next_handle: 0,
            sides: SideMap::new(|_| SideState {
                health: starting_health,
                ..SideState::default()
            }),
        }
    }

    /// Clear both assault rows to five empty slots each.
    pub fn reset_assault(&mut self) {
        for side in Side::all() {
            self.sides[side].slots = [None; ASSAULT_SLOTS];
        }
    }

    /// Drop every card (arena, decks, hands, slots) and reset both
    /// health pools. Used when a match (re)starts before the decks are
    /// rebuilt.
    pub fn reset_match(&mut self, starting_health: i32) {
        self.cards.clear();
        self.next_handle = 0;
        for side in Side::all() {
            let state = &mut self.sides[side];
            state.health = starting_health;
            state.deck.clear();
            state.hand.clear();
            state.slots = [None; ASSAULT_SLOTS];
        }
    }

    fn alloc(&mut self, def: &CardDefinition) -> CardHandle {
        let handle = CardHandle::new(self.next_handle);
        self.next_handle += 1;
        self.cards.insert(handle, CardInstance::from_definition(handle, def));
        handle
    }

    /// Create a fresh instance of `def` on the bottom of `side`'s deck.
    pub fn spawn_into_deck(&mut self, side: Side, def: &CardDefinition) -> CardHandle {
        let handle = self.alloc(def);
        self.sides[side].deck.push_back(handle);
        handle
    }

    /// Create a fresh instance of `def` directly in `side`'s hand.
    ///
    /// Used for reinforcement grants, which bypass the deck.
    pub fn spawn_into_hand(&mut self, side: Side, def: &CardDefinition) -> CardHandle {
        let handle = self.alloc(def);
        self.sides[side].hand.push(handle);
        handle
    }

    /// Move the front card of `side`'s deck to the back of its hand.
    ///
    /// Returns `false` if the deck is empty (tolerated, not an error).
    pub fn draw_one(&mut self, side: Side) -> bool {
        let state = &mut self.sides[side];
        match state.deck.pop_front() {
            Some(handle) => {
                state.hand.push(handle);
                true
            }
            None => false,
        }
    }

    /// Move a card from `side`'s hand into an empty assault slot.
    ///
    /// Purely positional: condition and turn-order legality are the
    /// Director's business.
    pub fn place_card(
        &mut self,
        side: Side,
        hand_index: usize,
        slot: usize,
    ) -> Result<(), PlayError> {
        let state = &mut self.sides[side];

        if slot >= ASSAULT_SLOTS {
            return Err(PlayError::SlotOutOfRange { slot });
        }
        if state.slots[slot].is_some() {
            return Err(PlayError::SlotOccupied { slot });
        }
        if hand_index >= state.hand.len() {
            return Err(PlayError::HandIndexOutOfRange {
                index: hand_index,
                hand_size: state.hand.len(),
            });
        }

        let handle = state.hand.remove(hand_index);
        state.slots[slot] = Some(handle);
        Ok(())
    }

    /// Remove and return the card in `side`'s slot, if any.
    pub fn take_from_slot(&mut self, side: Side, slot: usize) -> Option<CardHandle> {
        self.sides[side].slots.get_mut(slot)?.take()
    }

    /// Put a card on the bottom of `side`'s deck.
    pub fn return_to_deck_bottom(&mut self, side: Side, handle: CardHandle) {
        self.sides[side].deck.push_back(handle);
    }

    /// Uniformly permute `side`'s deck.
    pub fn shuffle_deck(&mut self, side: Side, rng: &mut GameRng) {
        rng.shuffle(self.sides[side].deck.make_contiguous());
    }

    // === Accessors ===

    /// Health pool of `side`.
    #[must_use]
    pub fn health(&self, side: Side) -> i32 {
        self.sides[side].health
    }

    /// Set the health pool of `side`.
    pub fn set_health(&mut self, side: Side, health: i32) {
        self.sides[side].health = health;
    }

    /// Number of cards left in `side`'s deck.
    #[must_use]
    pub fn deck_size(&self, side: Side) -> usize {
        self.sides[side].deck.len()
    }

    /// `side`'s hand, in insertion order.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[CardHandle] {
        &self.sides[side].hand
    }

    /// `side`'s assault row.
    #[must_use]
    pub fn slots(&self, side: Side) -> &[Option<CardHandle>; ASSAULT_SLOTS] {
        &self.sides[side].slots
    }

    /// The card in `side`'s slot, if the slot is in range and occupied.
    #[must_use]
    pub fn slot(&self, side: Side, slot: usize) -> Option<CardHandle> {
        self.sides[side].slots.get(slot).copied().flatten()
    }

    /// Resolve a handle to its instance.
    #[must_use]
    pub fn card(&self, handle: CardHandle) -> Option<&CardInstance> {
        self.cards.get(&handle)
    }

    /// Resolve a handle to its instance, panicking if absent.
    ///
    /// Every handle held by a deck, hand or slot resolves; a miss means
    /// a container/arena invariant was broken.
    #[must_use]
    pub fn card_unchecked(&self, handle: CardHandle) -> &CardInstance {
        self.cards.get(&handle).expect("Card not found in arena")
    }

    /// Resolve a handle to its instance, mutably.
    pub fn card_mut(&mut self, handle: CardHandle) -> Option<&mut CardInstance> {
        self.cards.get_mut(&handle)
    }
}
