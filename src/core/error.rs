//! Rejection taxonomy for player-facing operations.
//!
//! Every rejection leaves the match state untouched and is locally
//! recoverable: the caller retries with corrected input. Deck exhaustion
//! is not an error (draws stop silently), and a side's health reaching 0
//! is the designed end-of-match signal, not a failure.

use serde::{Deserialize, Serialize};

/// Why a play, placement or discard was rejected.
///
/// The first three variants are invalid input; the next four are
/// legality-rule violations tied to turn order and card conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayError {
    /// Slot index outside the five assault slots.
    SlotOutOfRange {
        /// The offending index.
        slot: usize,
    },
    /// The target slot already holds a card.
    SlotOccupied {
        /// The occupied slot.
        slot: usize,
    },
    /// Hand index beyond the hand's current size.
    HandIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Hand size at the time of the attempt.
        hand_size: usize,
    },
    /// An `AttackOnly` card cannot be played while defending.
    AttackOnlyOnDefense,
    /// A `DefenseOnly` card cannot be played while attacking.
    DefenseOnlyOnAttack,
    /// Defenders may only be placed opposite an attacking card.
    NoAttackerToBlock,
    /// A `Surprise` attacker cannot be blocked by a generic defender.
    SurpriseBlocked,
    /// The slot holds no card to discard.
    EmptySlot {
        /// The empty slot.
        slot: usize,
    },
}

impl std::fmt::Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::SlotOutOfRange { slot } => write!(f, "invalid slot {slot}"),
            PlayError::SlotOccupied { slot } => write!(f, "slot {slot} already occupied"),
            PlayError::HandIndexOutOfRange { index, hand_size } => {
                write!(f, "invalid hand index {index} (hand has {hand_size} cards)")
            }
            PlayError::AttackOnlyOnDefense => {
                write!(f, "cannot play an attack-only card on defense")
            }
            PlayError::DefenseOnlyOnAttack => {
                write!(f, "cannot play a defense-only card on attack")
            }
            PlayError::NoAttackerToBlock => write!(f, "no attacking card to block"),
            PlayError::SurpriseBlocked => {
                write!(f, "cannot block an attacker with the surprise ability")
            }
            PlayError::EmptySlot { slot } => write!(f, "no card in slot {slot}"),
        }
    }
}

impl std::error::Error for PlayError {}
