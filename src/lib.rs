//! # laststand
//!
//! Rules engine for Rohan's Last Stand, a two-sided, turn-based card
//! battler: deck construction, hand management, card placement with
//! attack/defense slotting, conditional-play legality, special-ability
//! resolution, and the combined-damage assault phase.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no rendering, input or asset concerns. A
//!    presentation layer drives the engine through `Director`'s commands
//!    and reads state back through its accessors.
//!
//! 2. **One mutator**: all state mutation funnels through `Director`;
//!    the `Board` exposes only primitive, rule-free moves and is owned
//!    by composition.
//!
//! 3. **Configuration over statics**: card stats, deck compositions,
//!    reinforcement grants and hate bonuses arrive as an immutable
//!    `MatchConfig`; the `scenario` module holds the stock tables.
//!
//! 4. **Handles, not pointers**: live cards sit in an arena keyed by
//!    `CardHandle`; decks, hands and slots move handles, so a card is in
//!    exactly one container at any time.
//!
//! 5. **Deterministic**: a match (shuffles and AI rolls included)
//!    replays exactly from its seeds.
//!
//! ## Modules
//!
//! - `cards`: definitions, the catalog, and live instances
//! - `core`: sides, RNG, the rejection taxonomy
//! - `board`: arena + per-side health/deck/hand/slots primitives
//! - `director`: legality, abilities, assault resolution, match config
//! - `policy`: the AI opponent's decision logic
//! - `scenario`: the stock Rohan's Last Stand data tables
//!
//! ## Example
//!
//! ```
//! use laststand::core::Side;
//! use laststand::director::Director;
//! use laststand::policy::OpponentPolicy;
//! use laststand::scenario::last_stand_config;
//!
//! let mut director = Director::new(last_stand_config(), 42);
//! let mut opponent = OpponentPolicy::new(Side::Enemy, 7);
//! director.start_game();
//!
//! // One round: enemy defends (player is first), then the assault
//! // resolves and turn order flips.
//! opponent.take_turn(&mut director);
//! let still_running = director.turn_attack();
//! director.flip_first();
//! assert!(still_running);
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod director;
pub mod policy;
pub mod scenario;

// Re-export commonly used types
pub use crate::board::{Board, ASSAULT_SLOTS};
pub use crate::cards::{
    CardCatalog, CardDefinition, CardHandle, CardId, CardInstance, PlayCondition, SpecialAbility,
};
pub use crate::core::{GameRng, GameRngState, PlayError, Side, SideMap};
pub use crate::director::{
    apply_assault_abilities, Combatant, DeckList, Director, MatchConfig, MatchConfigBuilder,
};
pub use crate::policy::OpponentPolicy;
