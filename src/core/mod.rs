//! Core engine types: sides, RNG, and the rejection taxonomy.

pub mod error;
pub mod rng;
pub mod side;

pub use error::PlayError;
pub use rng::{GameRng, GameRngState};
pub use side::{Side, SideMap};
