//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Static card data (stats, ability, play condition)
//! - `CardCatalog`: Card definition lookup
//! - `CardHandle`: Arena handle for a live card instance
//! - `CardInstance`: Runtime card state (current health/attack/defense)

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId, PlayCondition, SpecialAbility};
pub use instance::{CardHandle, CardInstance};
