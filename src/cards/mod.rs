//! Card system: definitions, in-play instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardKind`: Spirit (with combat stats) or Spell
//! - `ActivationCost`: Pure cost function over copy counts
//! - `CardDefinition`: Static card data
//! - `SpiritInstance`: Runtime spirit state (damage tokens, attack flags)
//! - `CardCatalog`: Card definition lookup
//!
//! ## Catalog-only identity
//!
//! A card outside the spirit slots is just its `CardId`. Per-instance
//! state appears at summoning and is destroyed with the instance.

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{ActivationCost, CardDefinition, CardId, CardKind, SpiritStats};
pub use instance::SpiritInstance;
