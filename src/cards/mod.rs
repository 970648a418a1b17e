//! Card payload as data.
//!
//! The engine lays out items; this module says what those items are. Cards
//! are tagged variants resolved by a single function, with no per-card
//! behavior types.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Name, cost, effect and use case of a card
//! - `CardEffect`: Damage, support or a batch of both
//! - `CardCatalog`: Definitions by id, and which item shows which card
//! - `resolve`: Turns a card and a target into an `EffectOutcome`

pub mod catalog;
pub mod definition;
pub mod resolve;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardEffect, CardId, UseCase};
pub use resolve::{resolve, EffectOutcome, EffectTarget};
