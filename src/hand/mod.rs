//! Hands and selections.
//!
//! ## Key Types
//!
//! - `HandCollection`: Ordered, duplicate-free items of one panel
//! - `InsertPosition`: Where new items go in a hand
//! - `SelectionSet`: Bounded selection with FIFO eviction
//! - `SelectionChange`: What a toggle did

pub mod collection;
pub mod selection;

pub use collection::{HandCollection, InsertPosition};
pub use selection::{Deselected, SelectionChange, SelectionSet};
