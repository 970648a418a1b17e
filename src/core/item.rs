//! Item identification.
//!
//! Every card laid out by the engine is an opaque `ItemId`. The engine never
//! looks inside an item: names, costs and artwork live in an external data
//! layer (see `cards::CardCatalog`) keyed by the same id.
//!
//! ## Usage
//!
//! ```
//! use hand_layout::core::{ItemAllocator, ItemId};
//!
//! let mut alloc = ItemAllocator::new();
//! let first = alloc.next();
//! let second = alloc.next();
//!
//! assert_eq!(first, ItemId(0));
//! assert_ne!(first, second);
//! ```

use serde::{Deserialize, Serialize};

/// Identity handle for one card/entity in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// Monotonic allocator for fresh item ids.
///
/// Ids are never reused, so a stale event carrying a destroyed item's id can
/// never alias a newer item.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ItemAllocator {
    next_id: u32,
}

impl ItemAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose first id is `first`.
    #[must_use]
    pub fn starting_at(first: u32) -> Self {
        Self { next_id: first }
    }

    /// Allocate the next id.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// The id the next call to `next` will return.
    #[must_use]
    pub fn peek(&self) -> ItemId {
        ItemId(self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_is_monotonic() {
        let mut alloc = ItemAllocator::new();
        let ids: Vec<_> = (0..5).map(|_| alloc.next()).collect();

        assert_eq!(ids, vec![ItemId(0), ItemId(1), ItemId(2), ItemId(3), ItemId(4)]);
        assert_eq!(alloc.peek(), ItemId(5));
    }

    #[test]
    fn test_allocator_starting_at() {
        let mut alloc = ItemAllocator::starting_at(100);
        assert_eq!(alloc.next(), ItemId(100));
        assert_eq!(alloc.next(), ItemId(101));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ItemId(42)), "Item(42)");
    }

    #[test]
    fn test_serialization() {
        let id = ItemId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
