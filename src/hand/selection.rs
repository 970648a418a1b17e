//! Bounded selection with FIFO eviction.
//!
//! Selecting into a full set evicts the *oldest-selected* item (insertion
//! order, not last use). The evicted item is reported back so the caller can
//! clear its visual state before the new item is shown as selected.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ItemId;

/// Items removed from a selection in one call.
pub type Deselected = SmallVec<[ItemId; 8]>;

/// What a `toggle` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionChange {
    /// `item` became selected; `evicted` was dropped first to make room.
    Selected {
        item: ItemId,
        evicted: Option<ItemId>,
    },
    /// `item` was selected and is now deselected.
    Deselected { item: ItemId },
}

/// Ordered set of selected items, oldest first.
///
/// ```
/// use hand_layout::core::ItemId;
/// use hand_layout::hand::{SelectionChange, SelectionSet};
///
/// let mut selection = SelectionSet::new(2);
/// selection.toggle(ItemId(1));
/// selection.toggle(ItemId(2));
///
/// let change = selection.toggle(ItemId(3));
/// assert_eq!(
///     change,
///     SelectionChange::Selected { item: ItemId(3), evicted: Some(ItemId(1)) }
/// );
/// assert_eq!(selection.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    items: SmallVec<[ItemId; 8]>,
    max_selected: usize,
}

impl SelectionSet {
    /// Create an empty selection holding at most `max_selected` items.
    ///
    /// Panics if `max_selected` is zero; validate configuration first.
    #[must_use]
    pub fn new(max_selected: usize) -> Self {
        assert!(max_selected > 0, "max_selected must be at least 1");
        Self {
            items: SmallVec::new(),
            max_selected,
        }
    }

    /// Selection limit.
    #[must_use]
    pub fn max_selected(&self) -> usize {
        self.max_selected
    }

    /// Number of selected items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the next select would evict.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_selected
    }

    /// Whether `item` is selected.
    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// The item that would be evicted next.
    #[must_use]
    pub fn oldest(&self) -> Option<ItemId> {
        self.items.first().copied()
    }

    /// Selected items, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }

    /// Select `item` if unselected, deselect it otherwise.
    pub fn toggle(&mut self, item: ItemId) -> SelectionChange {
        if self.deselect(item) {
            return SelectionChange::Deselected { item };
        }

        let evicted = if self.is_full() {
            Some(self.items.remove(0))
        } else {
            None
        };
        self.items.push(item);

        SelectionChange::Selected { item, evicted }
    }

    /// Deselect `item`. Returns whether it was selected.
    pub fn deselect(&mut self, item: ItemId) -> bool {
        match self.items.iter().position(|&i| i == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Deselect everything, returning what was selected (oldest first).
    pub fn deselect_all(&mut self) -> Deselected {
        std::mem::take(&mut self.items)
    }

    /// Deselect everything but `keep`, returning what was removed.
    pub fn deselect_all_except(&mut self, keep: ItemId) -> Deselected {
        let removed: Deselected = self.items.iter().copied().filter(|&i| i != keep).collect();
        self.items.retain(|i| *i == keep);
        removed
    }
}
