//! Ordered hand of items.
//!
//! `HandCollection` is the single source of truth for display order: an
//! item's index in the collection is its layout index, nothing else.
//! Order is stored in a persistent `im::Vector`, so snapshots for drag
//! previews and cancellation are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{HandRng, ItemId, PanelId};
use crate::error::{LayoutError, LayoutResult};

/// Where to insert an item into a hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertPosition {
    /// Append at the right end (the usual case for new and transferred items).
    #[default]
    Back,
    /// Insert at the left end.
    Front,
    /// Insert at a specific index, clamped to the hand length.
    Index(usize),
}

/// Ordered, duplicate-free sequence of items belonging to one panel.
///
/// ```
/// use hand_layout::core::{ItemId, PanelId};
/// use hand_layout::hand::{HandCollection, InsertPosition};
///
/// let mut hand = HandCollection::new(PanelId::new(0), Some(3));
/// hand.insert(ItemId(1), InsertPosition::Back).unwrap();
/// hand.insert(ItemId(2), InsertPosition::Front).unwrap();
/// hand.insert(ItemId(3), InsertPosition::Index(1)).unwrap();
///
/// assert_eq!(hand.to_vec(), vec![ItemId(2), ItemId(3), ItemId(1)]);
/// assert!(hand.is_full());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandCollection {
    panel: PanelId,
    items: Vector<ItemId>,
    max_slots: Option<usize>,
}

impl HandCollection {
    /// Create an empty hand for `panel`.
    #[must_use]
    pub fn new(panel: PanelId, max_slots: Option<usize>) -> Self {
        Self {
            panel,
            items: Vector::new(),
            max_slots,
        }
    }

    /// The panel this hand belongs to.
    #[must_use]
    pub fn panel(&self) -> PanelId {
        self.panel
    }

    /// Capacity limit, if any.
    #[must_use]
    pub fn max_slots(&self) -> Option<usize> {
        self.max_slots
    }

    /// Whether another item would exceed the capacity limit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.max_slots.is_some_and(|max| self.items.len() >= max)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `item` is in this hand.
    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Layout index of `item`.
    #[must_use]
    pub fn index_of(&self, item: ItemId) -> Option<usize> {
        self.items.index_of(&item)
    }

    /// Item at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ItemId> {
        self.items.get(index).copied()
    }

    /// Items in display order.
    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }

    /// Items in display order, copied out.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ItemId> {
        self.iter().collect()
    }

    /// Cheap copy of the current order.
    #[must_use]
    pub fn order(&self) -> Vector<ItemId> {
        self.items.clone()
    }

    /// Insert `item`, returning the index it landed at.
    ///
    /// Fails with `DuplicateItem` if it is already here, or
    /// `CapacityExceeded` if the hand is full.
    pub fn insert(&mut self, item: ItemId, position: InsertPosition) -> LayoutResult<usize> {
        if self.contains(item) {
            return Err(LayoutError::DuplicateItem {
                item,
                panel: self.panel,
            });
        }
        if let Some(capacity) = self.max_slots.filter(|_| self.is_full()) {
            return Err(LayoutError::CapacityExceeded {
                panel: self.panel,
                capacity,
            });
        }

        let index = match position {
            InsertPosition::Back => self.items.len(),
            InsertPosition::Front => 0,
            InsertPosition::Index(i) => i.min(self.items.len()),
        };
        self.items.insert(index, item);
        Ok(index)
    }

    /// Remove `item`, returning the index it was at.
    pub fn remove(&mut self, item: ItemId) -> LayoutResult<usize> {
        let index = self.index_of(item).ok_or(LayoutError::ItemNotFound {
            item,
            panel: self.panel,
        })?;
        self.items.remove(index);
        Ok(index)
    }

    /// Move `item` to `index` (clamped), returning `(from, to)`.
    ///
    /// Moving an item to the index it already has leaves the order untouched.
    pub fn move_to(&mut self, item: ItemId, index: usize) -> LayoutResult<(usize, usize)> {
        let from = self.remove(item)?;
        let to = index.min(self.items.len());
        self.items.insert(to, item);
        Ok((from, to))
    }

    /// Replace the whole order with a permutation of the current items.
    ///
    /// Returns `false` (and changes nothing) if `order` is not a permutation.
    pub fn reorder(&mut self, order: Vector<ItemId>) -> bool {
        if order.len() != self.items.len() || !order.iter().all(|i| self.items.contains(i)) {
            return false;
        }
        self.items = order;
        true
    }

    /// Move the first item to the end. Hands of fewer than two items are
    /// left alone and return `false`.
    pub fn rotate_left(&mut self) -> bool {
        if self.items.len() < 2 {
            return false;
        }
        match self.items.pop_front() {
            Some(first) => {
                self.items.push_back(first);
                true
            }
            None => false,
        }
    }

    /// Move the last item to the front.
    pub fn rotate_right(&mut self) -> bool {
        if self.items.len() < 2 {
            return false;
        }
        match self.items.pop_back() {
            Some(last) => {
                self.items.push_front(last);
                true
            }
            None => false,
        }
    }

    /// Swap the items at `i` and `j`.
    ///
    /// Out-of-range indices and `i == j` are no-ops returning `false`.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i == j || i >= self.items.len() || j >= self.items.len() {
            return false;
        }
        self.items.swap(i, j);
        true
    }

    /// Shuffle the hand order.
    pub fn shuffle(&mut self, rng: &mut HandRng) {
        self.items = rng.shuffle_items(&self.items);
    }

    /// Remove every item, returning them in display order.
    pub fn clear(&mut self) -> Vec<ItemId> {
        let items = self.to_vec();
        self.items.clear();
        items
    }
}
