//! Nearest-slot insertion for drag reordering.
//!
//! While an item is dragged, the hand is conceptually one item shorter. The
//! dragged item can land in any of the `len` slots that the full hand would
//! have; the slot whose x coordinate is closest to the pointer wins. Ties go
//! to the lowest index (ascending scan, strict `<`).
//!
//! Slots use the same clamped spacing as `LayoutSolver` for the full hand,
//! so a dropped item lands exactly where its slot is drawn.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ItemId, LayoutParameters};
use crate::error::{LayoutError, LayoutResult};
use crate::hand::HandCollection;
use crate::layout::LayoutSolver;

/// Result of a committed reorder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderOutcome {
    pub item: ItemId,
    pub from: usize,
    pub to: usize,
}

impl ReorderOutcome {
    /// Whether the item ended where it started.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Drag preview and commit.
pub struct DragSimulator;

impl DragSimulator {
    /// Index of the slot nearest `candidate_x` among the `slot_count` slots of
    /// a hand with `slot_count` items.
    ///
    /// ```
    /// use hand_layout::core::LayoutParameters;
    /// use hand_layout::drag::DragSimulator;
    ///
    /// let params = LayoutParameters::default();
    /// // Five slots at -300, -150, 0, 150, 300.
    /// assert_eq!(DragSimulator::nearest_slot(5, -160.0, &params), 1);
    /// // Exactly between two slots: the lower index wins.
    /// assert_eq!(DragSimulator::nearest_slot(5, 75.0, &params), 2);
    /// // Far off either end clamps.
    /// assert_eq!(DragSimulator::nearest_slot(5, 9_000.0, &params), 4);
    /// ```
    #[must_use]
    pub fn nearest_slot(slot_count: usize, candidate_x: f32, params: &LayoutParameters) -> usize {
        if slot_count == 0 {
            return 0;
        }

        let mut best = 0;
        let mut closest = f32::MAX;
        for i in 0..slot_count {
            let dist = (candidate_x - LayoutSolver::slot_x(i, slot_count, params)).abs();
            if dist < closest {
                closest = dist;
                best = i;
            }
        }
        best.min(slot_count - 1)
    }

    /// Where `item` would land if dropped at `candidate_x`.
    ///
    /// Never mutates `collection`; safe to call on every pointer move.
    pub fn preview_insert_index(
        collection: &HandCollection,
        item: ItemId,
        candidate_x: f32,
        params: &LayoutParameters,
    ) -> LayoutResult<usize> {
        if !collection.contains(item) {
            return Err(LayoutError::ItemNotFound {
                item,
                panel: collection.panel(),
            });
        }
        Ok(Self::nearest_slot(collection.len(), candidate_x, params))
    }

    /// The order the hand would have if `item` were dropped at `candidate_x`.
    pub fn preview_order(
        collection: &HandCollection,
        item: ItemId,
        candidate_x: f32,
        params: &LayoutParameters,
    ) -> LayoutResult<Vector<ItemId>> {
        let index = Self::preview_insert_index(collection, item, candidate_x, params)?;

        let mut order = collection.order();
        if let Some(current) = order.index_of(&item) {
            order.remove(current);
        }
        order.insert(index, item);
        Ok(order)
    }

    /// Move `item` to the slot nearest `final_x`.
    ///
    /// Committing an item at its own slot leaves the order unchanged.
    pub fn commit_reorder(
        collection: &mut HandCollection,
        item: ItemId,
        final_x: f32,
        params: &LayoutParameters,
    ) -> LayoutResult<ReorderOutcome> {
        let to = Self::preview_insert_index(collection, item, final_x, params)?;
        let (from, to) = collection.move_to(item, to)?;
        Ok(ReorderOutcome { item, from, to })
    }
}
