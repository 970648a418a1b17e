//! Arc layout: mapping (index, count) to a target position.
//!
//! Items are spread horizontally around the panel origin and lifted along a
//! downward parabola, so the middle of the hand is highest:
//!
//! ```text
//! center   = (count - 1) / 2
//! spacing  = min(params.spacing, params.max_width / max(1, count - 1))
//! x        = (index - center) * spacing
//! n        = (index - center) / center        (0 when center == 0)
//! y        = curve_height - n² * curve_height (+ select_raise if selected)
//! ```
//!
//! Everything here is pure. Hands of zero items have no positions; callers
//! skip them.

use crate::core::{ItemId, LayoutParameters};

use super::position::{Placement, Position};

/// Gap between the sorting orders of neighbouring items.
pub const SORTING_STEP: i32 = 10;

/// Pure arc layout functions.
pub struct LayoutSolver;

impl LayoutSolver {
    /// Spacing actually used for a hand of `count` items.
    ///
    /// Shrinks below `params.spacing` once the hand would exceed
    /// `params.max_width`.
    #[must_use]
    pub fn effective_spacing(count: usize, params: &LayoutParameters) -> f32 {
        let gaps = count.saturating_sub(1).max(1) as f32;
        params.spacing.min(params.max_width / gaps)
    }

    /// Fractional index of the middle of a hand of `count` items.
    #[must_use]
    pub fn center_index(count: usize) -> f32 {
        (count as f32 - 1.0) / 2.0
    }

    /// Horizontal coordinate of slot `index` in a hand of `count` items.
    #[must_use]
    pub fn slot_x(index: usize, count: usize, params: &LayoutParameters) -> f32 {
        (index as f32 - Self::center_index(count)) * Self::effective_spacing(count, params)
    }

    /// Target position of the item at `index` in a hand of `count` items.
    ///
    /// ```
    /// use hand_layout::core::LayoutParameters;
    /// use hand_layout::layout::LayoutSolver;
    ///
    /// let params = LayoutParameters::default();
    ///
    /// // A single card sits at the apex.
    /// let only = LayoutSolver::position(0, 1, &params, false);
    /// assert_eq!(only.x, 0.0);
    /// assert_eq!(only.y, params.curve_height);
    ///
    /// // The ends of a hand sit on the baseline.
    /// let left = LayoutSolver::position(0, 5, &params, false);
    /// assert_eq!(left.x, -300.0);
    /// assert_eq!(left.y, 0.0);
    /// ```
    #[must_use]
    pub fn position(
        index: usize,
        count: usize,
        params: &LayoutParameters,
        is_selected: bool,
    ) -> Position {
        debug_assert!(index < count, "index {index} out of range for {count} items");

        let center = Self::center_index(count);
        let offset = index as f32 - center;
        let x = offset * Self::effective_spacing(count, params);

        let normalized = if center == 0.0 { 0.0 } else { offset / center };
        let mut y = -(normalized * normalized) * params.curve_height + params.curve_height;
        if is_selected {
            y += params.select_raise;
        }

        Position { x, y }
    }

    /// Draw order for the item at `index`.
    #[must_use]
    pub const fn sorting_order(index: usize) -> i32 {
        index as i32 * SORTING_STEP
    }

    /// Draw order for selected items: above every unselected item of a hand
    /// of `count` items.
    #[must_use]
    pub const fn selected_sorting_order(count: usize) -> i32 {
        count as i32 * SORTING_STEP
    }

    /// Placements for a whole hand laid out along the arc.
    ///
    /// `exclude` is the item currently being dragged: it keeps its index (so
    /// neighbours do not close the gap) but gets no placement, since the
    /// pointer owns its position.
    pub fn placements(
        items: &[ItemId],
        params: &LayoutParameters,
        is_selected: impl Fn(ItemId) -> bool,
        exclude: Option<ItemId>,
    ) -> Vec<Placement> {
        let count = items.len();
        items
            .iter()
            .enumerate()
            .filter(|&(_, &item)| Some(item) != exclude)
            .map(|(index, &item)| {
                let selected = is_selected(item);
                Placement {
                    item,
                    index,
                    position: Self::position(index, count, params, selected),
                    sorting_order: if selected {
                        Self::selected_sorting_order(count)
                    } else {
                        Self::sorting_order(index)
                    },
                    selected,
                }
            })
            .collect()
    }

    /// Placements for a stacked pile (source-only panels).
    ///
    /// Every item sits at the origin; only the draw order differs.
    pub fn pile_placements(items: &[ItemId], exclude: Option<ItemId>) -> Vec<Placement> {
        items
            .iter()
            .enumerate()
            .filter(|&(_, &item)| Some(item) != exclude)
            .map(|(index, &item)| Placement {
                item,
                index,
                position: Position::ORIGIN,
                sorting_order: Self::sorting_order(index),
                selected: false,
            })
            .collect()
    }
}
