//! Interaction states and pointer input.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ItemId, PanelId};
use crate::drag::ReorderOutcome;
use crate::hand::SelectionChange;
use crate::layout::Position;

/// One pointer sample from the input layer.
///
/// `position` is in the local space of the item's own panel (its hand
/// center is the origin). `over` lists the panels under the pointer,
/// topmost first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub position: Position,
    pub over: SmallVec<[PanelId; 4]>,
}

impl PointerSample {
    /// A sample at `(x, y)` over no panel.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Position::new(x, y),
            over: SmallVec::new(),
        }
    }

    /// Add a panel under the pointer, below any added before.
    #[must_use]
    pub fn over(mut self, panel: PanelId) -> Self {
        self.over.push(panel);
        self
    }
}

/// An item being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub item: ItemId,
    pub origin_panel: PanelId,
    /// Index the item snaps back to if the drag is cancelled.
    pub origin_index: usize,
    pub press: Position,
    pub pointer: Position,
}

/// What the pointer is doing.
///
/// `Idle -> Hovered -> Pressed -> Dragging -> Idle`. A press released before
/// the drag threshold is a click. Only one item is ever active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered { item: ItemId },
    Pressed {
        item: ItemId,
        panel: PanelId,
        press: Position,
    },
    Dragging(DragSession),
}

impl InteractionState {
    /// The item this state is about.
    #[must_use]
    pub fn item(&self) -> Option<ItemId> {
        match self {
            Self::Idle => None,
            Self::Hovered { item } | Self::Pressed { item, .. } => Some(*item),
            Self::Dragging(session) => Some(session.item),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Why a drag ended without a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancelReason {
    /// Released over no panel.
    NoTarget,
    /// No panel under the pointer accepts the item.
    Rejected,
    /// The accepting panel is full.
    Full,
    /// The item left its panel during the drag.
    ItemGone,
    /// The host aborted the drag.
    Aborted,
}

/// Result of releasing the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DropOutcome {
    /// Released without dragging: selection toggled.
    Clicked(SelectionChange),
    /// Dropped back on its own panel.
    Reordered(ReorderOutcome),
    /// Dropped on another panel.
    Transferred {
        item: ItemId,
        from: PanelId,
        to: PanelId,
        index: usize,
    },
    /// Snapped back to its origin.
    Cancelled { item: ItemId, reason: CancelReason },
    /// The release did not concern the active item.
    Ignored,
}
