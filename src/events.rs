//! Notifications for the renderer.
//!
//! The engine never animates. Every authoritative change is recorded as a
//! `LayoutEvent` in order; the renderer drains them once per frame and
//! starts whatever animation it likes. Target positions are then read from
//! `HandTable::placements`.

use serde::{Deserialize, Serialize};

use crate::core::{ItemId, PanelId};

/// Why an item stopped being selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeselectReason {
    /// The player clicked it again.
    Toggled,
    /// A newer selection pushed it out of a full set.
    Evicted,
    /// `deselect_all` / `deselect_all_except`.
    Cleared,
    /// It left the panel (transfer, removal or destruction).
    Removed,
}

/// A change the renderer may want to react to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// An item entered a panel programmatically.
    Inserted { panel: PanelId, item: ItemId, index: usize },

    /// An item left the engine entirely.
    Removed { panel: PanelId, item: ItemId, index: usize },

    Selected { panel: PanelId, item: ItemId },

    Deselected {
        panel: PanelId,
        item: ItemId,
        reason: DeselectReason,
    },

    /// One item moved within its panel.
    Reordered {
        panel: PanelId,
        item: ItemId,
        from: usize,
        to: usize,
    },

    /// Several items moved at once (rotate, swap, shuffle).
    Rearranged { panel: PanelId },

    /// An item moved from one panel to another.
    Transferred {
        item: ItemId,
        from: PanelId,
        to: PanelId,
        index: usize,
    },

    /// A panel that notifies on drop received an item.
    Dropped { panel: PanelId, item: ItemId },

    HoverChanged { item: ItemId, hovered: bool },

    DragStarted { panel: PanelId, item: ItemId },

    /// A drag ended without a change; the item snaps back.
    DragCancelled { panel: PanelId, item: ItemId },
}

impl LayoutEvent {
    /// The item this event is about, if it is about a single item.
    #[must_use]
    pub fn item(&self) -> Option<ItemId> {
        match self {
            Self::Inserted { item, .. }
            | Self::Removed { item, .. }
            | Self::Selected { item, .. }
            | Self::Deselected { item, .. }
            | Self::Reordered { item, .. }
            | Self::Transferred { item, .. }
            | Self::Dropped { item, .. }
            | Self::HoverChanged { item, .. }
            | Self::DragStarted { item, .. }
            | Self::DragCancelled { item, .. } => Some(*item),
            Self::Rearranged { .. } => None,
        }
    }
}
