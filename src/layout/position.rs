//! 2D target positions and per-item placements.

use serde::{Deserialize, Serialize};

use crate::core::ItemId;

/// A point in a panel's local space.
///
/// Positions are always derived from (index, count, parameters); the engine
/// never stores one as authoritative state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// The panel origin.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    /// Create a new position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation toward `target`; `t` is clamped to [0, 1].
    ///
    /// Renderers call this once per frame with their own notion of elapsed
    /// time. The engine itself never interpolates.
    ///
    /// ```
    /// use hand_layout::layout::Position;
    ///
    /// let from = Position::new(0.0, 0.0);
    /// let to = Position::new(10.0, -4.0);
    /// assert_eq!(from.lerp(to, 0.5), Position::new(5.0, -2.0));
    /// assert_eq!(from.lerp(to, 3.0), to);
    /// ```
    #[must_use]
    pub fn lerp(self, target: Position, t: f32) -> Position {
        let t = t.clamp(0.0, 1.0);
        Position {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }

    /// Euclidean distance to another position.
    #[must_use]
    pub fn distance(self, other: Position) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Where the renderer should draw one item this frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// The item being placed.
    pub item: ItemId,

    /// Layout index within its hand.
    pub index: usize,

    /// Target position (already raised if selected).
    pub position: Position,

    /// Draw order; higher draws on top.
    pub sorting_order: i32,

    /// Whether the item is currently selected.
    pub selected: bool,
}
