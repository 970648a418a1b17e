//! # hand-layout
//!
//! An ordered hand layout engine for card-style interfaces.
//!
//! ## Design Principles
//!
//! 1. **State, Not Animation**: The engine owns item order, selection and
//!    panel membership, and computes target positions. Renderers interpolate
//!    toward those targets on their own clock.
//!
//! 2. **One Owner Per Item**: Every item lives in exactly one panel. All
//!    membership changes go through the `PanelRouter`, atomically.
//!
//! 3. **Explicit Wiring**: Panels are registered with a router; there is no
//!    global list and no discovery at runtime.
//!
//! ## Architecture
//!
//! - **Arc Layout**: Items sit on a downward parabola, centered, with
//!   spacing clamped to the panel's width.
//!
//! - **Nearest-Slot Drag**: A dragged item lands in the slot closest to the
//!   pointer. The hand order does not change until release.
//!
//! - **Persistent Order**: Hands are `im::Vector`s, so snapshots and drag
//!   previews are cheap copies.
//!
//! ## Modules
//!
//! - `core`: Item and panel ids, configuration, RNG
//! - `layout`: Arc positions and sorting order
//! - `hand`: Ordered collections and bounded selection
//! - `drag`: Drag preview and reorder commit
//! - `panels`: Drop policies, registry and transfers
//! - `interaction`: Hover, click and drag state machine
//! - `table`: The facade a host holds
//! - `cards`: Card payload data and effect resolution
//! - `events`: Notifications for the renderer

pub mod core;
pub mod error;
pub mod layout;
pub mod hand;
pub mod drag;
pub mod panels;
pub mod events;
pub mod interaction;
pub mod table;
pub mod cards;

// Re-export commonly used types
pub use crate::core::{
    ItemAllocator, ItemId,
    HandRng, HandRngState,
    LayoutParameters, PanelConfig, PanelId, PanelKind, TableConfig,
};

pub use crate::error::{LayoutError, LayoutResult};

pub use crate::layout::{LayoutSolver, Placement, Position};

pub use crate::hand::{HandCollection, InsertPosition, SelectionChange, SelectionSet};

pub use crate::drag::{DragSimulator, ReorderOutcome};

pub use crate::panels::{DropPolicy, Panel, PanelRouter};

pub use crate::events::{DeselectReason, LayoutEvent};

pub use crate::interaction::{
    CancelReason, DropOutcome, InteractionController, InteractionState, PointerSample,
};

pub use crate::table::{HandTable, PanelSnapshot, TableSnapshot};

pub use crate::cards::{
    resolve, CardCatalog, CardDefinition, CardEffect, CardId, EffectOutcome, EffectTarget, UseCase,
};
