//! Pointer interaction: hover, click, drag and drop.
//!
//! The input layer feeds discrete press/move/release samples; the
//! `InteractionController` decides whether they amount to a click, a
//! reorder, a transfer or a cancelled drag.
//!
//! ## Key Types
//!
//! - `InteractionState`: Idle, hovered, pressed or dragging
//! - `PointerSample`: Pointer position plus the panels under it
//! - `DropOutcome`: What a release did

pub mod controller;
pub mod state;

pub use controller::InteractionController;
pub use state::{CancelReason, DragSession, DropOutcome, InteractionState, PointerSample};
