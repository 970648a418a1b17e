//! Drag reordering.
//!
//! `DragSimulator` answers "where would this item land?" without touching
//! the hand, and commits the answer when the drag ends.

pub mod simulator;

pub use simulator::{DragSimulator, ReorderOutcome};
