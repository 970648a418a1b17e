//! Arc layout of a hand.
//!
//! ## Key Types
//!
//! - `LayoutSolver`: Pure (index, count, parameters) -> position mapping
//! - `Position`: A target point in panel-local space
//! - `Placement`: Position plus draw order for one item

pub mod position;
pub mod solver;

pub use position::{Placement, Position};
pub use solver::{LayoutSolver, SORTING_STEP};
