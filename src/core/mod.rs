//! Core engine types: items, panels, configuration, RNG.
//!
//! This module contains the identifiers and configuration every other
//! module builds on. Hosts configure panels via `TableConfig` rather than
//! modifying the engine.

pub mod item;
pub mod rng;
pub mod config;

pub use item::{ItemAllocator, ItemId};
pub use rng::{HandRng, HandRngState};
pub use config::{DEFAULT_DRAG_THRESHOLD, LayoutParameters, PanelConfig, PanelId, PanelKind, TableConfig};
