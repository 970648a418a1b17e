//! Panels and drop routing.
//!
//! A panel is a hand with a drop policy. The `PanelRouter` is the explicit
//! registry of panels: it decides which panel a dropped item may join and
//! moves items between panels atomically.
//!
//! ## Key Types
//!
//! - `DropPolicy`: What a panel kind allows
//! - `Panel`: Config, hand and selection of one panel
//! - `PanelRouter`: Registry, membership index and transfers

pub mod hand_ops;
pub mod policy;
pub mod router;

pub use policy::DropPolicy;
pub use router::{AcceptFilter, Panel, PanelRouter};
