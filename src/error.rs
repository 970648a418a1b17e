//! Error taxonomy for the layout engine.
//!
//! None of these errors reach an end user directly. `ItemNotFound`,
//! `UntrackedItem`, `PanelNotFound`, `CapacityExceeded` and `DropRejected`
//! are recovered locally: the operation becomes a no-op, a warning is
//! logged, and the item snaps back to where it was. `InvalidConfiguration`
//! is a programmer error and only comes out of configuration validation.

use thiserror::Error;

use crate::cards::UseCase;
use crate::core::{ItemId, PanelId, PanelKind};

/// Errors produced by the layout engine.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LayoutError {
    #[error("{item} not found in {panel}")]
    ItemNotFound { item: ItemId, panel: PanelId },

    #[error("{0} is not in any panel")]
    UntrackedItem(ItemId),

    #[error("{0} is not registered")]
    PanelNotFound(PanelId),

    #[error("{item} already belongs to {panel}")]
    DuplicateItem { item: ItemId, panel: PanelId },

    #[error("{panel} is full ({capacity} slots)")]
    CapacityExceeded { panel: PanelId, capacity: usize },

    #[error("{panel} ({kind:?}) does not accept dropped items")]
    DropRejected { panel: PanelId, kind: PanelKind },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("{effect} cannot be used with use case {use_case:?}")]
    InvalidTarget { effect: String, use_case: UseCase },

    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LayoutError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}

/// Result alias used throughout the crate.
pub type LayoutResult<T> = Result<T, LayoutError>;
