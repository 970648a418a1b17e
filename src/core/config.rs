//! Table configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `LayoutParameters`: Arc shape and spacing for one hand
//! - `PanelConfig`: One panel (hand) with its kind and capacity limits
//! - `TableConfig`: All panels plus interaction tuning
//!
//! Configuration is validated once, up front. An invalid configuration is a
//! programmer error: `validate()` reports it and constructors refuse to build.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// Panel identifier. Hosts define what panels exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PanelId(pub u16);

impl PanelId {
    /// Create a new panel ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Panel({})", self.0)
    }
}

/// Policy tag of a panel.
///
/// The tag decides whether items may be dropped into the panel by the
/// player and whether the panel is laid out along the arc. See
/// `panels::DropPolicy` for the full table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelKind {
    /// The player's hand. Interactive.
    #[default]
    Draw,
    /// Cards staged for a combo. Interactive.
    Combo,
    /// Filled programmatically only.
    Discard,
    /// Source-only pile: items leave but never enter by dragging.
    Pull,
}

/// Arc layout parameters for one hand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutParameters {
    /// Preferred horizontal distance between neighbouring items.
    pub spacing: f32,

    /// Height of the arc apex above the outermost items.
    pub curve_height: f32,

    /// Maximum width of the whole hand; spacing shrinks to fit.
    pub max_width: f32,

    /// Extra lift applied to selected items.
    pub select_raise: f32,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            spacing: 150.0,
            curve_height: 100.0,
            max_width: 1000.0,
            select_raise: 40.0,
        }
    }
}

impl LayoutParameters {
    /// Set the preferred spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the arc height.
    #[must_use]
    pub fn with_curve_height(mut self, curve_height: f32) -> Self {
        self.curve_height = curve_height;
        self
    }

    /// Set the maximum hand width.
    #[must_use]
    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set the selection lift.
    #[must_use]
    pub fn with_select_raise(mut self, select_raise: f32) -> Self {
        self.select_raise = select_raise;
        self
    }

    /// Check the parameters describe a drawable arc.
    pub fn validate(&self) -> LayoutResult<()> {
        let fields = [
            ("spacing", self.spacing),
            ("curve_height", self.curve_height),
            ("max_width", self.max_width),
            ("select_raise", self.select_raise),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite")));
        }
        if self.spacing <= 0.0 {
            return Err(invalid(format!("spacing must be > 0, got {}", self.spacing)));
        }
        if self.max_width <= 0.0 {
            return Err(invalid(format!("max_width must be > 0, got {}", self.max_width)));
        }
        if self.curve_height < 0.0 {
            return Err(invalid(format!(
                "curve_height must be >= 0, got {}",
                self.curve_height
            )));
        }
        if self.select_raise < 0.0 {
            return Err(invalid(format!(
                "select_raise must be >= 0, got {}",
                self.select_raise
            )));
        }
        Ok(())
    }
}

/// Configuration for a single panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Unique identifier for this panel.
    pub id: PanelId,

    /// Human-readable name (for debugging/display).
    pub name: String,

    /// Drop policy tag.
    pub kind: PanelKind,

    /// Arc layout for this panel.
    #[serde(default)]
    pub layout: LayoutParameters,

    /// Maximum items held. `None` for unlimited.
    #[serde(default)]
    pub max_slots: Option<usize>,

    /// Maximum items selected at once.
    #[serde(default = "default_max_selected")]
    pub max_selected: usize,
}

fn default_max_selected() -> usize {
    5
}

impl PanelConfig {
    /// Create a new panel configuration with default layout and limits.
    pub fn new(id: PanelId, name: impl Into<String>, kind: PanelKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            layout: LayoutParameters::default(),
            max_slots: None,
            max_selected: default_max_selected(),
        }
    }

    /// Set the layout parameters.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutParameters) -> Self {
        self.layout = layout;
        self
    }

    /// Set the capacity limit.
    #[must_use]
    pub fn with_max_slots(mut self, max: usize) -> Self {
        self.max_slots = Some(max);
        self
    }

    /// Set the selection limit.
    #[must_use]
    pub fn with_max_selected(mut self, max: usize) -> Self {
        self.max_selected = max;
        self
    }

    /// Check limits and layout.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.max_selected == 0 {
            return Err(invalid(format!("{}: max_selected must be > 0", self.id)));
        }
        if self.max_slots == Some(0) {
            return Err(invalid(format!("{}: max_slots must be > 0", self.id)));
        }
        self.layout
            .validate()
            .map_err(|e| invalid(format!("{}: {}", self.id, strip_prefix(&e))))
    }
}

/// Complete table configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Panel configurations.
    #[serde(default)]
    pub panels: Vec<PanelConfig>,

    /// Pointer travel below which a press/release counts as a click.
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f32,
}

/// Default click/drag threshold, in layout units.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 8.0;

fn default_drag_threshold() -> f32 {
    DEFAULT_DRAG_THRESHOLD
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            panels: Vec::new(),
            drag_threshold: default_drag_threshold(),
        }
    }
}

impl TableConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    ///
    /// Parsing does not validate; `HandTable::new` does.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a panel configuration.
    #[must_use]
    pub fn with_panel(mut self, panel: PanelConfig) -> Self {
        self.panels.push(panel);
        self
    }

    /// Set the click/drag threshold.
    #[must_use]
    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    /// Get a panel config by ID.
    #[must_use]
    pub fn get_panel(&self, id: PanelId) -> Option<&PanelConfig> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Validate every panel, panel id uniqueness and the drag threshold.
    pub fn validate(&self) -> LayoutResult<()> {
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0.0 {
            return Err(invalid(format!(
                "drag_threshold must be finite and >= 0, got {}",
                self.drag_threshold
            )));
        }
        for (i, panel) in self.panels.iter().enumerate() {
            panel.validate()?;
            if self.panels[..i].iter().any(|p| p.id == panel.id) {
                return Err(invalid(format!("duplicate panel id {}", panel.id)));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> LayoutError {
    LayoutError::InvalidConfiguration(message)
}

fn strip_prefix(err: &LayoutError) -> String {
    match err {
        LayoutError::InvalidConfiguration(msg) => msg.clone(),
        other => other.to_string(),
    }
}
