//! Drop policy per panel kind.
//!
//! | Kind | Accepts external drop | Notifies on drop | Laid out as | Pointer input |
//! |---|---|---|---|---|
//! | Draw, Combo | yes | yes | arc | yes |
//! | Discard | no (programmatic only) | yes | arc | no |
//! | Pull | no (source only) | no | pile | yes |

use serde::{Deserialize, Serialize};

use crate::core::PanelKind;

/// Capabilities derived from a panel's kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropPolicy {
    /// The player may drop items here.
    pub accepts_drop: bool,

    /// Receiving an item emits `LayoutEvent::Dropped`.
    pub notifies_on_drop: bool,

    /// Items are laid out along the arc (otherwise stacked).
    pub arranged: bool,

    /// Items here respond to hover and press. Discarded items are spent.
    pub interactive: bool,
}

impl DropPolicy {
    /// Policy for a panel kind.
    #[must_use]
    pub const fn for_kind(kind: PanelKind) -> Self {
        match kind {
            PanelKind::Draw | PanelKind::Combo => Self {
                accepts_drop: true,
                notifies_on_drop: true,
                arranged: true,
                interactive: true,
            },
            PanelKind::Discard => Self {
                accepts_drop: false,
                notifies_on_drop: true,
                arranged: true,
                interactive: false,
            },
            PanelKind::Pull => Self {
                accepts_drop: false,
                notifies_on_drop: false,
                arranged: false,
                interactive: true,
            },
        }
    }
}

impl From<PanelKind> for DropPolicy {
    fn from(kind: PanelKind) -> Self {
        Self::for_kind(kind)
    }
}
