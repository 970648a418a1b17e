//! The table: every panel plus the pointer, behind one facade.
//!
//! `HandTable` is what a host holds. It owns the `PanelRouter` and the
//! `InteractionController`, forwards input to them, and answers the
//! renderer's per-frame question: where should each item be?

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{HandRng, ItemId, PanelConfig, PanelId, PanelKind, TableConfig};
use crate::drag::{DragSimulator, ReorderOutcome};
use crate::error::LayoutResult;
use crate::events::LayoutEvent;
use crate::hand::{Deselected, InsertPosition, SelectionChange};
use crate::interaction::{DropOutcome, InteractionController, InteractionState, PointerSample};
use crate::layout::{LayoutSolver, Placement};
use crate::panels::{Panel, PanelRouter};

/// Panels, items and pointer state for one table.
///
/// ## Example
///
/// ```
/// use hand_layout::core::{ItemId, PanelConfig, PanelId, PanelKind, TableConfig};
/// use hand_layout::hand::InsertPosition;
/// use hand_layout::table::HandTable;
///
/// let hand = PanelId::new(0);
/// let config = TableConfig::new().with_panel(PanelConfig::new(hand, "Hand", PanelKind::Draw));
/// let mut table = HandTable::new(config).unwrap();
///
/// for id in 0..3 {
///     table.insert(ItemId(id), hand, InsertPosition::Back).unwrap();
/// }
///
/// let placements = table.placements(hand).unwrap();
/// assert_eq!(placements[1].position.x, 0.0);
/// assert_eq!(placements[1].position.y, 100.0);
/// ```
#[derive(Debug)]
pub struct HandTable {
    router: PanelRouter,
    interaction: InteractionController,
}

impl HandTable {
    /// Build a table from a validated configuration.
    pub fn new(config: TableConfig) -> LayoutResult<Self> {
        config.validate()?;

        let mut router = PanelRouter::new();
        for panel in config.panels {
            router.register(panel)?;
        }
        info!(panels = router.panel_count(), "table ready");

        Ok(Self {
            router,
            interaction: InteractionController::new(config.drag_threshold),
        })
    }

    // === Panels ===

    pub fn register_panel(&mut self, config: PanelConfig) -> LayoutResult<()> {
        self.router.register(config)
    }

    /// Remove a panel and every item in it.
    pub fn unregister_panel(&mut self, panel: PanelId) -> LayoutResult<Vec<ItemId>> {
        let items = self.router.unregister(panel)?;
        for &item in &items {
            self.interaction.forget(&mut self.router, item);
        }
        Ok(items)
    }

    pub fn panel(&self, panel: PanelId) -> LayoutResult<&Panel> {
        self.router.panel(panel)
    }

    #[must_use]
    pub fn router(&self) -> &PanelRouter {
        &self.router
    }

    /// Panel holding `item`.
    #[must_use]
    pub fn location(&self, item: ItemId) -> Option<PanelId> {
        self.router.location(item)
    }

    /// Set a panel's acceptance filter.
    pub fn set_filter(
        &mut self,
        panel: PanelId,
        filter: impl Fn(ItemId) -> bool + 'static,
    ) -> LayoutResult<()> {
        self.router.set_filter(panel, filter)
    }

    // === Items ===

    pub fn insert(
        &mut self,
        item: ItemId,
        panel: PanelId,
        position: InsertPosition,
    ) -> LayoutResult<usize> {
        self.router.insert(item, panel, position)
    }

    /// The item was destroyed outside the engine. Cancels its drag, if any.
    pub fn destroy_item(&mut self, item: ItemId) -> Option<(PanelId, usize)> {
        self.interaction.forget(&mut self.router, item);
        self.router.remove(item)
    }

    // === Selection ===

    pub fn toggle_selection(&mut self, item: ItemId) -> LayoutResult<SelectionChange> {
        self.router.toggle_selection(item)
    }

    pub fn deselect(&mut self, item: ItemId) -> LayoutResult<bool> {
        self.router.deselect(item)
    }

    pub fn deselect_all(&mut self, panel: PanelId) -> LayoutResult<Deselected> {
        self.router.deselect_all(panel)
    }

    pub fn deselect_all_except(&mut self, keep: ItemId) -> LayoutResult<Deselected> {
        self.router.deselect_all_except(keep)
    }

    #[must_use]
    pub fn is_selected(&self, item: ItemId) -> bool {
        self.router.is_selected(item)
    }

    // === Ordering and transfer ===

    pub fn preview_insert_index(&self, item: ItemId, candidate_x: f32) -> LayoutResult<usize> {
        self.router.preview_insert_index(item, candidate_x)
    }

    pub fn commit_reorder(&mut self, item: ItemId, final_x: f32) -> LayoutResult<ReorderOutcome> {
        self.router.commit_reorder(item, final_x)
    }

    /// Host-driven moves end any press or drag on the moved items.
    pub fn transfer_card(&mut self, item: ItemId, from: PanelId, to: PanelId) -> LayoutResult<usize> {
        let index = self.router.transfer_card(item, from, to)?;
        if from != to {
            self.interaction.release(&mut self.router, item);
        }
        Ok(index)
    }

    pub fn drop_card(&mut self, item: ItemId, to: PanelId) -> LayoutResult<usize> {
        let from = self.router.location(item);
        let index = self.router.drop_card(item, to)?;
        if from != Some(to) {
            self.interaction.release(&mut self.router, item);
        }
        Ok(index)
    }

    /// Move everything from `from` into `to` while it fits.
    pub fn transfer_all(&mut self, from: PanelId, to: PanelId) -> LayoutResult<Vec<ItemId>> {
        let moved = self.router.transfer_all(from, to)?;
        self.release_all(&moved);
        Ok(moved)
    }

    /// Use the selected items of `from`: move them into `to` in selection
    /// order while it fits, then clear `from`'s selection.
    pub fn transfer_selected(&mut self, from: PanelId, to: PanelId) -> LayoutResult<Vec<ItemId>> {
        let moved = self.router.transfer_selected(from, to)?;
        self.release_all(&moved);
        Ok(moved)
    }

    fn release_all(&mut self, items: &[ItemId]) {
        for &item in items {
            self.interaction.release(&mut self.router, item);
        }
    }

    pub fn rotate_left(&mut self, panel: PanelId) -> LayoutResult<bool> {
        self.router.rotate_left(panel)
    }

    pub fn rotate_right(&mut self, panel: PanelId) -> LayoutResult<bool> {
        self.router.rotate_right(panel)
    }

    pub fn swap(&mut self, panel: PanelId, i: usize, j: usize) -> LayoutResult<bool> {
        self.router.swap(panel, i, j)
    }

    pub fn shuffle(&mut self, panel: PanelId, rng: &mut HandRng) -> LayoutResult<()> {
        self.router.shuffle(panel, rng)
    }

    // === Pointer ===

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        self.interaction.state()
    }

    pub fn on_hover_enter(&mut self, item: ItemId) -> bool {
        self.interaction.on_hover_enter(&mut self.router, item)
    }

    pub fn on_hover_exit(&mut self, item: ItemId) {
        self.interaction.on_hover_exit(&mut self.router, item);
    }

    pub fn on_press_start(&mut self, item: ItemId, pointer: &PointerSample) -> bool {
        self.interaction.on_press_start(&self.router, item, pointer)
    }

    /// Returns the preview index while dragging.
    pub fn on_press_move(&mut self, item: ItemId, pointer: &PointerSample) -> Option<usize> {
        self.interaction.on_press_move(&mut self.router, item, pointer)
    }

    pub fn on_press_end(&mut self, item: ItemId, pointer: &PointerSample) -> DropOutcome {
        self.interaction.on_press_end(&mut self.router, item, pointer)
    }

    pub fn cancel_drag(&mut self) -> Option<DropOutcome> {
        self.interaction.cancel(&mut self.router)
    }

    // === Rendering ===

    /// Target placement of every item in `panel`.
    ///
    /// An item being dragged out of this panel keeps its slot but has no
    /// placement: the pointer owns its position.
    pub fn placements(&self, panel: PanelId) -> LayoutResult<Vec<Placement>> {
        let holder = self.router.panel(panel)?;
        Ok(self.layout(holder, &holder.hand().to_vec()))
    }

    /// Placements as they would be if the dragged item were dropped where
    /// the pointer is now. Same as `placements` when nothing is dragged
    /// over this panel.
    pub fn preview_placements(&self, panel: PanelId) -> LayoutResult<Vec<Placement>> {
        let holder = self.router.panel(panel)?;
        let Some(session) = self.interaction.dragging().filter(|s| s.origin_panel == panel) else {
            return self.placements(panel);
        };
        if !holder.policy().arranged || !holder.hand().contains(session.item) {
            return self.placements(panel);
        }

        let order = DragSimulator::preview_order(
            holder.hand(),
            session.item,
            session.pointer.x,
            &holder.config().layout,
        )?;
        Ok(self.layout(holder, &order.iter().copied().collect::<Vec<_>>()))
    }

    fn layout(&self, holder: &Panel, items: &[ItemId]) -> Vec<Placement> {
        let dragged = self
            .interaction
            .dragging()
            .filter(|s| s.origin_panel == holder.id())
            .map(|s| s.item);

        if holder.policy().arranged {
            let selection = holder.selection();
            LayoutSolver::placements(
                items,
                &holder.config().layout,
                |item| selection.contains(item),
                dragged,
            )
        } else {
            LayoutSolver::pile_placements(items, dragged)
        }
    }

    /// Serializable copy of every panel's order and selection.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            panels: self
                .router
                .panels()
                .map(|panel| PanelSnapshot {
                    id: panel.id(),
                    name: panel.config().name.clone(),
                    kind: panel.kind(),
                    items: panel.hand().order(),
                    selected: panel.selection().iter().collect(),
                })
                .collect(),
        }
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<LayoutEvent> {
        self.router.drain_events()
    }
}

/// One panel in a `TableSnapshot`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub id: PanelId,
    pub name: String,
    pub kind: PanelKind,
    pub items: Vector<ItemId>,
    /// Selected items, oldest first.
    pub selected: Vec<ItemId>,
}

/// Point-in-time view of a table, in panel registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub panels: Vec<PanelSnapshot>,
}

impl TableSnapshot {
    #[must_use]
    pub fn panel(&self, id: PanelId) -> Option<&PanelSnapshot> {
        self.panels.iter().find(|panel| panel.id == id)
    }

    /// Total items across panels.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.panels.iter().map(|panel| panel.items.len()).sum()
    }
}
