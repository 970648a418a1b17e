//! Selection and ordering operations on registered panels.
//!
//! Each operation finds the panel holding the item, applies the change to
//! that panel's hand or selection and records the matching events.

use tracing::debug;

use crate::core::{HandRng, ItemId, PanelId};
use crate::drag::{DragSimulator, ReorderOutcome};
use crate::error::LayoutResult;
use crate::events::{DeselectReason, LayoutEvent};
use crate::hand::{Deselected, SelectionChange};

use super::router::PanelRouter;

impl PanelRouter {
    // === Selection ===

    /// Whether `item` is selected in its panel.
    #[must_use]
    pub fn is_selected(&self, item: ItemId) -> bool {
        self.location(item)
            .and_then(|panel| self.panel(panel).ok())
            .is_some_and(|panel| panel.selection().contains(item))
    }

    /// Select or deselect `item` in its panel.
    ///
    /// Selecting into a full selection evicts the oldest selected item; its
    /// `Deselected` event is recorded before the new `Selected` event.
    pub fn toggle_selection(&mut self, item: ItemId) -> LayoutResult<SelectionChange> {
        let panel = self.locate(item)?;
        let change = self.panel_mut(panel)?.selection.toggle(item);

        match change {
            SelectionChange::Selected { item, evicted } => {
                if let Some(evicted) = evicted {
                    debug!(%panel, %evicted, "selection evicted oldest");
                    self.emit(LayoutEvent::Deselected {
                        panel,
                        item: evicted,
                        reason: DeselectReason::Evicted,
                    });
                }
                debug!(%panel, %item, "selected");
                self.emit(LayoutEvent::Selected { panel, item });
            }
            SelectionChange::Deselected { item } => {
                debug!(%panel, %item, "deselected");
                self.emit(LayoutEvent::Deselected {
                    panel,
                    item,
                    reason: DeselectReason::Toggled,
                });
            }
        }
        Ok(change)
    }

    /// Deselect `item` if it is selected.
    pub fn deselect(&mut self, item: ItemId) -> LayoutResult<bool> {
        let panel = self.locate(item)?;
        let removed = self.panel_mut(panel)?.selection.deselect(item);
        if removed {
            self.emit(LayoutEvent::Deselected {
                panel,
                item,
                reason: DeselectReason::Toggled,
            });
        }
        Ok(removed)
    }

    /// Clear the selection of `panel`.
    pub fn deselect_all(&mut self, panel: PanelId) -> LayoutResult<Deselected> {
        let removed = self.panel_mut(panel)?.selection.deselect_all();
        self.emit_cleared(panel, &removed);
        Ok(removed)
    }

    /// Clear the selection of `keep`'s panel except `keep` itself.
    pub fn deselect_all_except(&mut self, keep: ItemId) -> LayoutResult<Deselected> {
        let panel = self.locate(keep)?;
        let removed = self.panel_mut(panel)?.selection.deselect_all_except(keep);
        self.emit_cleared(panel, &removed);
        Ok(removed)
    }

    fn emit_cleared(&mut self, panel: PanelId, removed: &[ItemId]) {
        for &item in removed {
            self.emit(LayoutEvent::Deselected {
                panel,
                item,
                reason: DeselectReason::Cleared,
            });
        }
        if !removed.is_empty() {
            debug!(%panel, count = removed.len(), "selection cleared");
        }
    }

    // === Ordering ===

    /// Where `item` would land in its panel if dropped at `candidate_x`.
    pub fn preview_insert_index(&self, item: ItemId, candidate_x: f32) -> LayoutResult<usize> {
        let panel = self.panel(self.locate(item)?)?;
        DragSimulator::preview_insert_index(panel.hand(), item, candidate_x, &panel.config().layout)
    }

    /// Move `item` to the slot of its panel nearest `final_x`.
    pub fn commit_reorder(&mut self, item: ItemId, final_x: f32) -> LayoutResult<ReorderOutcome> {
        let panel = self.locate(item)?;
        let holder = self.panel_mut(panel)?;
        let layout = holder.config().layout;
        let outcome = DragSimulator::commit_reorder(&mut holder.hand, item, final_x, &layout)?;

        if !outcome.is_noop() {
            debug!(%panel, %item, from = outcome.from, to = outcome.to, "reordered");
            self.emit(LayoutEvent::Reordered {
                panel,
                item,
                from: outcome.from,
                to: outcome.to,
            });
        }
        Ok(outcome)
    }

    /// Move the first item of `panel` to the end.
    pub fn rotate_left(&mut self, panel: PanelId) -> LayoutResult<bool> {
        let changed = self.panel_mut(panel)?.hand.rotate_left();
        self.emit_rearranged(panel, changed);
        Ok(changed)
    }

    /// Move the last item of `panel` to the front.
    pub fn rotate_right(&mut self, panel: PanelId) -> LayoutResult<bool> {
        let changed = self.panel_mut(panel)?.hand.rotate_right();
        self.emit_rearranged(panel, changed);
        Ok(changed)
    }

    /// Swap two positions of `panel`. Out-of-range indices are a no-op.
    pub fn swap(&mut self, panel: PanelId, i: usize, j: usize) -> LayoutResult<bool> {
        let changed = self.panel_mut(panel)?.hand.swap(i, j);
        self.emit_rearranged(panel, changed);
        Ok(changed)
    }

    /// Shuffle `panel`.
    pub fn shuffle(&mut self, panel: PanelId, rng: &mut HandRng) -> LayoutResult<()> {
        let holder = self.panel_mut(panel)?;
        let changed = holder.hand.len() > 1;
        holder.hand.shuffle(rng);
        self.emit_rearranged(panel, changed);
        Ok(())
    }

    fn emit_rearranged(&mut self, panel: PanelId, changed: bool) {
        if changed {
            debug!(%panel, "rearranged");
            self.emit(LayoutEvent::Rearranged { panel });
        }
    }
}
