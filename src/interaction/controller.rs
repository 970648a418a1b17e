//! Pointer-driven interaction state machine.
//!
//! The controller turns press/move/release input into engine operations.
//! Nothing is mutated while a drag is in flight: the hand order changes
//! only on release, so a cancelled drag has nothing to undo.

use tracing::{debug, warn};

use crate::core::{ItemId, PanelId};
use crate::error::LayoutError;
use crate::events::LayoutEvent;
use crate::panels::PanelRouter;

use super::state::{CancelReason, DragSession, DropOutcome, InteractionState, PointerSample};

/// Tracks the one item the pointer is working with.
#[derive(Clone, Debug)]
pub struct InteractionController {
    state: InteractionState,
    drag_threshold: f32,
}

impl InteractionController {
    /// Create an idle controller. Moves shorter than `drag_threshold` are clicks.
    #[must_use]
    pub fn new(drag_threshold: f32) -> Self {
        Self {
            state: InteractionState::Idle,
            drag_threshold,
        }
    }

    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    #[must_use]
    pub fn drag_threshold(&self) -> f32 {
        self.drag_threshold
    }

    /// The active drag, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<&DragSession> {
        match &self.state {
            InteractionState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    // === Hover ===

    /// The pointer entered `item`. Ignored while a press is active and for
    /// items in non-interactive panels.
    pub fn on_hover_enter(&mut self, router: &mut PanelRouter, item: ItemId) -> bool {
        let previous = match self.state {
            InteractionState::Idle => None,
            InteractionState::Hovered { item: current } if current == item => return true,
            InteractionState::Hovered { item: current } => Some(current),
            InteractionState::Pressed { .. } | InteractionState::Dragging(_) => return false,
        };
        if !router.is_interactive(item) {
            return false;
        }

        if let Some(previous) = previous {
            router.emit(LayoutEvent::HoverChanged {
                item: previous,
                hovered: false,
            });
        }
        self.state = InteractionState::Hovered { item };
        router.emit(LayoutEvent::HoverChanged { item, hovered: true });
        true
    }

    /// The pointer left `item`.
    pub fn on_hover_exit(&mut self, router: &mut PanelRouter, item: ItemId) {
        if self.state == (InteractionState::Hovered { item }) {
            self.state = InteractionState::Idle;
            router.emit(LayoutEvent::HoverChanged { item, hovered: false });
        }
    }

    // === Press ===

    /// The pointer went down on `item`.
    ///
    /// Returns `false` if another press is active, the item is untracked or
    /// its panel does not take pointer input.
    pub fn on_press_start(
        &mut self,
        router: &PanelRouter,
        item: ItemId,
        pointer: &PointerSample,
    ) -> bool {
        if matches!(
            self.state,
            InteractionState::Pressed { .. } | InteractionState::Dragging(_)
        ) {
            debug!(%item, "press ignored, another press is active");
            return false;
        }
        let Ok(panel) = router.locate(item) else {
            return false;
        };
        if !router.is_interactive(item) {
            debug!(%item, %panel, "press ignored, panel is not interactive");
            return false;
        }

        self.state = InteractionState::Pressed {
            item,
            panel,
            press: pointer.position,
        };
        debug!(%item, %panel, "pressed");
        true
    }

    /// The pointer moved while `item` is pressed.
    ///
    /// Past the drag threshold the press becomes a drag. While dragging,
    /// returns the index the item would take in its own panel if released
    /// here.
    pub fn on_press_move(
        &mut self,
        router: &mut PanelRouter,
        item: ItemId,
        pointer: &PointerSample,
    ) -> Option<usize> {
        match &mut self.state {
            InteractionState::Pressed {
                item: pressed,
                panel,
                press,
            } if *pressed == item => {
                if press.distance(pointer.position) <= self.drag_threshold {
                    return None;
                }
                let (panel, press) = (*panel, *press);
                let origin_index = router
                    .panel(panel)
                    .ok()
                    .and_then(|holder| holder.hand().index_of(item));
                let Some(origin_index) = origin_index else {
                    warn!(%item, %panel, "pressed item left its panel");
                    self.state = InteractionState::Idle;
                    return None;
                };

                self.state = InteractionState::Dragging(DragSession {
                    item,
                    origin_panel: panel,
                    origin_index,
                    press,
                    pointer: pointer.position,
                });
                router.emit(LayoutEvent::DragStarted { panel, item });
                debug!(%item, %panel, origin_index, "drag started");
            }
            InteractionState::Dragging(session) if session.item == item => {
                session.pointer = pointer.position;
            }
            _ => return None,
        }

        router.preview_insert_index(item, pointer.position.x).ok()
    }

    /// The pointer went up. The controller is idle afterwards.
    pub fn on_press_end(
        &mut self,
        router: &mut PanelRouter,
        item: ItemId,
        pointer: &PointerSample,
    ) -> DropOutcome {
        match self.state {
            InteractionState::Pressed { item: pressed, panel, .. } if pressed == item => {
                self.state = InteractionState::Idle;
                // Piles draw no selection, so a click there means nothing.
                if !router.panel(panel).is_ok_and(|holder| holder.policy().arranged) {
                    return DropOutcome::Ignored;
                }
                match router.toggle_selection(item) {
                    Ok(change) => DropOutcome::Clicked(change),
                    Err(_) => DropOutcome::Ignored,
                }
            }
            InteractionState::Dragging(session) if session.item == item => {
                self.state = InteractionState::Idle;
                Self::finish_drag(router, session, pointer)
            }
            _ => DropOutcome::Ignored,
        }
    }

    /// Abort an active drag or press.
    pub fn cancel(&mut self, router: &mut PanelRouter) -> Option<DropOutcome> {
        let outcome = match self.state {
            InteractionState::Dragging(session) => {
                Self::snap_back(router, &session, CancelReason::Aborted)
            }
            InteractionState::Pressed { item, .. } => DropOutcome::Cancelled {
                item,
                reason: CancelReason::Aborted,
            },
            InteractionState::Idle | InteractionState::Hovered { .. } => return None,
        };
        self.state = InteractionState::Idle;
        Some(outcome)
    }

    /// `item` was destroyed: drop any state about it.
    pub fn forget(&mut self, router: &mut PanelRouter, item: ItemId) {
        if self.state == (InteractionState::Hovered { item }) {
            self.state = InteractionState::Idle;
        } else {
            self.release(router, item);
        }
    }

    /// `item` was moved by the host: end any press or drag on it. A hover
    /// survives the move.
    pub fn release(&mut self, router: &mut PanelRouter, item: ItemId) {
        match self.state {
            InteractionState::Pressed { item: pressed, .. } if pressed == item => {
                self.state = InteractionState::Idle;
            }
            InteractionState::Dragging(session) if session.item == item => {
                self.state = InteractionState::Idle;
                Self::snap_back(router, &session, CancelReason::ItemGone);
            }
            _ => {}
        }
    }

    fn finish_drag(
        router: &mut PanelRouter,
        session: DragSession,
        pointer: &PointerSample,
    ) -> DropOutcome {
        let item = session.item;
        if router.location(item) != Some(session.origin_panel) {
            return Self::snap_back(router, &session, CancelReason::ItemGone);
        }
        if pointer.over.is_empty() {
            return Self::snap_back(router, &session, CancelReason::NoTarget);
        }

        let Some(target) = Self::drop_target(router, &session, &pointer.over) else {
            return Self::snap_back(router, &session, CancelReason::Rejected);
        };

        if target == session.origin_panel {
            return match router.commit_reorder(item, pointer.position.x) {
                Ok(outcome) => DropOutcome::Reordered(outcome),
                Err(_) => Self::snap_back(router, &session, CancelReason::ItemGone),
            };
        }

        match router.drop_card(item, target) {
            Ok(index) => DropOutcome::Transferred {
                item,
                from: session.origin_panel,
                to: target,
                index,
            },
            Err(LayoutError::CapacityExceeded { .. }) => {
                Self::snap_back(router, &session, CancelReason::Full)
            }
            Err(LayoutError::DropRejected { .. }) => {
                Self::snap_back(router, &session, CancelReason::Rejected)
            }
            Err(_) => Self::snap_back(router, &session, CancelReason::ItemGone),
        }
    }

    /// Topmost panel under the pointer that would take the item: its own
    /// panel if laid out, otherwise any panel that accepts drops.
    fn drop_target(
        router: &PanelRouter,
        session: &DragSession,
        over: &[PanelId],
    ) -> Option<PanelId> {
        over.iter().copied().find(|&panel| {
            if panel == session.origin_panel {
                router
                    .panel(panel)
                    .is_ok_and(|holder| holder.policy().arranged)
            } else {
                router.accepts_card(panel, session.item)
            }
        })
    }

    fn snap_back(
        router: &mut PanelRouter,
        session: &DragSession,
        reason: CancelReason,
    ) -> DropOutcome {
        debug!(item = %session.item, panel = %session.origin_panel, ?reason, "drag cancelled");
        router.emit(LayoutEvent::DragCancelled {
            panel: session.origin_panel,
            item: session.item,
        });
        DropOutcome::Cancelled {
            item: session.item,
            reason,
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(crate::core::DEFAULT_DRAG_THRESHOLD)
    }
}
