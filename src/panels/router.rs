//! Panel registry, item membership and cross-panel transfer.
//!
//! The `PanelRouter` owns every panel's hand and selection and a
//! location index mapping each item to the one panel holding it. All
//! membership changes go through it, so an item is never in two hands.
//!
//! Panels are registered and unregistered explicitly; there is no global
//! list of panels.

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::core::{ItemId, PanelConfig, PanelId, PanelKind};
use crate::error::{LayoutError, LayoutResult};
use crate::events::{DeselectReason, LayoutEvent};
use crate::hand::{HandCollection, InsertPosition, SelectionSet};

use super::policy::DropPolicy;

/// Extra acceptance test applied on top of a panel's drop policy.
pub type AcceptFilter = Box<dyn Fn(ItemId) -> bool>;

/// One registered panel: its configuration, hand and selection.
#[derive(Clone, Debug)]
pub struct Panel {
    config: PanelConfig,
    policy: DropPolicy,
    pub(crate) hand: HandCollection,
    pub(crate) selection: SelectionSet,
}

impl Panel {
    fn new(config: PanelConfig) -> Self {
        Self {
            policy: DropPolicy::for_kind(config.kind),
            hand: HandCollection::new(config.id, config.max_slots),
            selection: SelectionSet::new(config.max_selected),
            config,
        }
    }

    /// Panel identifier.
    #[must_use]
    pub fn id(&self) -> PanelId {
        self.config.id
    }

    /// Panel kind.
    #[must_use]
    pub fn kind(&self) -> PanelKind {
        self.config.kind
    }

    /// Full configuration.
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Drop policy derived from the kind.
    #[must_use]
    pub fn policy(&self) -> DropPolicy {
        self.policy
    }

    /// Items in display order.
    #[must_use]
    pub fn hand(&self) -> &HandCollection {
        &self.hand
    }

    /// Selected items.
    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Remove `item` from hand and selection, returning its old index.
    fn take(&mut self, item: ItemId, events: &mut Vec<LayoutEvent>) -> LayoutResult<usize> {
        let index = self.hand.remove(item)?;
        if self.selection.deselect(item) {
            events.push(LayoutEvent::Deselected {
                panel: self.id(),
                item,
                reason: DeselectReason::Removed,
            });
        }
        Ok(index)
    }
}

/// Registry of panels plus the membership index.
#[derive(Default)]
pub struct PanelRouter {
    panels: FxHashMap<PanelId, Panel>,
    /// Registration order, for deterministic iteration.
    order: Vec<PanelId>,
    locations: FxHashMap<ItemId, PanelId>,
    filters: FxHashMap<PanelId, AcceptFilter>,
    events: Vec<LayoutEvent>,
}

impl std::fmt::Debug for PanelRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelRouter")
            .field("panels", &self.order)
            .field("items", &self.locations.len())
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl PanelRouter {
    /// Create an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Registry ===

    /// Register a panel.
    ///
    /// Fails on invalid configuration or an id already in use.
    pub fn register(&mut self, config: PanelConfig) -> LayoutResult<()> {
        config.validate()?;
        if self.panels.contains_key(&config.id) {
            return Err(LayoutError::InvalidConfiguration(format!(
                "duplicate panel id {}",
                config.id
            )));
        }

        info!(panel = %config.id, name = %config.name, kind = ?config.kind, "registered panel");
        self.order.push(config.id);
        self.panels.insert(config.id, Panel::new(config));
        Ok(())
    }

    /// Unregister a panel, returning the items it held.
    ///
    /// The items leave the engine; each gets a `Removed` event, preceded by
    /// `Deselected` if it was selected.
    pub fn unregister(&mut self, panel: PanelId) -> LayoutResult<Vec<ItemId>> {
        let mut removed = self.panels.remove(&panel).ok_or_else(|| {
            warn!(%panel, "unregister of unknown panel");
            LayoutError::PanelNotFound(panel)
        })?;
        self.order.retain(|&p| p != panel);
        self.filters.remove(&panel);

        let items = removed.hand.clear();
        for (index, &item) in items.iter().enumerate() {
            self.locations.remove(&item);
            if removed.selection.deselect(item) {
                self.events.push(LayoutEvent::Deselected {
                    panel,
                    item,
                    reason: DeselectReason::Removed,
                });
            }
            self.events.push(LayoutEvent::Removed { panel, item, index });
        }

        info!(%panel, items = items.len(), "unregistered panel");
        Ok(items)
    }

    /// Attach an extra acceptance filter to a panel.
    pub fn set_filter(
        &mut self,
        panel: PanelId,
        filter: impl Fn(ItemId) -> bool + 'static,
    ) -> LayoutResult<()> {
        self.panel(panel)?;
        self.filters.insert(panel, Box::new(filter));
        Ok(())
    }

    /// Look up a panel.
    pub fn panel(&self, panel: PanelId) -> LayoutResult<&Panel> {
        self.panels.get(&panel).ok_or(LayoutError::PanelNotFound(panel))
    }

    pub(crate) fn panel_mut(&mut self, panel: PanelId) -> LayoutResult<&mut Panel> {
        self.panels
            .get_mut(&panel)
            .ok_or(LayoutError::PanelNotFound(panel))
    }

    /// Registered panels in registration order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> + '_ {
        self.order.iter().filter_map(|id| self.panels.get(id))
    }

    /// Number of registered panels.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    // === Membership ===

    /// Panel currently holding `item`.
    #[must_use]
    pub fn location(&self, item: ItemId) -> Option<PanelId> {
        self.locations.get(&item).copied()
    }

    /// Panel holding `item`, or `UntrackedItem`.
    pub fn locate(&self, item: ItemId) -> LayoutResult<PanelId> {
        self.location(item).ok_or_else(|| {
            warn!(%item, "item is not in any panel");
            LayoutError::UntrackedItem(item)
        })
    }

    /// Whether the pointer may hover or press `item`.
    ///
    /// `false` for untracked items and for items in a non-interactive panel.
    #[must_use]
    pub fn is_interactive(&self, item: ItemId) -> bool {
        self.location(item)
            .and_then(|panel| self.panels.get(&panel))
            .is_some_and(|holder| holder.policy.interactive)
    }

    /// Total number of items across all panels.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.locations.len()
    }

    /// Put a new item into a panel.
    pub fn insert(
        &mut self,
        item: ItemId,
        panel: PanelId,
        position: InsertPosition,
    ) -> LayoutResult<usize> {
        if let Some(existing) = self.location(item) {
            warn!(%item, %existing, "item already placed");
            return Err(LayoutError::DuplicateItem {
                item,
                panel: existing,
            });
        }

        let target = self.panels.get_mut(&panel).ok_or_else(|| {
            warn!(%panel, %item, "insert into unknown panel");
            LayoutError::PanelNotFound(panel)
        })?;
        let index = target.hand.insert(item, position).inspect_err(|e| {
            warn!(%panel, %item, error = %e, "insert rejected");
        })?;

        self.locations.insert(item, panel);
        self.events.push(LayoutEvent::Inserted { panel, item, index });
        debug!(%panel, %item, index, "inserted");
        Ok(index)
    }

    /// Remove an item from the engine (it was destroyed externally).
    ///
    /// Returns where it was, or `None` if it was not tracked.
    pub fn remove(&mut self, item: ItemId) -> Option<(PanelId, usize)> {
        let Some(panel) = self.locations.remove(&item) else {
            warn!(%item, "remove of untracked item");
            return None;
        };

        let holder = self.panels.get_mut(&panel)?;
        let index = holder.take(item, &mut self.events).ok()?;
        self.events.push(LayoutEvent::Removed { panel, item, index });
        debug!(%panel, %item, index, "removed");
        Some((panel, index))
    }

    // === Routing ===

    /// Whether the player may drop `item` into `panel`.
    ///
    /// Checks the panel's drop policy and any filter; capacity is checked by
    /// the transfer itself.
    #[must_use]
    pub fn accepts_card(&self, panel: PanelId, item: ItemId) -> bool {
        let Some(target) = self.panels.get(&panel) else {
            return false;
        };
        if !target.policy.accepts_drop {
            debug!(%panel, %item, kind = ?target.kind(), "panel does not accept drops");
            return false;
        }
        self.filters.get(&panel).map_or(true, |accept| accept(item))
    }

    /// First panel in `candidates` (topmost first) that accepts `item`.
    #[must_use]
    pub fn route_drop(&self, item: ItemId, candidates: &[PanelId]) -> Option<PanelId> {
        candidates
            .iter()
            .copied()
            .find(|&panel| self.accepts_card(panel, item))
    }

    /// Notify listeners that `panel` received `item`.
    pub fn on_dropped(&mut self, panel: PanelId, item: ItemId) {
        let Some(target) = self.panels.get(&panel) else {
            warn!(%panel, %item, "drop notification for unknown panel");
            return;
        };
        if target.policy.notifies_on_drop {
            self.events.push(LayoutEvent::Dropped { panel, item });
        }
    }

    /// Move `item` from `from` to the end of `to`.
    ///
    /// Atomic: either the item is in `to` afterwards, or nothing changed.
    /// Capacity is re-checked here, whatever the caller checked before.
    /// The item loses its selection in `from`. Returns its new index.
    pub fn transfer_card(
        &mut self,
        item: ItemId,
        from: PanelId,
        to: PanelId,
    ) -> LayoutResult<usize> {
        let source = self.panel(from).inspect_err(|_| warn!(%from, "transfer from unknown panel"))?;
        if !source.hand.contains(item) {
            warn!(%item, %from, "transfer of item not in source panel");
            return Err(LayoutError::ItemNotFound { item, panel: from });
        }
        if from == to {
            return source.hand.index_of(item).ok_or(LayoutError::ItemNotFound { item, panel: from });
        }

        let target = self.panel(to).inspect_err(|_| warn!(%to, "transfer to unknown panel"))?;
        if let Some(capacity) = target.hand.max_slots().filter(|_| target.hand.is_full()) {
            warn!(%item, %to, capacity, "transfer rejected: target full");
            return Err(LayoutError::CapacityExceeded { panel: to, capacity });
        }

        // Target first: if it refuses, the source is still untouched.
        let index = self.panel_mut(to)?.hand.insert(item, InsertPosition::Back)?;
        let taken = match self.panels.get_mut(&from) {
            Some(source) => source.take(item, &mut self.events),
            None => Err(LayoutError::PanelNotFound(from)),
        };
        if let Err(e) = taken {
            self.panel_mut(to)?.hand.remove(item)?;
            warn!(%item, %from, %to, error = %e, "transfer rolled back");
            return Err(e);
        }

        self.locations.insert(item, to);
        self.events.push(LayoutEvent::Transferred { item, from, to, index });
        debug!(%item, %from, %to, index, "transferred");
        Ok(index)
    }

    /// Player drop of `item` onto `to`: policy check, transfer, notification.
    pub fn drop_card(&mut self, item: ItemId, to: PanelId) -> LayoutResult<usize> {
        let kind = self.panel(to)?.kind();
        if !self.accepts_card(to, item) {
            warn!(%item, %to, ?kind, "drop rejected");
            return Err(LayoutError::DropRejected { panel: to, kind });
        }

        let from = self.locate(item)?;
        let index = self.transfer_card(item, from, to)?;
        self.on_dropped(to, item);
        Ok(index)
    }

    /// Move every item of `from` into `to`, ignoring `to`'s drop policy.
    ///
    /// Stops when `to` is full; items that did not fit stay in `from`.
    /// Returns the items moved, in their former order.
    pub fn transfer_all(&mut self, from: PanelId, to: PanelId) -> LayoutResult<Vec<ItemId>> {
        let items = self.panel(from)?.hand.to_vec();
        self.panel(to)?;
        if from == to {
            return Ok(Vec::new());
        }

        let mut moved = Vec::with_capacity(items.len());
        for item in items {
            match self.transfer_card(item, from, to) {
                Ok(_) => {
                    self.on_dropped(to, item);
                    moved.push(item);
                }
                Err(LayoutError::CapacityExceeded { .. }) => break,
                Err(e) => return Err(e),
            }
        }
        debug!(%from, %to, moved = moved.len(), "bulk transfer");
        Ok(moved)
    }

    /// Move the selected items of `from` into `to`, oldest selection first,
    /// then clear what is left of `from`'s selection.
    ///
    /// Ignores `to`'s drop policy and stops when `to` is full, like
    /// `transfer_all`. Returns the items moved.
    pub fn transfer_selected(&mut self, from: PanelId, to: PanelId) -> LayoutResult<Vec<ItemId>> {
        let selected: Vec<ItemId> = self.panel(from)?.selection.iter().collect();
        self.panel(to)?;
        if from == to {
            return Ok(Vec::new());
        }

        let mut moved = Vec::with_capacity(selected.len());
        for item in selected {
            match self.transfer_card(item, from, to) {
                Ok(_) => {
                    self.on_dropped(to, item);
                    moved.push(item);
                }
                Err(LayoutError::CapacityExceeded { .. }) => break,
                Err(e) => return Err(e),
            }
        }
        self.deselect_all(from)?;
        debug!(%from, %to, moved = moved.len(), "selected items transferred");
        Ok(moved)
    }

    // === Events ===

    pub(crate) fn emit(&mut self, event: LayoutEvent) {
        self.events.push(event);
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<LayoutEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAND: PanelId = PanelId::new(0);
    const COMBO: PanelId = PanelId::new(1);
    const DISCARD: PanelId = PanelId::new(2);
    const PULL: PanelId = PanelId::new(3);

    fn router() -> PanelRouter {
        let mut router = PanelRouter::new();
        router
            .register(PanelConfig::new(HAND, "Hand", PanelKind::Draw).with_max_slots(7))
            .unwrap();
        router
            .register(PanelConfig::new(COMBO, "Combo", PanelKind::Combo).with_max_slots(2))
            .unwrap();
        router
            .register(PanelConfig::new(DISCARD, "Discard", PanelKind::Discard))
            .unwrap();
        router
            .register(PanelConfig::new(PULL, "Pull", PanelKind::Pull))
            .unwrap();
        router
    }

    fn fill(router: &mut PanelRouter, panel: PanelId, ids: std::ops::Range<u32>) {
        for id in ids {
            router.insert(ItemId(id), panel, InsertPosition::Back).unwrap();
        }
    }

    #[test]
    fn test_register_duplicate_rejected() {
        let mut router = router();
        let err = router
            .register(PanelConfig::new(HAND, "Again", PanelKind::Draw))
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)));
        assert_eq!(router.panel_count(), 4);
    }

    #[test]
    fn test_register_invalid_config_rejected() {
        let mut router = PanelRouter::new();
        let err = router
            .register(PanelConfig::new(HAND, "Hand", PanelKind::Draw).with_max_selected(0))
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_insert_tracks_location() {
        let mut router = router();
        fill(&mut router, HAND, 0..3);

        assert_eq!(router.location(ItemId(1)), Some(HAND));
        assert_eq!(router.item_count(), 3);

        let err = router.insert(ItemId(1), COMBO, InsertPosition::Back).unwrap_err();
        assert_eq!(err, LayoutError::DuplicateItem { item: ItemId(1), panel: HAND });
        assert!(!router.panel(COMBO).unwrap().hand().contains(ItemId(1)));
    }

    #[test]
    fn test_accepts_card_by_kind() {
        let router = router();
        assert!(router.accepts_card(HAND, ItemId(0)));
        assert!(router.accepts_card(COMBO, ItemId(0)));
        assert!(!router.accepts_card(DISCARD, ItemId(0)));
        assert!(!router.accepts_card(PULL, ItemId(0)));
        assert!(!router.accepts_card(PanelId::new(42), ItemId(0)));
    }

    #[test]
    fn test_filter_narrows_acceptance() {
        let mut router = router();
        router.set_filter(COMBO, |item| item.raw() % 2 == 0).unwrap();

        assert!(router.accepts_card(COMBO, ItemId(2)));
        assert!(!router.accepts_card(COMBO, ItemId(3)));
        assert_eq!(router.route_drop(ItemId(3), &[DISCARD, COMBO, HAND]), Some(HAND));
        assert_eq!(router.route_drop(ItemId(2), &[DISCARD, COMBO, HAND]), Some(COMBO));
        assert_eq!(router.route_drop(ItemId(2), &[DISCARD, PULL]), None);
    }

    #[test]
    fn test_transfer_moves_and_deselects() {
        let mut router = router();
        fill(&mut router, HAND, 0..3);
        router.panel_mut(HAND).unwrap().selection.toggle(ItemId(1));
        router.drain_events();

        let index = router.transfer_card(ItemId(1), HAND, COMBO).unwrap();

        assert_eq!(index, 0);
        assert_eq!(router.location(ItemId(1)), Some(COMBO));
        assert_eq!(router.panel(HAND).unwrap().hand().to_vec(), vec![ItemId(0), ItemId(2)]);
        assert!(router.panel(HAND).unwrap().selection().is_empty());

        let events = router.drain_events();
        assert_eq!(
            events,
            vec![
                LayoutEvent::Deselected {
                    panel: HAND,
                    item: ItemId(1),
                    reason: DeselectReason::Removed
                },
                LayoutEvent::Transferred {
                    item: ItemId(1),
                    from: HAND,
                    to: COMBO,
                    index: 0
                },
            ]
        );
    }

    #[test]
    fn test_transfer_into_full_panel_rejected() {
        let mut router = router();
        fill(&mut router, HAND, 0..7);
        fill(&mut router, COMBO, 10..12);
        router.drain_events();
        let before = router.panel(COMBO).unwrap().hand().to_vec();

        let err = router.transfer_card(ItemId(10), COMBO, HAND).unwrap_err();

        assert_eq!(err, LayoutError::CapacityExceeded { panel: HAND, capacity: 7 });
        assert_eq!(router.location(ItemId(10)), Some(COMBO));
        assert_eq!(router.panel(COMBO).unwrap().hand().to_vec(), before);
        assert!(router.drain_events().is_empty());
    }

    #[test]
    fn test_transfer_of_stale_item() {
        let mut router = router();
        fill(&mut router, HAND, 0..2);

        let err = router.transfer_card(ItemId(5), HAND, COMBO).unwrap_err();
        assert_eq!(err, LayoutError::ItemNotFound { item: ItemId(5), panel: HAND });
    }

    #[test]
    fn test_drop_card_respects_policy() {
        let mut router = router();
        fill(&mut router, HAND, 0..2);
        router.drain_events();

        let err = router.drop_card(ItemId(0), DISCARD).unwrap_err();
        assert_eq!(err, LayoutError::DropRejected { panel: DISCARD, kind: PanelKind::Discard });
        assert_eq!(router.location(ItemId(0)), Some(HAND));

        router.drop_card(ItemId(0), COMBO).unwrap();
        assert_eq!(router.location(ItemId(0)), Some(COMBO));
        assert!(router
            .drain_events()
            .contains(&LayoutEvent::Dropped { panel: COMBO, item: ItemId(0) }));
    }

    #[test]
    fn test_transfer_all_stops_at_capacity() {
        let mut router = router();
        fill(&mut router, HAND, 0..4);

        let moved = router.transfer_all(HAND, COMBO).unwrap();

        assert_eq!(moved, vec![ItemId(0), ItemId(1)]);
        assert_eq!(router.panel(HAND).unwrap().hand().to_vec(), vec![ItemId(2), ItemId(3)]);
        assert_eq!(router.panel(COMBO).unwrap().hand().len(), 2);
    }

    #[test]
    fn test_transfer_all_into_discard() {
        let mut router = router();
        fill(&mut router, COMBO, 0..2);
        router.drain_events();

        let moved = router.transfer_all(COMBO, DISCARD).unwrap();

        assert_eq!(moved.len(), 2);
        assert!(router.panel(COMBO).unwrap().hand().is_empty());
        let dropped = router
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, LayoutEvent::Dropped { panel: DISCARD, .. }))
            .count();
        assert_eq!(dropped, 2);
    }

    #[test]
    fn test_transfer_selected_in_selection_order() {
        let mut router = router();
        fill(&mut router, HAND, 0..4);
        router.panel_mut(HAND).unwrap().selection.toggle(ItemId(3));
        router.panel_mut(HAND).unwrap().selection.toggle(ItemId(1));
        router.drain_events();

        let moved = router.transfer_selected(HAND, DISCARD).unwrap();

        assert_eq!(moved, vec![ItemId(3), ItemId(1)]);
        assert_eq!(router.panel(DISCARD).unwrap().hand().to_vec(), moved);
        assert_eq!(router.panel(HAND).unwrap().hand().to_vec(), vec![ItemId(0), ItemId(2)]);
        assert!(router.panel(HAND).unwrap().selection().is_empty());
        assert!(!router.is_interactive(ItemId(3)));
        assert!(router.is_interactive(ItemId(0)));

        let dropped: Vec<_> = router
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                LayoutEvent::Dropped { panel: DISCARD, item } => Some(item),
                _ => None,
            })
            .collect();
        assert_eq!(dropped, vec![ItemId(3), ItemId(1)]);
    }

    #[test]
    fn test_transfer_selected_stops_at_capacity() {
        let mut router = router();
        fill(&mut router, HAND, 0..4);
        fill(&mut router, COMBO, 10..11);
        for id in [2, 0, 3] {
            router.panel_mut(HAND).unwrap().selection.toggle(ItemId(id));
        }
        router.drain_events();

        let moved = router.transfer_selected(HAND, COMBO).unwrap();

        assert_eq!(moved, vec![ItemId(2)]);
        assert_eq!(router.location(ItemId(0)), Some(HAND));
        assert_eq!(router.location(ItemId(3)), Some(HAND));
        assert!(router.panel(HAND).unwrap().selection().is_empty());
        let cleared = router
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, LayoutEvent::Deselected { reason: DeselectReason::Cleared, .. }))
            .count();
        assert_eq!(cleared, 2);
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut router = router();
        fill(&mut router, HAND, 0..2);
        router.panel_mut(HAND).unwrap().selection.toggle(ItemId(0));

        assert_eq!(router.remove(ItemId(0)), Some((HAND, 0)));
        assert_eq!(router.location(ItemId(0)), None);
        assert!(router.panel(HAND).unwrap().selection().is_empty());
        assert_eq!(router.remove(ItemId(0)), None);
    }

    #[test]
    fn test_unregister_releases_items() {
        let mut router = router();
        fill(&mut router, COMBO, 0..2);

        let items = router.unregister(COMBO).unwrap();

        assert_eq!(items, vec![ItemId(0), ItemId(1)]);
        assert_eq!(router.location(ItemId(0)), None);
        assert!(router.panel(COMBO).is_err());
        assert_eq!(router.panels().count(), 3);
        assert_eq!(router.unregister(COMBO), Err(LayoutError::PanelNotFound(COMBO)));
    }

    #[test]
    fn test_unregister_deselects_before_removal() {
        let mut router = router();
        fill(&mut router, COMBO, 0..2);
        router.panel_mut(COMBO).unwrap().selection.toggle(ItemId(1));
        router.drain_events();

        router.unregister(COMBO).unwrap();

        assert_eq!(
            router.drain_events(),
            vec![
                LayoutEvent::Removed { panel: COMBO, item: ItemId(0), index: 0 },
                LayoutEvent::Deselected {
                    panel: COMBO,
                    item: ItemId(1),
                    reason: DeselectReason::Removed
                },
                LayoutEvent::Removed { panel: COMBO, item: ItemId(1), index: 1 },
            ]
        );
    }
}
