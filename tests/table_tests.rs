//! Table integration tests.
//!
//! End-to-end flows through `HandTable`: reordering, bounded selection,
//! transfers between panels, pointer interaction and events.

use hand_layout::cards::{resolve, CardCatalog, CardId, EffectTarget};
use hand_layout::core::{HandRng, ItemAllocator, ItemId, PanelConfig, PanelId, PanelKind, TableConfig};
use hand_layout::error::LayoutError;
use hand_layout::events::{DeselectReason, LayoutEvent};
use hand_layout::hand::{InsertPosition, SelectionChange};
use hand_layout::interaction::{CancelReason, DropOutcome, PointerSample};
use hand_layout::table::HandTable;

const HAND: PanelId = PanelId::new(0);
const COMBO: PanelId = PanelId::new(1);
const DISCARD: PanelId = PanelId::new(2);
const PULL: PanelId = PanelId::new(3);

fn config() -> TableConfig {
    TableConfig::new()
        .with_panel(PanelConfig::new(HAND, "Hand", PanelKind::Draw).with_max_slots(7))
        .with_panel(
            PanelConfig::new(COMBO, "Combo", PanelKind::Combo)
                .with_max_slots(3)
                .with_max_selected(3),
        )
        .with_panel(PanelConfig::new(DISCARD, "Discard", PanelKind::Discard))
        .with_panel(PanelConfig::new(PULL, "Pull", PanelKind::Pull))
}

fn table_with_hand(count: u32) -> HandTable {
    let mut table = HandTable::new(config()).unwrap();
    for id in 0..count {
        table.insert(ItemId(id), HAND, InsertPosition::Back).unwrap();
    }
    table.drain_events();
    table
}

fn order(table: &HandTable, panel: PanelId) -> Vec<ItemId> {
    table.panel(panel).unwrap().hand().to_vec()
}

// ============================================================================
// Reordering
// ============================================================================

/// Five items, item 0 dropped one slot to the right.
#[test]
fn test_commit_one_slot_right() {
    let mut table = table_with_hand(5);

    let outcome = table.commit_reorder(ItemId(0), -150.0).unwrap();

    assert_eq!((outcome.from, outcome.to), (0, 1));
    assert_eq!(
        order(&table, HAND),
        vec![ItemId(1), ItemId(0), ItemId(2), ItemId(3), ItemId(4)]
    );
}

/// Committing at the item's own slot changes nothing.
#[test]
fn test_commit_in_place_is_idempotent() {
    let mut table = table_with_hand(5);
    let before = order(&table, HAND);

    for _ in 0..3 {
        let outcome = table.commit_reorder(ItemId(3), 150.0).unwrap();
        assert!(outcome.is_noop());
    }

    assert_eq!(order(&table, HAND), before);
    assert!(table.drain_events().is_empty());
}

/// Rotation and swap are reported as rearrangements.
#[test]
fn test_rotate_swap_shuffle() {
    let mut table = table_with_hand(4);

    table.rotate_right(HAND).unwrap();
    assert_eq!(order(&table, HAND), vec![ItemId(3), ItemId(0), ItemId(1), ItemId(2)]);

    table.swap(HAND, 0, 3).unwrap();
    assert_eq!(order(&table, HAND), vec![ItemId(2), ItemId(0), ItemId(1), ItemId(3)]);

    let mut rng = HandRng::new(42);
    table.shuffle(HAND, &mut rng).unwrap();
    let mut sorted = order(&table, HAND);
    sorted.sort();
    assert_eq!(sorted, vec![ItemId(0), ItemId(1), ItemId(2), ItemId(3)]);

    let rearranged = table
        .drain_events()
        .iter()
        .filter(|e| matches!(e, LayoutEvent::Rearranged { panel: HAND }))
        .count();
    assert_eq!(rearranged, 3);
}

/// Same seed, same shuffle.
#[test]
fn test_shuffle_is_deterministic() {
    let mut a = table_with_hand(7);
    let mut b = table_with_hand(7);

    a.shuffle(HAND, &mut HandRng::new(9)).unwrap();
    b.shuffle(HAND, &mut HandRng::new(9)).unwrap();

    assert_eq!(order(&a, HAND), order(&b, HAND));
}

// ============================================================================
// Selection
// ============================================================================

/// A, B, C selected with a limit of 3; selecting D evicts A.
#[test]
fn test_fifo_eviction() {
    let config = TableConfig::new()
        .with_panel(PanelConfig::new(HAND, "Hand", PanelKind::Draw).with_max_selected(3));
    let mut table = HandTable::new(config).unwrap();
    let [a, b, c, d] = [ItemId(10), ItemId(11), ItemId(12), ItemId(13)];
    for item in [a, b, c, d] {
        table.insert(item, HAND, InsertPosition::Back).unwrap();
    }

    for item in [a, b, c] {
        table.toggle_selection(item).unwrap();
    }
    table.drain_events();
    let change = table.toggle_selection(d).unwrap();

    assert_eq!(change, SelectionChange::Selected { item: d, evicted: Some(a) });
    assert!(!table.is_selected(a));
    assert!(table.is_selected(d));
    assert_eq!(table.panel(HAND).unwrap().selection().len(), 3);
    assert_eq!(
        table.drain_events(),
        vec![
            LayoutEvent::Deselected { panel: HAND, item: a, reason: DeselectReason::Evicted },
            LayoutEvent::Selected { panel: HAND, item: d },
        ]
    );
}

/// Selection is per panel.
#[test]
fn test_selection_is_scoped_to_panel() {
    let mut table = table_with_hand(2);
    table.insert(ItemId(10), COMBO, InsertPosition::Back).unwrap();

    table.toggle_selection(ItemId(0)).unwrap();
    table.toggle_selection(ItemId(10)).unwrap();
    let cleared = table.deselect_all(HAND).unwrap();

    assert_eq!(cleared.as_slice(), &[ItemId(0)]);
    assert!(table.is_selected(ItemId(10)));
}

/// Moving a selected item out of a panel deselects it there.
#[test]
fn test_transfer_clears_selection() {
    let mut table = table_with_hand(3);
    table.toggle_selection(ItemId(1)).unwrap();
    table.drain_events();

    table.transfer_card(ItemId(1), HAND, COMBO).unwrap();

    assert!(!table.is_selected(ItemId(1)));
    assert_eq!(
        table.drain_events()[0],
        LayoutEvent::Deselected {
            panel: HAND,
            item: ItemId(1),
            reason: DeselectReason::Removed
        }
    );
}

// ============================================================================
// Transfers
// ============================================================================

/// Transfer into a 7/7 panel is rejected and the source is untouched.
#[test]
fn test_transfer_into_full_hand() {
    let mut table = table_with_hand(7);
    table.insert(ItemId(20), COMBO, InsertPosition::Back).unwrap();
    let before = order(&table, COMBO);

    let err = table.transfer_card(ItemId(20), COMBO, HAND).unwrap_err();

    assert_eq!(err, LayoutError::CapacityExceeded { panel: HAND, capacity: 7 });
    assert_eq!(order(&table, COMBO), before);
    assert_eq!(table.location(ItemId(20)), Some(COMBO));
}

/// The discard button: every combo card goes to the discard pile.
#[test]
fn test_discard_all_combo_cards() {
    let mut table = table_with_hand(3);
    for id in 0..3 {
        table.drop_card(ItemId(id), COMBO).unwrap();
    }
    table.toggle_selection(ItemId(1)).unwrap();

    let moved = table.transfer_all(COMBO, DISCARD).unwrap();

    assert_eq!(moved, vec![ItemId(0), ItemId(1), ItemId(2)]);
    assert!(order(&table, COMBO).is_empty());
    assert_eq!(order(&table, DISCARD), moved);
    assert!(!table.is_selected(ItemId(1)));
}

/// The use button: selected hand cards go to the discard pile in the
/// order they were selected, and the rest of the hand is deselected.
#[test]
fn test_use_selected_cards() {
    let mut table = table_with_hand(5);
    for id in [3, 0, 4] {
        table.toggle_selection(ItemId(id)).unwrap();
    }
    table.drain_events();

    let moved = table.transfer_selected(HAND, DISCARD).unwrap();

    assert_eq!(moved, vec![ItemId(3), ItemId(0), ItemId(4)]);
    assert_eq!(order(&table, DISCARD), moved);
    assert_eq!(order(&table, HAND), vec![ItemId(1), ItemId(2)]);
    assert!(table.snapshot().panel(HAND).unwrap().selected.is_empty());
    let dropped = table
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, LayoutEvent::Dropped { panel: DISCARD, .. }))
        .count();
    assert_eq!(dropped, 3);
}

/// Discarded cards are spent: the pointer cannot pick them back up.
#[test]
fn test_discarded_cards_cannot_be_dragged_back() {
    let mut table = table_with_hand(3);
    table.transfer_all(HAND, DISCARD).unwrap();
    table.drain_events();
    let over_hand = PointerSample::new(0.0, 300.0).over(HAND);

    assert!(!table.on_hover_enter(ItemId(1)));
    assert!(!table.on_press_start(ItemId(1), &PointerSample::new(0.0, 0.0)));
    table.on_press_move(ItemId(1), &over_hand);
    let outcome = table.on_press_end(ItemId(1), &over_hand);

    assert_eq!(outcome, DropOutcome::Ignored);
    assert_eq!(table.location(ItemId(1)), Some(DISCARD));
    assert!(table.drain_events().iter().all(|e| !matches!(e, LayoutEvent::Transferred { .. })));
}

/// The host moving the dragged card ends the drag; the origin keeps
/// rendering.
#[test]
fn test_host_transfer_during_drag() {
    let mut table = table_with_hand(4);
    table.on_press_start(ItemId(0), &PointerSample::new(0.0, 0.0));
    table.on_press_move(ItemId(0), &PointerSample::new(120.0, 0.0));

    table.transfer_all(HAND, COMBO).unwrap();

    assert!(table.interaction().is_idle());
    assert_eq!(table.preview_placements(HAND).unwrap().len(), 1);
    assert_eq!(table.preview_placements(COMBO).unwrap().len(), 3);
    assert!(table
        .drain_events()
        .contains(&LayoutEvent::DragCancelled { panel: HAND, item: ItemId(0) }));
}

/// Players cannot drop into Discard or Pull.
#[test]
fn test_drop_policy() {
    let mut table = table_with_hand(1);

    assert!(matches!(
        table.drop_card(ItemId(0), DISCARD),
        Err(LayoutError::DropRejected { kind: PanelKind::Discard, .. })
    ));
    assert!(matches!(
        table.drop_card(ItemId(0), PULL),
        Err(LayoutError::DropRejected { kind: PanelKind::Pull, .. })
    ));
    assert_eq!(table.location(ItemId(0)), Some(HAND));
}

/// Items can be dragged out of a Pull pile into the hand.
#[test]
fn test_drag_out_of_pull_pile() {
    let mut table = HandTable::new(config()).unwrap();
    table.insert(ItemId(5), PULL, InsertPosition::Back).unwrap();

    table.on_press_start(ItemId(5), &PointerSample::new(0.0, 0.0));
    table.on_press_move(ItemId(5), &PointerSample::new(0.0, 300.0));
    let outcome = table.on_press_end(ItemId(5), &PointerSample::new(0.0, 300.0).over(HAND));

    assert_eq!(
        outcome,
        DropOutcome::Transferred {
            item: ItemId(5),
            from: PULL,
            to: HAND,
            index: 0
        }
    );
}

// ============================================================================
// Pointer interaction
// ============================================================================

/// A full drag over the hand: start, preview, commit.
#[test]
fn test_drag_reorder_flow() {
    let mut table = table_with_hand(5);
    let release = PointerSample::new(290.0, 0.0).over(HAND);

    assert!(table.on_press_start(ItemId(1), &PointerSample::new(-150.0, 0.0).over(HAND)));
    assert_eq!(table.on_press_move(ItemId(1), &release), Some(4));
    let outcome = table.on_press_end(ItemId(1), &release);

    assert!(matches!(outcome, DropOutcome::Reordered(r) if r.to == 4));
    assert_eq!(
        order(&table, HAND),
        vec![ItemId(0), ItemId(2), ItemId(3), ItemId(4), ItemId(1)]
    );
    assert!(table.interaction().is_idle());

    let events = table.drain_events();
    assert_eq!(
        events,
        vec![
            LayoutEvent::DragStarted { panel: HAND, item: ItemId(1) },
            LayoutEvent::Reordered { panel: HAND, item: ItemId(1), from: 1, to: 4 },
        ]
    );
}

/// A drop on a panel that refuses the item snaps back.
#[test]
fn test_drop_on_filtered_panel() {
    let mut table = table_with_hand(3);
    table.set_filter(COMBO, |item| item.raw() >= 100).unwrap();
    let over_combo = PointerSample::new(0.0, 500.0).over(COMBO);

    table.on_press_start(ItemId(0), &PointerSample::new(0.0, 0.0));
    table.on_press_move(ItemId(0), &over_combo);
    let outcome = table.on_press_end(ItemId(0), &over_combo);

    assert_eq!(
        outcome,
        DropOutcome::Cancelled {
            item: ItemId(0),
            reason: CancelReason::Rejected
        }
    );
    assert_eq!(order(&table, HAND)[0], ItemId(0));
}

/// The topmost accepting panel wins.
#[test]
fn test_drop_routes_to_topmost_accepting() {
    let mut table = table_with_hand(3);
    let over = PointerSample::new(0.0, 500.0).over(DISCARD).over(COMBO).over(HAND);

    table.on_press_start(ItemId(2), &PointerSample::new(0.0, 0.0));
    table.on_press_move(ItemId(2), &over);
    let outcome = table.on_press_end(ItemId(2), &over);

    assert!(matches!(outcome, DropOutcome::Transferred { to: COMBO, .. }));
    assert!(table
        .drain_events()
        .contains(&LayoutEvent::Dropped { panel: COMBO, item: ItemId(2) }));
}

/// Cancelling mid-drag leaves everything as it was.
#[test]
fn test_cancel_drag() {
    let mut table = table_with_hand(4);
    let before = table.snapshot();

    table.on_press_start(ItemId(2), &PointerSample::new(0.0, 0.0));
    table.on_press_move(ItemId(2), &PointerSample::new(-400.0, 0.0));
    let outcome = table.cancel_drag();

    assert_eq!(
        outcome,
        Some(DropOutcome::Cancelled {
            item: ItemId(2),
            reason: CancelReason::Aborted
        })
    );
    assert_eq!(table.snapshot(), before);
    assert_eq!(table.cancel_drag(), None);
}

/// Unregistering a panel releases its items.
#[test]
fn test_unregister_panel() {
    let mut table = table_with_hand(2);

    let items = table.unregister_panel(HAND).unwrap();

    assert_eq!(items, vec![ItemId(0), ItemId(1)]);
    assert_eq!(table.location(ItemId(0)), None);
    assert!(table.snapshot().panel(HAND).is_none());
}

// ============================================================================
// Configuration and cards
// ============================================================================

/// Tables can be configured from JSON.
#[test]
fn test_config_from_json() {
    let json = r#"{
        "drag_threshold": 12.0,
        "panels": [
            { "id": 0, "name": "Hand", "kind": "Draw", "max_slots": 7 },
            { "id": 1, "name": "Combo", "kind": "Combo", "max_selected": 2,
              "layout": { "spacing": 90.0, "curve_height": 30.0, "max_width": 600.0, "select_raise": 20.0 } }
        ]
    }"#;

    let config = TableConfig::from_json(json).unwrap();
    assert_eq!(config.drag_threshold, 12.0);
    assert_eq!(config.get_panel(COMBO).unwrap().layout.spacing, 90.0);
    assert_eq!(config.get_panel(HAND).unwrap().max_selected, 5);

    let table = HandTable::new(config).unwrap();
    assert_eq!(table.router().panel_count(), 2);
}

/// Malformed JSON and invalid values are both rejected.
#[test]
fn test_config_errors() {
    assert!(matches!(
        TableConfig::from_json("{ panels: }"),
        Err(LayoutError::Config(_))
    ));

    let config = TableConfig::new().with_panel(
        PanelConfig::new(HAND, "Hand", PanelKind::Draw).with_max_selected(0),
    );
    assert!(matches!(
        HandTable::new(config),
        Err(LayoutError::InvalidConfiguration(_))
    ));
}

/// Dealing random cards into the hand and playing one.
#[test]
fn test_deal_and_play_cards() {
    let mut table = HandTable::new(config()).unwrap();
    let mut catalog = CardCatalog::basic();
    let mut items = ItemAllocator::new();
    let mut rng = HandRng::new(3);

    for _ in 0..5 {
        let item = items.next();
        let card = catalog.random_card(&mut rng).unwrap();
        catalog.bind(item, card).unwrap();
        table.insert(item, HAND, InsertPosition::Back).unwrap();
    }

    let played = ItemId(0);
    table.drop_card(played, COMBO).unwrap();
    let card = catalog.card_for(played).unwrap();
    let outcome = resolve(card, EffectTarget::Slot(2)).unwrap();

    assert_eq!(outcome.damage, 5);
    assert_eq!(outcome.slot, Some(2));
    assert!(catalog.card_id_for(played).is_some_and(|id| id.raw() < 2));
    assert!(catalog.get(CardId::new(2)).is_none());
}
