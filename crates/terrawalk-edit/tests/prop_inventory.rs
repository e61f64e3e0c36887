use proptest::prelude::*;
use terrawalk_edit::{HOTBAR_SLOTS, Inventory, Slot};

proptest! {
    // Scrolling forward then back lands on the starting selection
    #[test]
    fn cycle_is_reversible(start in 0u8..10, delta in -40i32..40) {
        let mut inv = Inventory::default();
        inv.select_key(start);
        let before = inv.selected();
        inv.cycle(delta);
        inv.cycle(-delta);
        prop_assert_eq!(inv.selected(), before);
    }

    // Selection is always a valid slot or nothing
    #[test]
    fn selection_stays_in_range(steps in prop::collection::vec(-20i32..20, 0..32)) {
        let mut inv = Inventory::default();
        for s in steps {
            inv.cycle(s);
            prop_assert!(inv.selected().is_none_or(|i| i < HOTBAR_SLOTS));
        }
    }

    // A stack of n allows exactly n uses
    #[test]
    fn stack_allows_exactly_its_amount(amount in 1u32..50) {
        let mut snap = Inventory::default().snapshot();
        snap.hotbar[5] = Slot::stack("foundation", amount, true);
        snap.selected = Some(5);
        let mut inv = Inventory::from_snapshot(snap);
        let uses = std::iter::from_fn(|| inv.consume_selected().then_some(())).count();
        prop_assert_eq!(uses as u32, amount);
        prop_assert!(inv.placeable_selection().is_none());
    }
}
