// Property-based tests for the grouping engine
// Random operation sequences must never break occupancy invariants

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::NaiveDate;
use proptest::prelude::*;
use slot_calendar::models::settings::ExpandPolicy;
use slot_calendar::models::slot::ItemRef;
use slot_calendar::models::ui::ResizeEdge;
use slot_calendar::services::grouping::{GroupLookup, GroupingEngine};
use slot_calendar::services::slot_store::SlotStore;

#[derive(Debug, Clone)]
enum Op {
    Assign { day: u8, hour: u8, item: i64 },
    Expand { day: u8, anchor: u8, target: u8, item: i64 },
    Resize { day: u8, anchor: u8, target: u8, item: i64, edge: ResizeEdge },
    Delete { day: u8, hour: u8 },
}

fn day(offset: u8) -> NaiveDate {
    fixtures::dates::monday() + chrono::Duration::days(offset as i64)
}

fn item(id: i64) -> ItemRef {
    ItemRef::new(id, format!("item {}", id))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..3u8, 0..26u8, 1..4i64).prop_map(|(day, hour, item)| Op::Assign { day, hour, item }),
        (0..3u8, 0..24u8, 0..25u8, 1..4i64)
            .prop_map(|(day, anchor, target, item)| Op::Expand { day, anchor, target, item }),
        (0..3u8, 0..24u8, 0..24u8, 1..4i64, edge_strategy()).prop_map(
            |(day, anchor, target, item, edge)| Op::Resize { day, anchor, target, item, edge }
        ),
        (0..3u8, 0..24u8).prop_map(|(day, hour)| Op::Delete { day, hour }),
    ]
}

fn edge_strategy() -> impl Strategy<Value = ResizeEdge> {
    prop_oneof![Just(ResizeEdge::Top), Just(ResizeEdge::Bottom)]
}

fn apply(engine: &GroupingEngine, store: &SlotStore, op: &Op) -> SlotStore {
    match *op {
        Op::Assign { day: d, hour, item: id } => engine.assign(store, day(d), hour, &item(id)),
        Op::Expand { day: d, anchor, target, item: id } => {
            engine.expand(store, day(d), anchor, target, &item(id)).store
        }
        Op::Resize { day: d, anchor, target, item: id, edge } => {
            engine.resize(store, day(d), anchor, target, &item(id), edge).store
        }
        Op::Delete { day: d, hour } => engine.delete_group(store, day(d), hour),
    }
}

fn policy_strategy() -> impl Strategy<Value = ExpandPolicy> {
    prop_oneof![Just(ExpandPolicy::Clamp), Just(ExpandPolicy::ClearThenFill)]
}

proptest! {
    /// Property: no two slots on a day ever overlap, whatever the edit sequence
    #[test]
    fn prop_exclusive_occupancy_holds(
        policy in policy_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let engine = GroupingEngine::new(policy);
        let mut store = SlotStore::new();
        for op in &ops {
            store = apply(&engine, &store, op);
            prop_assert!(store.check_invariants().is_ok(), "violated after {:?}", op);
            prop_assert!(store.iter().all(|slot| slot.start < slot.end && slot.end <= 24));
        }
    }

    /// Property: under Clamp, dragging an edge never removes another item's slot
    #[test]
    fn prop_clamp_keeps_foreign_slots(
        setup in prop::collection::vec(op_strategy(), 1..30),
        drags in prop::collection::vec(
            (0..3u8, 0..24u8, 0..24u8, 1..4i64, edge_strategy()), 1..10
        ),
    ) {
        let engine = GroupingEngine::new(ExpandPolicy::Clamp);
        let mut store = setup.iter().fold(SlotStore::new(), |acc, op| apply(&engine, &acc, op));

        for (d, anchor, target, id, edge) in drags {
            let owner = item(id);
            let foreign: Vec<_> = store
                .iter()
                .filter(|slot| !slot.item.same_item(&owner))
                .cloned()
                .collect();

            let resized = engine.resize(&store, day(d), anchor, target, &owner, edge);
            prop_assert_eq!(resized.displaced, 0);
            for slot in &foreign {
                prop_assert!(
                    resized.store.iter().any(|kept| kept == slot),
                    "{:?} lost after resize {} -> {} ({:?})", slot, anchor, target, edge
                );
            }

            let expanded = engine.expand(&store, day(d), anchor, target, &owner);
            prop_assert_eq!(expanded.displaced, 0);
            for slot in &foreign {
                prop_assert!(expanded.store.iter().any(|kept| kept == slot));
            }

            store = resized.store;
        }
    }

    /// Property: every hour of a group reports the same group
    #[test]
    fn prop_group_lookup_is_stable(
        ops in prop::collection::vec(op_strategy(), 1..30),
    ) {
        let engine = GroupingEngine::default();
        let store = ops.iter().fold(SlotStore::new(), |acc, op| apply(&engine, &acc, op));

        for offset in 0..3u8 {
            for group in store.groups_on(day(offset)) {
                for hour in group.start..group.end {
                    prop_assert_eq!(store.find_group(day(offset), hour), Some(group.clone()));
                }
            }
        }
    }

    /// Property: deleting a group clears every hour it covered
    #[test]
    fn prop_delete_group_is_atomic(
        ops in prop::collection::vec(op_strategy(), 1..30),
        hour in 0..24u8,
    ) {
        let engine = GroupingEngine::default();
        let store = ops.iter().fold(SlotStore::new(), |acc, op| apply(&engine, &acc, op));

        if let Some(group) = store.find_group(day(0), hour) {
            let after = engine.delete_group(&store, day(0), hour);
            for h in group.start..group.end {
                prop_assert!(after.find_group(day(0), h).is_none());
            }
            prop_assert_eq!(after.len() + store.slots_on(day(0)).iter()
                .filter(|slot| slot.within(group.start, group.end)).count(), store.len());
        } else {
            prop_assert_eq!(engine.delete_group(&store, day(0), hour), store);
        }
    }

    /// Property: touching same-item assigns always form one full-span group
    #[test]
    fn prop_contiguous_assigns_group(start in 0..20u8, len in 1..5u8) {
        let engine = GroupingEngine::default();
        let end = start + len;
        let store = fixtures::assign_hours(&engine, SlotStore::new(), day(0), start..end, &item(1));
        for hour in start..end {
            let group = store.find_group(day(0), hour).unwrap();
            prop_assert_eq!((group.start, group.end), (start, end));
        }
    }
}
