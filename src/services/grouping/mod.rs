//! Grouping engine.
//!
//! Turns the flat slot collection into appointment blocks ("groups") on
//! demand and applies group-level edits: assign, expand/shrink, delete.
//! Groups are never stored. Every operation takes a store by reference and
//! returns a new one; invalid coordinates yield an unchanged copy.

mod resize;

pub use resize::Expansion;

use chrono::NaiveDate;

use crate::models::group::{EdgeKind, Group};
use crate::models::settings::{ExpandPolicy, Settings};
use crate::models::slot::{ItemRef, Slot, SlotKind, HOURS_PER_DAY};
use crate::services::slot_store::SlotStore;

/// Group lookup over some slot index.
///
/// Callers depend on this rather than on the store layout so the backing
/// structure can change without touching them.
pub trait GroupLookup {
    /// The maximal run of touching same-item slots around `(day, hour)`
    fn find_group(&self, day: NaiveDate, hour: u8) -> Option<Group>;

    /// Every group on `day`, in start order
    fn groups_on(&self, day: NaiveDate) -> Vec<Group>;
}

fn touches(prev: &Slot, next: &Slot) -> bool {
    prev.end == next.start && prev.item.same_item(&next.item)
}

impl GroupLookup for SlotStore {
    fn find_group(&self, day: NaiveDate, hour: u8) -> Option<Group> {
        if hour >= HOURS_PER_DAY {
            return None;
        }
        let slots = self.slots_on(day);
        let idx = slots.partition_point(|slot| slot.start <= hour).checked_sub(1)?;
        if !slots[idx].contains(hour) {
            return None;
        }

        let mut first = idx;
        while first > 0 && touches(&slots[first - 1], &slots[first]) {
            first -= 1;
        }
        let mut last = idx;
        while last + 1 < slots.len() && touches(&slots[last], &slots[last + 1]) {
            last += 1;
        }

        Some(Group {
            day,
            start: slots[first].start,
            end: slots[last].end,
            item: slots[idx].item.clone(),
        })
    }

    fn groups_on(&self, day: NaiveDate) -> Vec<Group> {
        let mut groups: Vec<Group> = Vec::new();
        let mut previous: Option<&Slot> = None;
        for slot in self.slots_on(day) {
            let extends = previous.is_some_and(|prev| touches(prev, slot));
            if extends {
                if let Some(current) = groups.last_mut() {
                    current.end = slot.end;
                }
            } else {
                groups.push(Group {
                    day,
                    start: slot.start,
                    end: slot.end,
                    item: slot.item.clone(),
                });
            }
            previous = Some(slot);
        }
        groups
    }
}

/// Group-level editing over a [`SlotStore`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupingEngine {
    policy: ExpandPolicy,
}

impl GroupingEngine {
    pub fn new(policy: ExpandPolicy) -> Self {
        Self { policy }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.expand_policy)
    }

    pub fn policy(&self) -> ExpandPolicy {
        self.policy
    }

    pub fn find_group(&self, store: &SlotStore, day: NaiveDate, hour: u8) -> Option<Group> {
        store.find_group(day, hour)
    }

    /// Where `(day, hour)` sits in its group, `None` when nothing is scheduled
    pub fn classify_edge(&self, store: &SlotStore, day: NaiveDate, hour: u8) -> Option<EdgeKind> {
        store.find_group(day, hour)?.edge_of(hour)
    }

    /// Schedule `item` for one hour. See [`GroupingEngine::assign_as`].
    pub fn assign(&self, store: &SlotStore, day: NaiveDate, hour: u8, item: &ItemRef) -> SlotStore {
        self.assign_as(store, day, hour, item, SlotKind::Scheduled)
    }

    /// Insert a unit slot for `item` at `(day, hour)`.
    ///
    /// A cell held by another item is left alone. A cell already held by
    /// the same item is overwritten (unit slots) or kept (wider slots).
    /// Neighbouring slots are never merged; grouping is computed on read.
    pub fn assign_as(
        &self,
        store: &SlotStore,
        day: NaiveDate,
        hour: u8,
        item: &ItemRef,
        kind: SlotKind,
    ) -> SlotStore {
        if hour >= HOURS_PER_DAY {
            log::warn!("Ignoring assign of {} at hour {} on {}", item.id, hour, day);
            return store.clone();
        }

        let mut next = store.clone();
        if let Some(existing) = store.query(day, hour) {
            if !existing.item.same_item(item) {
                log::warn!(
                    "Cell {} {:02}:00 already belongs to {}; not assigning {}",
                    day,
                    hour,
                    existing.item.id,
                    item.id
                );
                return next;
            }
            if existing.duration_hours() > 1 {
                return next;
            }
            next.remove_in_place(|slot| slot.day == day && slot.contains(hour));
        }

        next.insert_in_place(Slot::unit(day, hour, item.clone(), kind));
        log::debug!("Assigned {} to {} {:02}:00", item.id, day, hour);
        next
    }

    /// Remove the whole group around `(day, hour)`, or nothing at all
    pub fn delete_group(&self, store: &SlotStore, day: NaiveDate, hour: u8) -> SlotStore {
        let Some(group) = store.find_group(day, hour) else {
            return store.clone();
        };

        let mut next = store.clone();
        let removed = next.remove_in_place(|slot| slot.day == day && slot.within(group.start, group.end));
        log::debug!(
            "Deleted group {} {:02}-{:02} on {} ({} slots)",
            group.item.id,
            group.start,
            group.end,
            day,
            removed
        );
        next
    }
}
