//! Slot store.
//!
//! Holds the unit slots of a calendar, indexed per day and sorted by start
//! hour. Public operations never mutate `self`: each returns a new store,
//! so a host can keep the previous value around for undo or diffing.
//!
//! The store does not enforce grouping or occupancy rules on `insert`; the
//! grouping engine only calls it with non-conflicting slots. Restoring from
//! JSON goes through [`SlotStore::from_json`], which does validate.

mod error;

pub use error::{Result, StoreError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::slot::{Slot, HOURS_PER_DAY};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Slot>", into = "Vec<Slot>")]
pub struct SlotStore {
    days: BTreeMap<NaiveDate, Vec<Slot>>,
}

impl SlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a store with `slot` added. Slots with an empty or
    /// out-of-day range are ignored.
    pub fn insert(&self, slot: Slot) -> SlotStore {
        let mut next = self.clone();
        next.insert_in_place(slot);
        next
    }

    /// Returns a store without the slots matching `predicate`
    pub fn remove_where<F>(&self, predicate: F) -> SlotStore
    where
        F: Fn(&Slot) -> bool,
    {
        let mut next = self.clone();
        next.remove_in_place(predicate);
        next
    }

    /// The slot whose range contains `hour` on `day`
    pub fn query(&self, day: NaiveDate, hour: u8) -> Option<&Slot> {
        if hour >= HOURS_PER_DAY {
            return None;
        }
        let slots = self.days.get(&day)?;
        let idx = slots.partition_point(|slot| slot.start <= hour);
        slots[..idx].last().filter(|slot| slot.contains(hour))
    }

    /// Slots on `day`, sorted by start hour
    pub fn slots_on(&self, day: NaiveDate) -> &[Slot] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days holding at least one slot, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.days.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Serialize as a flat list of slot records
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a store previously written by [`SlotStore::to_json`].
    ///
    /// Every record must have a valid range and no two slots on a day may
    /// overlap.
    pub fn from_json(json: &str) -> Result<SlotStore> {
        let slots: Vec<Slot> = serde_json::from_str(json)?;
        for slot in &slots {
            slot.validate().map_err(|reason| StoreError::InvalidSlot {
                day: slot.day,
                reason,
            })?;
        }
        let store = SlotStore::from(slots);
        store.check_invariants()?;
        log::debug!("Restored {} slots across {} days", store.len(), store.days.len());
        Ok(store)
    }

    /// Verify that no two slots on the same day overlap
    pub fn check_invariants(&self) -> Result<()> {
        for (day, slots) in &self.days {
            for pair in slots.windows(2) {
                let (first, second) = (&pair[0], &pair[1]);
                if first.end > second.start {
                    return Err(StoreError::Overlap {
                        day: *day,
                        first_start: first.start,
                        first_end: first.end,
                        second_start: second.start,
                        second_end: second.end,
                    });
                }
            }
        }
        Ok(())
    }

    pub(crate) fn insert_in_place(&mut self, slot: Slot) {
        if let Err(reason) = slot.validate() {
            log::warn!("Ignoring slot on {}: {}", slot.day, reason);
            return;
        }
        let slots = self.days.entry(slot.day).or_default();
        let idx = slots.partition_point(|existing| existing.start <= slot.start);
        slots.insert(idx, slot);
    }

    pub(crate) fn remove_in_place<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&Slot) -> bool,
    {
        let mut removed = 0;
        self.days.retain(|_, slots| {
            let before = slots.len();
            slots.retain(|slot| !predicate(slot));
            removed += before - slots.len();
            !slots.is_empty()
        });
        removed
    }
}

impl From<Vec<Slot>> for SlotStore {
    fn from(slots: Vec<Slot>) -> Self {
        let mut store = SlotStore::new();
        for slot in slots {
            store.insert_in_place(slot);
        }
        store
    }
}

impl From<SlotStore> for Vec<Slot> {
    fn from(store: SlotStore) -> Self {
        store.days.into_values().flatten().collect()
    }
}
