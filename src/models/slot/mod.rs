// Slot module
// Hour-granularity unit of occupancy owned by a single item

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hour cells in a day column
pub const HOURS_PER_DAY: u8 = 24;

/// Stable key identifying a bookable service or booking record.
///
/// Grouping compares items by this key only, so two refs with the same id
/// belong to the same appointment block even if their labels differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque item handed in by the host (a service, a booking, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: ItemId,
    #[serde(default)]
    pub label: String,
}

impl ItemRef {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            label: label.into(),
        }
    }

    /// Key equality, the only comparison grouping relies on
    pub fn same_item(&self, other: &ItemRef) -> bool {
        self.id == other.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlotKind {
    #[default]
    Scheduled,
    Booked,
}

/// A run of hours `[start, end)` on one day, owned by `item`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub day: NaiveDate,
    pub start: u8,
    pub end: u8,
    pub item: ItemRef,
    #[serde(default)]
    pub kind: SlotKind,
}

impl Slot {
    /// Create a one-hour slot covering `hour`
    ///
    /// # Examples
    /// ```
    /// use slot_calendar::models::slot::{ItemRef, Slot, SlotKind};
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 10, 7).unwrap();
    /// let slot = Slot::unit(day, 9, ItemRef::new(1, "Haircut"), SlotKind::Scheduled);
    /// assert_eq!((slot.start, slot.end), (9, 10));
    /// ```
    pub fn unit(day: NaiveDate, hour: u8, item: ItemRef, kind: SlotKind) -> Self {
        Self {
            day,
            start: hour,
            end: hour.saturating_add(1),
            item,
            kind,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.end <= self.start {
            return Err(format!(
                "Slot end ({}) must be after start ({})",
                self.end, self.start
            ));
        }
        if self.end > HOURS_PER_DAY {
            return Err(format!("Slot end ({}) is past the end of the day", self.end));
        }
        Ok(())
    }

    pub fn contains(&self, hour: u8) -> bool {
        self.start <= hour && hour < self.end
    }

    /// True if the half-open ranges share at least one hour
    pub fn overlaps(&self, start: u8, end: u8) -> bool {
        self.start < end && start < self.end
    }

    /// True if the whole slot sits inside `[start, end)`
    pub fn within(&self, start: u8, end: u8) -> bool {
        start <= self.start && self.end <= end
    }

    pub fn hours(&self) -> std::ops::Range<u8> {
        self.start..self.end
    }

    pub fn duration_hours(&self) -> u8 {
        self.end - self.start
    }
}
