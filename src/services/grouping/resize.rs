// Group resizing
//
// Expands or shrinks a group by dragging one of its edges.
// - Top edge: moves the group start, bottom stays fixed
// - Bottom edge: moves the group end, top stays fixed
// Hours already owned by another item are handled per `ExpandPolicy`.

use chrono::NaiveDate;

use super::{GroupLookup, GroupingEngine};
use crate::models::group::Group;
use crate::models::settings::ExpandPolicy;
use crate::models::slot::{ItemRef, Slot, SlotKind, HOURS_PER_DAY};
use crate::models::ui::ResizeEdge;
use crate::services::slot_store::SlotStore;

/// Result of an expand or resize gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub store: SlotStore,
    /// Range `[start, end)` now filled by the item, `None` if nothing was applied
    pub range: Option<(u8, u8)>,
    /// The drag ran into a slot owned by another item and stopped short of it
    pub boundary_reached: bool,
    /// Foreign slots removed or trimmed to make room
    pub displaced: usize,
}

impl Expansion {
    fn unchanged(store: &SlotStore, boundary_reached: bool) -> Self {
        Self {
            store: store.clone(),
            range: None,
            boundary_reached,
            displaced: 0,
        }
    }

    pub fn changed_from(&self, before: &SlotStore) -> bool {
        &self.store != before
    }
}

impl GroupingEngine {
    /// Drag the edge of the group at `anchor` to `target`.
    ///
    /// The edge is inferred from where `anchor` sits: the group's first hour
    /// moves the top, its last hour moves the bottom. From a middle hour, or
    /// with no group at `anchor`, the range `[min, max + 1)` is filled.
    pub fn expand(
        &self,
        store: &SlotStore,
        day: NaiveDate,
        anchor: u8,
        target: u8,
        item: &ItemRef,
    ) -> Expansion {
        let group = own_group(store, day, anchor, item);
        let edge = match &group {
            Some(g) if g.len_hours() > 1 && anchor == g.start => ResizeEdge::Top,
            Some(g) if g.len_hours() > 1 && anchor == g.last_hour() => ResizeEdge::Bottom,
            Some(g) if g.len_hours() > 1 && g.contains(target) => {
                return Expansion::unchanged(store, false);
            }
            _ => ResizeEdge::toward(anchor, target),
        };
        self.resize(store, day, anchor, target, item, edge)
    }

    /// Move `edge` of the group at `anchor` so it lands on `target`.
    ///
    /// The group never extends past the drag target: dragging an edge back
    /// inside the group shrinks it, down to a single hour.
    pub fn resize(
        &self,
        store: &SlotStore,
        day: NaiveDate,
        anchor: u8,
        target: u8,
        item: &ItemRef,
        edge: ResizeEdge,
    ) -> Expansion {
        if anchor >= HOURS_PER_DAY || target >= HOURS_PER_DAY {
            log::warn!("Ignoring resize {} -> {} on {}: hour out of range", anchor, target, day);
            return Expansion::unchanged(store, false);
        }

        let group = own_group(store, day, anchor, item);
        let kind = match &group {
            Some(_) => store.query(day, anchor).map(|slot| slot.kind).unwrap_or_default(),
            None => SlotKind::Scheduled,
        };

        // `kept` is the part that stays put while the edge moves. Without a
        // group the fill grows away from `anchor`, whatever edge was named.
        let (mut start, mut end, kept, growth) = match &group {
            Some(g) => match edge {
                ResizeEdge::Bottom => (g.start, target.max(g.start) + 1, (g.start, g.end), edge),
                ResizeEdge::Top => (target.min(g.last_hour()), g.end, (g.start, g.end), edge),
            },
            None => {
                let growth = ResizeEdge::toward(anchor, target);
                let kept = match growth {
                    ResizeEdge::Bottom => (anchor, anchor),
                    ResizeEdge::Top => (anchor + 1, anchor + 1),
                };
                (anchor.min(target), anchor.max(target) + 1, kept, growth)
            }
        };

        let mut boundary_reached = false;
        if self.policy() == ExpandPolicy::Clamp {
            let foreign = |hour: u8| {
                store
                    .query(day, hour)
                    .is_some_and(|slot| !slot.item.same_item(item))
            };
            match growth {
                ResizeEdge::Bottom => {
                    if let Some(hour) = (kept.1.max(start)..end).find(|&h| foreign(h)) {
                        end = hour;
                        boundary_reached = true;
                    }
                }
                ResizeEdge::Top => {
                    if let Some(hour) = (start..kept.0.min(end)).rev().find(|&h| foreign(h)) {
                        start = hour + 1;
                        boundary_reached = true;
                    }
                }
            }
            if boundary_reached {
                log::warn!(
                    "Resize of {} on {} stopped at a foreign slot ({:02}-{:02})",
                    item.id,
                    day,
                    start,
                    end
                );
            }
        }

        if start >= end {
            return Expansion::unchanged(store, boundary_reached);
        }

        // Everything the gesture touches: the new range plus the old group
        let region = match &group {
            Some(g) => (start.min(g.start), end.max(g.end)),
            None => (start, end),
        };

        let mut next = store.clone();
        let touched: Vec<Slot> = store
            .slots_on(day)
            .iter()
            .filter(|slot| slot.overlaps(region.0, region.1))
            .cloned()
            .collect();
        let displaced = touched
            .iter()
            .filter(|slot| !slot.item.same_item(item))
            .count();

        next.remove_in_place(|slot| slot.day == day && slot.overlaps(region.0, region.1));
        for slot in &touched {
            for remainder in trim_outside(slot, region) {
                next.insert_in_place(remainder);
            }
        }
        for hour in start..end {
            next.insert_in_place(Slot::unit(day, hour, item.clone(), kind));
        }

        log::debug!(
            "Resized {} on {} to {:02}-{:02} ({:?} edge, {} displaced)",
            item.id,
            day,
            start,
            end,
            edge,
            displaced
        );

        Expansion {
            store: next,
            range: Some((start, end)),
            boundary_reached,
            displaced,
        }
    }
}

fn own_group(store: &SlotStore, day: NaiveDate, hour: u8, item: &ItemRef) -> Option<Group> {
    store
        .find_group(day, hour)
        .filter(|group| group.item.same_item(item))
}

/// Parts of `slot` lying outside `[region.0, region.1)`
fn trim_outside(slot: &Slot, region: (u8, u8)) -> Vec<Slot> {
    let mut parts = Vec::new();
    if slot.start < region.0 {
        parts.push(Slot {
            end: region.0,
            ..slot.clone()
        });
    }
    if slot.end > region.1 {
        parts.push(Slot {
            start: region.1,
            ..slot.clone()
        });
    }
    parts
}
