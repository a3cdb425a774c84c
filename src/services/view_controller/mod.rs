//! View controller.
//!
//! Owns the current reference date, frame, slot store and availability
//! windows for one calendar surface, and answers the per-cell questions a
//! renderer asks. User gestures (click, delete, drag/drop) go through here;
//! each completed gesture replaces the store at most once.

use chrono::{Local, NaiveDate};

use crate::models::availability::{AvailabilityEdge, AvailabilityWindow};
use crate::models::color::Color;
use crate::models::group::{EdgeKind, Group};
use crate::models::settings::Settings;
use crate::models::slot::{ItemRef, SlotKind, HOURS_PER_DAY};
use crate::models::ui::{ResizeEdge, ViewFrame};
use crate::services::availability;
use crate::services::date_window::{generate_view_with, step_reference};
use crate::services::grouping::{GroupLookup, GroupingEngine};
use crate::services::interaction::{DragContext, DragIntent, DragManager};
use crate::services::slot_store::SlotStore;

/// What a drop did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropOutcome {
    pub changed: bool,
    /// A resize stopped at another item's slot
    pub boundary_reached: bool,
}

impl DropOutcome {
    fn ignored() -> Self {
        Self::default()
    }
}

pub struct ViewController {
    reference: NaiveDate,
    frame: ViewFrame,
    first_day_of_week: u8,
    engine: GroupingEngine,
    store: SlotStore,
    availability: Vec<AvailabilityWindow>,
    drag: DragManager,
}

impl ViewController {
    pub fn new(reference: NaiveDate, settings: &Settings) -> Self {
        Self {
            reference,
            frame: settings.default_frame,
            first_day_of_week: settings.first_day_of_week,
            engine: GroupingEngine::from_settings(settings),
            store: SlotStore::new(),
            availability: Vec::new(),
            drag: DragManager::new(),
        }
    }

    pub fn with_store(mut self, store: SlotStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_availability(mut self, windows: Vec<AvailabilityWindow>) -> Self {
        self.availability = windows;
        self
    }

    // ── Navigation ─────────────────────────────────────────────────────

    pub fn reference_date(&self) -> NaiveDate {
        self.reference
    }

    pub fn frame(&self) -> ViewFrame {
        self.frame
    }

    pub fn set_frame(&mut self, frame: ViewFrame) {
        if self.frame != frame {
            log::debug!("Switching view frame {} -> {}", self.frame, frame);
            self.frame = frame;
        }
    }

    /// Dates currently on screen
    pub fn view(&self) -> Vec<NaiveDate> {
        generate_view_with(self.reference, self.frame, self.first_day_of_week)
    }

    pub fn next(&mut self) -> Vec<NaiveDate> {
        self.step(1)
    }

    pub fn previous(&mut self) -> Vec<NaiveDate> {
        self.step(-1)
    }

    fn step(&mut self, direction: i32) -> Vec<NaiveDate> {
        self.reference = step_reference(self.reference, self.frame, direction);
        log::debug!("Navigated {} {} to {}", direction, self.frame, self.reference);
        self.view()
    }

    pub fn jump_to(&mut self, date: NaiveDate) -> Vec<NaiveDate> {
        self.reference = date;
        self.view()
    }

    pub fn jump_to_today(&mut self) -> Vec<NaiveDate> {
        self.jump_to(Local::now().date_naive())
    }

    // ── Store access ───────────────────────────────────────────────────

    pub fn store(&self) -> &SlotStore {
        &self.store
    }

    /// Swap in a store restored or edited by the host
    pub fn replace_store(&mut self, store: SlotStore) {
        self.drag.cancel();
        self.store = store;
    }

    pub fn engine(&self) -> &GroupingEngine {
        &self.engine
    }

    pub fn availability(&self) -> &[AvailabilityWindow] {
        &self.availability
    }

    pub fn set_availability(&mut self, windows: Vec<AvailabilityWindow>) {
        self.availability = windows;
    }

    // ── Cell queries ───────────────────────────────────────────────────

    pub fn is_scheduled(&self, day: NaiveDate, hour: u8) -> bool {
        self.store.query(day, hour).is_some()
    }

    pub fn group_at(&self, day: NaiveDate, hour: u8) -> Option<Group> {
        self.store.find_group(day, hour)
    }

    pub fn edge_at(&self, day: NaiveDate, hour: u8) -> Option<EdgeKind> {
        self.engine.classify_edge(&self.store, day, hour)
    }

    /// Every group on the visible dates, in date then start order
    pub fn groups_in_view(&self) -> Vec<Group> {
        self.view()
            .into_iter()
            .flat_map(|day| self.store.groups_on(day))
            .collect()
    }

    pub fn availability_at(&self, day: NaiveDate, hour: u8) -> Option<AvailabilityEdge> {
        availability::is_available(day, hour, &self.availability)
    }

    pub fn color_at(&self, day: NaiveDate, hour: u8) -> Option<Color> {
        availability::color_at(day, hour, &self.availability)
    }

    // ── Gestures ───────────────────────────────────────────────────────

    /// Assign `item` to a cell; returns whether the store changed
    pub fn click(&mut self, day: NaiveDate, hour: u8, item: &ItemRef) -> bool {
        let next = self.engine.assign(&self.store, day, hour, item);
        self.commit(next)
    }

    /// Delete the group under a cell; returns whether the store changed
    pub fn delete(&mut self, day: NaiveDate, hour: u8) -> bool {
        let next = self.engine.delete_group(&self.store, day, hour);
        self.commit(next)
    }

    pub fn begin_move(&mut self, item: ItemRef, kind: SlotKind) {
        self.drag.begin(DragContext::for_item(item, kind));
    }

    /// Pick up an edge of the group under a cell; `false` on an empty cell
    pub fn begin_resize(&mut self, day: NaiveDate, hour: u8, edge: ResizeEdge) -> bool {
        match DragContext::for_resize(&self.store, day, hour, edge) {
            Some(context) => {
                self.drag.begin(context);
                true
            }
            None => false,
        }
    }

    pub fn hover(&mut self, day: NaiveDate, hour: u8) {
        self.drag.update_hover(day, hour);
    }

    pub fn drag_active(&self) -> Option<&DragContext> {
        self.drag.active()
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Finish the pending drag on `(day, hour)`.
    ///
    /// Dropping off the grid (hour out of range, a date not on screen, or a
    /// resize onto another day) ends the drag without touching the store.
    pub fn drop_at(&mut self, day: NaiveDate, hour: u8) -> DropOutcome {
        let Some(context) = self.drag.finish() else {
            return DropOutcome::ignored();
        };
        if hour >= HOURS_PER_DAY || !self.view().contains(&day) {
            log::debug!("Drop outside the grid at {} {:02}:00", day, hour);
            return DropOutcome::ignored();
        }

        match context.intent {
            DragIntent::Move { item, kind } => {
                let next = self.engine.assign_as(&self.store, day, hour, &item, kind);
                DropOutcome {
                    changed: self.commit(next),
                    boundary_reached: false,
                }
            }
            DragIntent::Resize {
                item,
                day: origin,
                anchor,
                edge,
            } => {
                if origin != day {
                    log::debug!("Resize dropped on {} but started on {}", day, origin);
                    return DropOutcome::ignored();
                }
                let expansion = self.engine.resize(&self.store, day, anchor, hour, &item, edge);
                DropOutcome {
                    boundary_reached: expansion.boundary_reached,
                    changed: self.commit(expansion.store),
                }
            }
        }
    }

    /// A pending drag was picked up from the old store, so any change drops it
    fn commit(&mut self, next: SlotStore) -> bool {
        if next == self.store {
            return false;
        }
        if self.drag.is_active() {
            log::debug!("Store changed mid-drag, cancelling the pending drag");
            self.drag.cancel();
        }
        self.store = next;
        true
    }
}
