// Drag interaction state
//
// Two-phase drag protocol: pick-up records what is being dragged, drop
// supplies the target cell. Nothing touches the slot store until drop, so
// an abandoned drag needs no rollback.

use chrono::NaiveDate;

use crate::models::slot::{ItemRef, SlotKind};
use crate::models::ui::ResizeEdge;
use crate::services::grouping::GroupLookup;
use crate::services::slot_store::SlotStore;

/// What the pointer picked up
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragIntent {
    /// Place an item (e.g. from a service palette) onto a cell
    Move { item: ItemRef, kind: SlotKind },
    /// Drag one edge of an existing group
    Resize {
        item: ItemRef,
        day: NaiveDate,
        /// Hour on the dragged edge: group start for `Top`, last hour for `Bottom`
        anchor: u8,
        edge: ResizeEdge,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragContext {
    pub intent: DragIntent,
    pub hovered_day: Option<NaiveDate>,
    pub hovered_hour: Option<u8>,
}

impl DragContext {
    pub fn for_item(item: ItemRef, kind: SlotKind) -> Self {
        Self {
            intent: DragIntent::Move { item, kind },
            hovered_day: None,
            hovered_hour: None,
        }
    }

    /// Pick up `edge` of the group at `(day, hour)`; `None` on an empty cell
    pub fn for_resize(store: &SlotStore, day: NaiveDate, hour: u8, edge: ResizeEdge) -> Option<Self> {
        let group = store.find_group(day, hour)?;
        let anchor = match edge {
            ResizeEdge::Top => group.start,
            ResizeEdge::Bottom => group.last_hour(),
        };
        Some(Self {
            intent: DragIntent::Resize {
                item: group.item,
                day,
                anchor,
                edge,
            },
            hovered_day: Some(day),
            hovered_hour: Some(anchor),
        })
    }

    pub fn item(&self) -> &ItemRef {
        match &self.intent {
            DragIntent::Move { item, .. } | DragIntent::Resize { item, .. } => item,
        }
    }

    pub fn is_resize(&self) -> bool {
        matches!(self.intent, DragIntent::Resize { .. })
    }
}

/// Holds at most one in-flight drag
#[derive(Debug, Default)]
pub struct DragManager {
    active: Option<DragContext>,
}

impl DragManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag, replacing any drag that was never dropped
    pub fn begin(&mut self, context: DragContext) {
        if self.active.is_some() {
            log::debug!("Replacing abandoned drag");
        }
        self.active = Some(context);
    }

    pub fn active(&self) -> Option<&DragContext> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn update_hover(&mut self, day: NaiveDate, hour: u8) {
        if let Some(state) = self.active.as_mut() {
            state.hovered_day = Some(day);
            state.hovered_hour = Some(hour);
        }
    }

    /// End the drag and hand back its context
    pub fn finish(&mut self) -> Option<DragContext> {
        self.active.take()
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }
}
