// Availability module
// Per-personnel open hours; windows may overlap freely

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::color::Color;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    #[serde(default)]
    pub personnel: String,
    pub day: NaiveDate,
    pub start: u8,
    pub end: u8,
    pub color: Color,
}

impl AvailabilityWindow {
    pub fn new(
        personnel: impl Into<String>,
        day: NaiveDate,
        start: u8,
        end: u8,
        color: Color,
    ) -> Self {
        Self {
            personnel: personnel.into(),
            day,
            start,
            end,
            color,
        }
    }

    pub fn covers(&self, day: NaiveDate, hour: u8) -> bool {
        self.day == day && self.start <= hour && hour < self.end
    }
}

/// End-cap styling for an available cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityEdge {
    /// First hour of an open run (also used for single-hour runs)
    Top,
    Middle,
    /// Last hour of an open run
    Bottom,
}
