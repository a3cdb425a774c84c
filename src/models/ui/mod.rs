// UI-facing models
// Frame granularity and resize edges as the host reports them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar granularity of the visible window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewFrame {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewFrame::Day => "Day",
            ViewFrame::Week => "Week",
            ViewFrame::Month => "Month",
        }
    }
}

impl fmt::Display for ViewFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ViewFrame::Day),
            "week" => Ok(ViewFrame::Week),
            "month" => Ok(ViewFrame::Month),
            other => Err(format!("Unknown view frame '{}'", other)),
        }
    }
}

/// Which edge of a group is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    /// Top edge - moves the group start
    Top,
    /// Bottom edge - moves the group end
    Bottom,
}

impl ResizeEdge {
    /// Edge implied by dragging from `anchor` to `target`
    pub fn toward(anchor: u8, target: u8) -> Self {
        if target < anchor {
            ResizeEdge::Top
        } else {
            ResizeEdge::Bottom
        }
    }
}
