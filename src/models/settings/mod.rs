// Settings module
// Engine and view preferences, persisted as TOML

use serde::{Deserialize, Serialize};

use crate::models::ui::ViewFrame;

/// How an expanding group treats slots owned by other items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpandPolicy {
    /// Stop at the first foreign slot in the drag direction
    #[default]
    Clamp,
    /// Remove foreign slots that fall inside the new range
    ClearThenFill,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    pub default_frame: ViewFrame,
    pub expand_policy: ExpandPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            default_frame: ViewFrame::Week,
            expand_policy: ExpandPolicy::Clamp,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "First day of week must be 0-6, got {}",
                self.first_day_of_week
            ));
        }
        Ok(())
    }
}
