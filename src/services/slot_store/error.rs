use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid slot on {day}: {reason}")]
    InvalidSlot { day: NaiveDate, reason: String },

    #[error("Overlapping slots on {day}: {first_start}-{first_end} and {second_start}-{second_end}")]
    Overlap {
        day: NaiveDate,
        first_start: u8,
        first_end: u8,
        second_start: u8,
        second_end: u8,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
