//! Error types for slot-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// A slot sequence was not strictly ascending (unsorted or duplicated).
    #[error("Slots must be strictly ascending: {value} at position {position} follows {previous}")]
    UnsortedSlots {
        position: usize,
        previous: usize,
        value: usize,
    },

    /// A slot index has no corresponding time label for its day.
    #[error("Slot index {index} has no time label (day has {len} labels)")]
    LabelOutOfRange { index: usize, len: usize },

    #[error("Minimum block threshold must be at least 1")]
    InvalidThreshold,

    /// Date arithmetic left the representable calendar range.
    #[error("Date out of range: {0} {1:+} days")]
    DateOutOfRange(NaiveDate, i64),

    /// A raw schedule grid could not be turned into slot sets.
    #[error("Invalid schedule grid: {0}")]
    Grid(String),

    #[error("No schedule available for {0}")]
    DayNotFound(NaiveDate),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
