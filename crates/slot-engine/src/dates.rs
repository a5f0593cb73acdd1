//! Calendar-day arithmetic and report date formatting.

use chrono::{Duration, NaiveDate};

use crate::error::{Result, SlotError};

/// The date `days` calendar days after `date` (before it, if negative).
///
/// Month and year rollover follow the proleptic Gregorian calendar.
///
/// # Errors
/// Returns [`SlotError::DateOutOfRange`] if the result is not representable.
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(SlotError::DateOutOfRange(date, days))
}

/// Render a date as `MM/DD/YY`, zero-padded, with a two-digit year.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%y").to_string()
}
