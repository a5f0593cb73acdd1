//! Render intersection records as availability windows.
//!
//! Each record's shared slots are split into contiguous runs. Runs shorter
//! than the minimum block count are dropped; every remaining run becomes one
//! [`AvailabilityWindow`], whose `Display` form is the report line:
//!
//! ```text
//! Smith and N123 are both available 03/15/24 from blocks 9:30 through 10:00
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::format_date;
use crate::error::{Result, SlotError};
use crate::intersect::IntersectionRecord;

/// One contiguous window in which a CFI and a plane are both free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub day: NaiveDate,
    pub cfi: String,
    pub plane: String,
    /// Label of the first slot in the run.
    pub first_label: String,
    /// Label of the last slot in the run (equal to `first_label` for a
    /// single-slot run).
    pub last_label: String,
    /// Number of slots in the run.
    pub blocks: usize,
}

impl fmt::Display for AvailabilityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} and {} are both available {} from blocks {} through {}",
            self.cfi,
            self.plane,
            format_date(self.day),
            self.first_label,
            self.last_label
        )
    }
}

/// Extract every run of at least `min_blocks` slots from `records`.
///
/// Windows follow record order, then run order within a record.
///
/// # Errors
/// - [`SlotError::InvalidThreshold`] if `min_blocks` is 0.
/// - [`SlotError::LabelOutOfRange`] if a reported run refers to a slot with
///   no label in its record's `blocks`.
pub fn availability_windows(
    records: &[IntersectionRecord<'_>],
    min_blocks: usize,
) -> Result<Vec<AvailabilityWindow>> {
    if min_blocks == 0 {
        return Err(SlotError::InvalidThreshold);
    }

    let mut windows = Vec::new();
    for record in records {
        for run in record.shared_blocks.runs() {
            if run.len() < min_blocks {
                continue;
            }
            // Runs are never empty.
            let (first, last) = (run[0], run[run.len() - 1]);
            windows.push(AvailabilityWindow {
                day: record.day,
                cfi: record.cfi.to_string(),
                plane: record.plane.to_string(),
                first_label: label(record.blocks, first)?.to_string(),
                last_label: label(record.blocks, last)?.to_string(),
                blocks: run.len(),
            });
        }
    }
    Ok(windows)
}

/// Format `records` as human-readable report lines.
///
/// Same filtering and errors as [`availability_windows`].
pub fn format_report(
    records: &[IntersectionRecord<'_>],
    min_blocks: usize,
) -> Result<Vec<String>> {
    Ok(availability_windows(records, min_blocks)?
        .iter()
        .map(ToString::to_string)
        .collect())
}

fn label(blocks: &[String], index: usize) -> Result<&str> {
    blocks
        .get(index)
        .map(String::as_str)
        .ok_or(SlotError::LabelOutOfRange {
            index,
            len: blocks.len(),
        })
}
