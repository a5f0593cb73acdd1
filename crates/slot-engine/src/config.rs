//! Settings for a multi-day availability scan.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::roster::Roster;

/// Configuration for [`crate::scan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Number of days to check, starting the day after the start date.
    pub days: u32,
    /// Start date offset from today, in days (may be negative).
    pub start_offset: i64,
    /// Shortest run of shared slots worth reporting.
    pub min_blocks: usize,
    /// Allow-listed instructor and aircraft names.
    pub roster: Roster,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            days: 7,
            start_offset: 0,
            min_blocks: 2,
            roster: Roster::default(),
        }
    }
}

impl ScanConfig {
    /// # Errors
    /// Returns [`SlotError::InvalidThreshold`] if `min_blocks` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.min_blocks == 0 {
            return Err(SlotError::InvalidThreshold);
        }
        Ok(())
    }
}
