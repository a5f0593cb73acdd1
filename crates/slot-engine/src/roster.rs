//! Turn raw daily schedule grids into classified [`DaySchedule`]s.
//!
//! A grid is what a scraper of the scheduling site sees: a header row of time
//! labels, then one row per resource whose first column is the resource name
//! and whose remaining cells each span one or more time columns. A cell
//! marked `free` means the resource is open for booking at the column where
//! that cell starts.
//!
//! Which rows are instructors and which are aircraft is decided by a
//! [`Roster`] of allow-listed names. Rows matching neither list are skipped.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::schedule::{DaySchedule, EntityAvailability};
use crate::slots::TimeSlotSet;

/// One cell of a resource row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Number of time columns the cell covers (HTML `colspan`).
    #[serde(default = "default_span")]
    pub span: usize,
    /// Whether the resource is bookable in this cell.
    #[serde(default)]
    pub free: bool,
}

fn default_span() -> usize {
    1
}

/// A resource row: its displayed name and its cells after the name column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub name: String,
    #[serde(default)]
    pub cells: Vec<GridCell>,
}

impl GridRow {
    /// Slot indices at which this row has a free cell.
    ///
    /// A column cursor starts at 0; each free cell contributes the cursor's
    /// current value, then the cursor advances by the cell's span.
    ///
    /// # Errors
    /// Returns [`SlotError::Grid`] if a cell has a span of 0, or if the spans
    /// add up past `usize::MAX`.
    pub fn available_slots(&self) -> Result<TimeSlotSet> {
        let mut slots = Vec::new();
        let mut column = 0usize;
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.span == 0 {
                return Err(SlotError::Grid(format!(
                    "row '{}' cell {} has zero span",
                    self.name, i
                )));
            }
            if cell.free {
                slots.push(column);
            }
            column = column.checked_add(cell.span).ok_or_else(|| {
                SlotError::Grid(format!(
                    "row '{}' cell {} overflows the column cursor",
                    self.name, i
                ))
            })?;
        }
        // The cursor only moves forward, so the indices are strictly ascending.
        TimeSlotSet::new(slots)
    }
}

/// A full day's grid as captured from the scheduling site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGrid {
    pub date: NaiveDate,
    pub time_slots: Vec<String>,
    #[serde(default)]
    pub rows: Vec<GridRow>,
}

/// Which allow-list a resource name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Cfi,
    Plane,
}

/// Allow-lists of instructor and aircraft names, already normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub cfis: Vec<String>,
    pub planes: Vec<String>,
}

impl Roster {
    /// Parse a `|`-separated name list, e.g. `"Jane Smith|Bob Jones"`.
    ///
    /// Names are normalized and empty entries dropped.
    pub fn parse_list(raw: &str) -> Vec<String> {
        raw.split('|')
            .map(normalize_name)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Classify a normalized name. Instructors take precedence when a name
    /// appears in both lists.
    pub fn classify(&self, name: &str) -> Option<Category> {
        if self.cfis.iter().any(|n| n == name) {
            Some(Category::Cfi)
        } else if self.planes.iter().any(|n| n == name) {
            Some(Category::Plane)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cfis.is_empty() && self.planes.is_empty()
    }

    /// Build a [`DaySchedule`] from a raw grid.
    ///
    /// Rows keep their grid order within each category. Unknown names are
    /// skipped, and a name repeated within the grid keeps its first row.
    ///
    /// # Errors
    /// Returns [`SlotError::Grid`] if a row has a zero-span cell or a free
    /// cell beyond the day's last time label.
    pub fn build_day(&self, grid: &DayGrid) -> Result<DaySchedule> {
        let mut cfis = Vec::new();
        let mut planes = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for row in &grid.rows {
            let name = normalize_name(&row.name);
            let Some(category) = self.classify(&name) else {
                tracing::debug!(date = %grid.date, name = %name, "skipping unknown entity");
                continue;
            };
            if !seen.insert(name.clone()) {
                tracing::debug!(date = %grid.date, name = %name, "skipping duplicate row");
                continue;
            }

            let slots = row.available_slots()?;
            if let Some(max) = slots.max() {
                if max >= grid.time_slots.len() {
                    return Err(SlotError::Grid(format!(
                        "row '{}' is free at column {} but the day has {} time labels",
                        name,
                        max,
                        grid.time_slots.len()
                    )));
                }
            }

            let entity = EntityAvailability::new(name, slots);
            match category {
                Category::Cfi => cfis.push(entity),
                Category::Plane => planes.push(entity),
            }
        }

        Ok(DaySchedule {
            day: grid.date,
            cfis,
            planes,
            time_slots: grid.time_slots.iter().map(|t| t.trim().to_string()).collect(),
        })
    }
}

/// Trim a displayed name and replace every remaining whitespace character
/// (tabs, non-breaking spaces) with a plain space.
pub fn normalize_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}
