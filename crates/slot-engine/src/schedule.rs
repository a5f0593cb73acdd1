//! One day's parsed schedule: named instructors, named aircraft, and the
//! ordered time labels their slot indices refer to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::slots::TimeSlotSet;

/// A named resource and the slots at which it is free on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAvailability {
    pub name: String,
    pub available_slots: TimeSlotSet,
}

impl EntityAvailability {
    pub fn new(name: impl Into<String>, available_slots: TimeSlotSet) -> Self {
        Self {
            name: name.into(),
            available_slots,
        }
    }
}

/// A single day's schedule, as handed over by a schedule source.
///
/// `cfis` and `planes` keep the order in which the source listed them; the
/// intersection engine relies on that order for its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: NaiveDate,
    #[serde(default)]
    pub cfis: Vec<EntityAvailability>,
    #[serde(default)]
    pub planes: Vec<EntityAvailability>,
    /// Human-readable label for each slot index ("8:00", "8:30", ...).
    pub time_slots: Vec<String>,
}
