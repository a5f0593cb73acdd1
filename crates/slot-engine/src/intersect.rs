//! Pairwise shared availability between instructors and aircraft.
//!
//! For every day, every CFI is compared with every plane. Pairs whose free
//! slots overlap produce an [`IntersectionRecord`]; pairs with no overlap
//! produce nothing. Output order is day order, then CFI order, then plane
//! order, exactly as listed in the input.

use chrono::NaiveDate;
use serde::Serialize;

use crate::schedule::DaySchedule;
use crate::slots::TimeSlotSet;

/// Shared free slots of one (CFI, plane) pair on one day.
///
/// Borrows names and time labels from the [`DaySchedule`] it was computed
/// from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntersectionRecord<'a> {
    pub day: NaiveDate,
    /// The day's time labels, indexed by slot.
    pub blocks: &'a [String],
    pub cfi: &'a str,
    pub plane: &'a str,
    /// Never empty.
    pub shared_blocks: TimeSlotSet,
}

/// Compute shared availability for every (CFI, plane) pair across all days.
pub fn intersect(days: &[DaySchedule]) -> Vec<IntersectionRecord<'_>> {
    days.iter().flat_map(intersect_day).collect()
}

/// Compute shared availability for every (CFI, plane) pair on a single day.
///
/// Useful when days arrive one at a time; concatenating per-day results in
/// day order equals [`intersect`] over the whole sequence.
pub fn intersect_day(schedule: &DaySchedule) -> Vec<IntersectionRecord<'_>> {
    let mut records = Vec::new();

    for cfi in &schedule.cfis {
        for plane in &schedule.planes {
            let shared = cfi.available_slots.intersection(&plane.available_slots);
            if shared.is_empty() {
                continue;
            }
            records.push(IntersectionRecord {
                day: schedule.day,
                blocks: &schedule.time_slots,
                cfi: &cfi.name,
                plane: &plane.name,
                shared_blocks: shared,
            });
        }
    }

    records
}
