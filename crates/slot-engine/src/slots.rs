//! Sorted, duplicate-free sets of time-slot indices.
//!
//! A slot index identifies one fixed-width column of a day's schedule grid.
//! [`TimeSlotSet`] holds the indices at which a resource is free and keeps
//! them strictly ascending, so intersection and run detection never have to
//! re-sort.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::runs;

/// A strictly ascending set of slot indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct TimeSlotSet(Vec<usize>);

impl TimeSlotSet {
    /// Build a set from indices that are already strictly ascending.
    ///
    /// # Errors
    /// Returns [`SlotError::UnsortedSlots`] on the first out-of-order or
    /// duplicated index.
    pub fn new(slots: Vec<usize>) -> Result<Self> {
        runs::check_ascending(&slots)?;
        Ok(Self(slots))
    }

    /// Build a set from indices in any order, sorting and deduplicating.
    pub fn from_unsorted(mut slots: Vec<usize>) -> Self {
        slots.sort_unstable();
        slots.dedup();
        Self(slots)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, slot: usize) -> bool {
        self.0.binary_search(&slot).is_ok()
    }

    /// Largest index in the set, if any.
    pub fn max(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Indices present in both sets, in ascending order.
    ///
    /// Linear merge over the two sorted vectors.
    pub fn intersection(&self, other: &TimeSlotSet) -> TimeSlotSet {
        let (a, b) = (&self.0, &other.0);
        let mut shared = Vec::with_capacity(a.len().min(b.len()));
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    shared.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        TimeSlotSet(shared)
    }

    /// Maximal contiguous runs of this set. See [`crate::group_contiguous`].
    pub fn runs(&self) -> Vec<Vec<usize>> {
        runs::split_runs(&self.0)
    }
}

impl TryFrom<Vec<usize>> for TimeSlotSet {
    type Error = SlotError;

    fn try_from(slots: Vec<usize>) -> Result<Self> {
        Self::new(slots)
    }
}

impl From<TimeSlotSet> for Vec<usize> {
    fn from(set: TimeSlotSet) -> Self {
        set.0
    }
}
