//! Group ascending slot indices into maximal contiguous runs.
//!
//! A run is a stretch of indices where each element is exactly one more than
//! the previous. `[1, 2, 3, 7, 8, 10]` groups into `[[1, 2, 3], [7, 8], [10]]`.

use crate::error::{Result, SlotError};

/// Group a strictly ascending slice into maximal contiguous runs.
///
/// Concatenating the returned runs in order reproduces `slots`. A new run
/// starts at the first element and wherever an element is not its
/// predecessor + 1.
///
/// # Errors
/// Returns [`SlotError::UnsortedSlots`] if `slots` is not strictly ascending
/// (out of order or containing duplicates).
///
/// # Examples
/// ```
/// use slot_engine::group_contiguous;
///
/// let runs = group_contiguous(&[1, 2, 3, 7, 8, 10]).unwrap();
/// assert_eq!(runs, vec![vec![1, 2, 3], vec![7, 8], vec![10]]);
/// ```
pub fn group_contiguous(slots: &[usize]) -> Result<Vec<Vec<usize>>> {
    check_ascending(slots)?;
    Ok(split_runs(slots))
}

/// Verify `slots` is strictly ascending, reporting the first violation.
pub(crate) fn check_ascending(slots: &[usize]) -> Result<()> {
    match slots.windows(2).position(|w| w[0] >= w[1]) {
        Some(i) => Err(SlotError::UnsortedSlots {
            position: i + 1,
            previous: slots[i],
            value: slots[i + 1],
        }),
        None => Ok(()),
    }
}

/// Run splitting without validation; callers guarantee ascending input.
pub(crate) fn split_runs(slots: &[usize]) -> Vec<Vec<usize>> {
    let mut runs: Vec<Vec<usize>> = Vec::new();
    for &slot in slots {
        if let Some(last) = runs.last_mut() {
            if last.last().is_some_and(|&prev| prev + 1 == slot) {
                last.push(slot);
                continue;
            }
        }
        runs.push(vec![slot]);
    }
    runs
}
