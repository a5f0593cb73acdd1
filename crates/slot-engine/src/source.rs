//! Schedule acquisition and the multi-day scan.
//!
//! A [`ScheduleSource`] turns a calendar date into a [`DaySchedule`]. A live
//! scraper of the scheduling site would implement it; [`GridFileSource`]
//! answers from a JSON dump of previously captured grids. [`scan`] drives a
//! source across the configured date range and runs the intersection and
//! report stages over what it returns.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::ScanConfig;
use crate::dates::{add_days, format_date};
use crate::error::{Result, SlotError};
use crate::intersect::intersect_day;
use crate::report::{availability_windows, AvailabilityWindow};
use crate::roster::{DayGrid, Roster};
use crate::schedule::DaySchedule;

/// Produces one day's schedule on request.
pub trait ScheduleSource {
    /// Fetch the classified schedule for `date`.
    fn fetch_day(&mut self, date: NaiveDate) -> Result<DaySchedule>;
}

/// A [`ScheduleSource`] backed by captured grids, classified with a [`Roster`].
#[derive(Debug, Clone)]
pub struct GridFileSource {
    grids: BTreeMap<NaiveDate, DayGrid>,
    roster: Roster,
}

impl GridFileSource {
    /// # Errors
    /// Returns [`SlotError::Grid`] if two grids share a date.
    pub fn new(grids: Vec<DayGrid>, roster: Roster) -> Result<Self> {
        let mut by_date = BTreeMap::new();
        for grid in grids {
            let date = grid.date;
            if by_date.insert(date, grid).is_some() {
                return Err(SlotError::Grid(format!("duplicate grid for {}", date)));
            }
        }
        Ok(Self {
            grids: by_date,
            roster,
        })
    }

    /// Parse a JSON array of [`DayGrid`]s.
    pub fn from_json(json: &str, roster: Roster) -> Result<Self> {
        let grids: Vec<DayGrid> = serde_json::from_str(json)?;
        Self::new(grids, roster)
    }
}

impl ScheduleSource for GridFileSource {
    fn fetch_day(&mut self, date: NaiveDate) -> Result<DaySchedule> {
        let grid = self.grids.get(&date).ok_or(SlotError::DayNotFound(date))?;
        self.roster.build_day(grid)
    }
}

/// The dates a scan visits.
///
/// The start date is `today + start_offset`; the scan covers the `days`
/// dates after it, not the start date itself.
pub fn scan_dates(today: NaiveDate, config: &ScanConfig) -> Result<Vec<NaiveDate>> {
    let start = add_days(today, config.start_offset)?;
    (1..=i64::from(config.days))
        .map(|i| add_days(start, i))
        .collect()
}

/// Everything a scan produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    /// Schedules in the order they were fetched.
    pub schedules: Vec<DaySchedule>,
    /// Reportable windows across all scanned days.
    pub windows: Vec<AvailabilityWindow>,
}

impl ScanOutcome {
    /// The windows as report lines.
    pub fn lines(&self) -> Vec<String> {
        self.windows.iter().map(ToString::to_string).collect()
    }
}

/// Fetch every date in the configured range from `source`, then compute and
/// filter shared availability.
///
/// Days are fetched sequentially. The first fetch error aborts the scan.
pub fn scan<S: ScheduleSource + ?Sized>(
    source: &mut S,
    today: NaiveDate,
    config: &ScanConfig,
) -> Result<ScanOutcome> {
    config.validate()?;

    let mut schedules = Vec::new();
    for date in scan_dates(today, config)? {
        tracing::info!(date = %format_date(date), "fetching schedule");
        let schedule = source.fetch_day(date)?;
        tracing::debug!(
            cfis = schedule.cfis.len(),
            planes = schedule.planes.len(),
            slots = schedule.time_slots.len(),
            "schedule loaded"
        );
        schedules.push(schedule);
    }

    let mut windows = Vec::new();
    for schedule in &schedules {
        let records = intersect_day(schedule);
        windows.extend(availability_windows(&records, config.min_blocks)?);
    }
    tracing::info!(
        days = schedules.len(),
        windows = windows.len(),
        "scan complete"
    );

    Ok(ScanOutcome { schedules, windows })
}
