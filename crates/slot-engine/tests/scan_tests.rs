//! Tests for the multi-day scan driver and schedule sources.

use std::collections::HashMap;

use chrono::NaiveDate;
use slot_engine::{
    scan, scan_dates, DaySchedule, EntityAvailability, GridFileSource, Roster, ScanConfig,
    ScheduleSource, SlotError, TimeSlotSet,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn config(days: u32, start_offset: i64, min_blocks: usize) -> ScanConfig {
    ScanConfig {
        days,
        start_offset,
        min_blocks,
        ..ScanConfig::default()
    }
}

/// An in-memory source that records which dates were requested.
struct FixedSource {
    days: HashMap<NaiveDate, DaySchedule>,
    requested: Vec<NaiveDate>,
}

impl ScheduleSource for FixedSource {
    fn fetch_day(&mut self, date: NaiveDate) -> slot_engine::error::Result<DaySchedule> {
        self.requested.push(date);
        self.days
            .get(&date)
            .cloned()
            .ok_or(SlotError::DayNotFound(date))
    }
}

fn simple_day(on: NaiveDate, cfi_slots: &[usize], plane_slots: &[usize]) -> DaySchedule {
    DaySchedule {
        day: on,
        cfis: vec![EntityAvailability::new(
            "Smith",
            TimeSlotSet::new(cfi_slots.to_vec()).unwrap(),
        )],
        planes: vec![EntityAvailability::new(
            "N123",
            TimeSlotSet::new(plane_slots.to_vec()).unwrap(),
        )],
        time_slots: vec!["8:00", "8:30", "9:00", "9:30", "10:00"]
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

// ── Date range ──────────────────────────────────────────────────────────────

#[test]
fn scan_dates_skip_the_start_date() {
    let dates = scan_dates(date(2025, 1, 30), &config(3, 1, 2)).unwrap();
    assert_eq!(dates, vec![date(2025, 2, 1), date(2025, 2, 2), date(2025, 2, 3)]);
}

#[test]
fn scan_dates_with_negative_offset() {
    let dates = scan_dates(date(2025, 3, 1), &config(2, -2, 2)).unwrap();
    assert_eq!(dates, vec![date(2025, 2, 28), date(2025, 3, 1)]);
}

#[test]
fn zero_days_scans_nothing() {
    assert!(scan_dates(date(2025, 3, 1), &config(0, 0, 2)).unwrap().is_empty());
}

#[test]
fn default_config_values() {
    let c = ScanConfig::default();
    assert_eq!(c.days, 7);
    assert_eq!(c.start_offset, 0);
    assert_eq!(c.min_blocks, 2);
    assert!(c.roster.is_empty());
    assert!(c.validate().is_ok());
}

// ── Scan ────────────────────────────────────────────────────────────────────

#[test]
fn scan_fetches_in_order_and_reports_windows() {
    let d1 = date(2024, 3, 15);
    let d2 = date(2024, 3, 16);
    let mut source = FixedSource {
        days: HashMap::from([
            (d1, simple_day(d1, &[1, 2, 3], &[2, 3, 4])),
            (d2, simple_day(d2, &[0], &[0])),
        ]),
        requested: vec![],
    };

    let outcome = scan(&mut source, date(2024, 3, 14), &config(2, 0, 2)).unwrap();

    assert_eq!(source.requested, vec![d1, d2]);
    assert_eq!(outcome.schedules.len(), 2);
    assert_eq!(
        outcome.lines(),
        vec!["Smith and N123 are both available 03/15/24 from blocks 9:00 through 9:30"]
    );
}

#[test]
fn scan_rejects_zero_threshold_before_fetching() {
    let mut source = FixedSource {
        days: HashMap::new(),
        requested: vec![],
    };

    let err = scan(&mut source, date(2024, 3, 14), &config(2, 0, 0)).unwrap_err();

    assert!(matches!(err, SlotError::InvalidThreshold));
    assert!(source.requested.is_empty());
}

#[test]
fn scan_stops_at_missing_day() {
    let d1 = date(2024, 3, 15);
    let mut source = FixedSource {
        days: HashMap::from([(d1, simple_day(d1, &[1], &[1]))]),
        requested: vec![],
    };

    let err = scan(&mut source, date(2024, 3, 14), &config(3, 0, 1)).unwrap_err();

    assert!(matches!(err, SlotError::DayNotFound(d) if d == date(2024, 3, 16)));
    assert_eq!(source.requested.len(), 2);
}

// ── Grid file source ────────────────────────────────────────────────────────

const GRIDS: &str = r#"[
  {
    "date": "2024-03-15",
    "time_slots": ["8:00", "8:30", "9:00", "9:30", "10:00", "10:30"],
    "rows": [
      {"name": "Jane Smith", "cells": [{"span": 2}, {"free": true}, {"free": true}, {"free": true}]},
      {"name": "Unknown Renter", "cells": [{"span": 6, "free": true}]},
      {"name": "N123AB", "cells": [{"span": 3}, {"free": true}, {"free": true}, {"free": true}]}
    ]
  }
]"#;

fn roster() -> Roster {
    Roster {
        cfis: Roster::parse_list("Jane Smith"),
        planes: Roster::parse_list("N123AB"),
    }
}

#[test]
fn grid_source_classifies_rows() {
    let mut source = GridFileSource::from_json(GRIDS, roster()).unwrap();

    let day = source.fetch_day(date(2024, 3, 15)).unwrap();

    assert_eq!(day.cfis.len(), 1);
    assert_eq!(day.cfis[0].available_slots.as_slice(), &[2, 3, 4]);
    assert_eq!(day.planes.len(), 1);
    assert_eq!(day.planes[0].available_slots.as_slice(), &[3, 4, 5]);
}

#[test]
fn grid_source_end_to_end_scan() {
    let mut source = GridFileSource::from_json(GRIDS, roster()).unwrap();

    let outcome = scan(&mut source, date(2024, 3, 14), &config(1, 0, 2)).unwrap();

    assert_eq!(
        outcome.lines(),
        vec!["Jane Smith and N123AB are both available 03/15/24 from blocks 9:30 through 10:00"]
    );
}

#[test]
fn grid_source_missing_date() {
    let mut source = GridFileSource::from_json(GRIDS, roster()).unwrap();
    let err = source.fetch_day(date(2024, 3, 16)).unwrap_err();
    assert!(matches!(err, SlotError::DayNotFound(_)));
}

#[test]
fn grid_source_rejects_duplicate_dates() {
    let json = r#"[
      {"date": "2024-03-15", "time_slots": ["8:00"]},
      {"date": "2024-03-15", "time_slots": ["8:00"]}
    ]"#;
    let err = GridFileSource::from_json(json, roster()).unwrap_err();
    assert!(matches!(err, SlotError::Grid(_)));
}

#[test]
fn grid_source_invalid_json() {
    let err = GridFileSource::from_json("not json", roster()).unwrap_err();
    assert!(matches!(err, SlotError::Json(_)));
}
