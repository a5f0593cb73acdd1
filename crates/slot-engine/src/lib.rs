//! # slot-engine
//!
//! Shared-availability search for flight-school schedules.
//!
//! Given one [`DaySchedule`] per calendar day (named instructors and aircraft,
//! each with the time slots at which they are free), the engine finds every
//! (instructor, aircraft) pair that is free at the same time, groups the
//! shared slots into contiguous runs, and reports the runs that are long
//! enough to book a lesson.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slot_engine::{format_report, intersect, DaySchedule, EntityAvailability, TimeSlotSet};
//!
//! let labels = ["8:00", "8:30", "9:00", "9:30", "10:00", "10:30"];
//! let day = DaySchedule {
//!     day: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
//!     cfis: vec![EntityAvailability::new("Smith", TimeSlotSet::new(vec![2, 3, 4]).unwrap())],
//!     planes: vec![EntityAvailability::new("N123", TimeSlotSet::new(vec![3, 4, 5]).unwrap())],
//!     time_slots: labels.iter().map(|s| s.to_string()).collect(),
//! };
//!
//! let records = intersect(std::slice::from_ref(&day));
//! let lines = format_report(&records, 2).unwrap();
//! assert_eq!(
//!     lines,
//!     vec!["Smith and N123 are both available 03/15/24 from blocks 9:30 through 10:00"]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`slots`] -- `TimeSlotSet`, a strictly ascending slot-index set
//! - [`runs`] -- contiguous run detection
//! - [`schedule`] -- per-day schedule records
//! - [`intersect`] -- pairwise shared availability
//! - [`report`] -- run filtering and report lines
//! - [`dates`] -- day arithmetic and `MM/DD/YY` formatting
//! - [`roster`] -- raw grid parsing and allow-list classification
//! - [`source`] -- schedule sources and the multi-day scan
//! - [`config`] -- scan settings
//! - [`error`] -- Error types

pub mod config;
pub mod dates;
pub mod error;
pub mod intersect;
pub mod report;
pub mod roster;
pub mod runs;
pub mod schedule;
pub mod slots;
pub mod source;

pub use config::ScanConfig;
pub use dates::{add_days, format_date};
pub use error::SlotError;
pub use intersect::{intersect, intersect_day, IntersectionRecord};
pub use report::{availability_windows, format_report, AvailabilityWindow};
pub use roster::{normalize_name, Category, DayGrid, GridCell, GridRow, Roster};
pub use runs::group_contiguous;
pub use schedule::{DaySchedule, EntityAvailability};
pub use slots::TimeSlotSet;
pub use source::{scan, scan_dates, GridFileSource, ScanOutcome, ScheduleSource};
