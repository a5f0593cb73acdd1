use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use slot_engine::{format_report, intersect, DaySchedule, EntityAvailability, TimeSlotSet};
use std::hint::black_box;

/// A month of days with 20 instructors and 15 aircraft on a 28-column grid.
fn month() -> Vec<DaySchedule> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..30u64)
        .map(|d| {
            let entity = |prefix: &str, i: usize| {
                let slots = (0..28).filter(|s| (s + i + d as usize) % 5 != 0).collect();
                EntityAvailability::new(format!("{}{}", prefix, i), TimeSlotSet::from_unsorted(slots))
            };
            DaySchedule {
                day: start + chrono::Days::new(d),
                cfis: (0..20).map(|i| entity("CFI", i)).collect(),
                planes: (0..15).map(|i| entity("N", i)).collect(),
                time_slots: (0..28).map(|i| format!("{}:{:02}", 7 + i / 2, (i % 2) * 30)).collect(),
            }
        })
        .collect()
}

fn bench_intersect(c: &mut Criterion) {
    let days = month();

    c.bench_function("intersect_month", |b| {
        b.iter(|| intersect(black_box(&days)))
    });

    let records = intersect(&days);
    c.bench_function("format_report_month", |b| {
        b.iter(|| format_report(black_box(&records), 4))
    });
}

criterion_group!(benches, bench_intersect);
criterion_main!(benches);
