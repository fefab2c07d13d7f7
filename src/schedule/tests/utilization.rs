use crate::config::Settings;
use crate::schedule::schedule::Schedule;
use crate::schedule::tests::utils::{flight, id, local};
use crate::schedule::utilization::FlightCounts;
use crate::time::{HOUR, Time};
use chrono::NaiveDate;
use std::collections::BTreeSet;

fn leg(number: &str, aircraft: &str, dep: Time, hours: i64) -> crate::flight::Flight {
    flight(number, "SVO", "LED", dep.0, dep.0 + hours * HOUR, aircraft)
}

const CEILING: f64 = Settings::DEFAULT_DAILY_CEILING_HOURS;

#[test]
fn test_total_flight_hours() {
    let mut schedule = Schedule::new();
    schedule.add(leg("F1", "A1", Time(0), 2));
    schedule.add(flight("F2", "LED", "SVO", 10 * HOUR, 10 * HOUR + 5400, "A1"));
    schedule.add(leg("F3", "A2", Time(0), 7));

    assert_eq!(3.5, schedule.total_flight_hours("A1"));
    assert_eq!(7.0, schedule.total_flight_hours("A2"));
    assert_eq!(0.0, schedule.total_flight_hours("A9"));
}

#[test]
fn test_hours_of_flight_spanning_all_time() {
    let mut schedule = Schedule::new();
    schedule.add(flight("F1", "SVO", "LED", i64::MIN, i64::MAX, "A1"));

    assert_eq!(1, schedule.len());
    assert_eq!(i64::MAX as f64 / HOUR as f64, schedule.total_flight_hours("A1"));
    assert_eq!(BTreeSet::from([id("A1")]), schedule.overworked_aircraft(12.0));
}

#[test]
fn test_total_flight_hours_in_range() {
    let mut schedule = Schedule::new();
    schedule.add(leg("F1", "A1", Time(0), 2));
    schedule.add(leg("F2", "A1", Time(10 * HOUR), 3));
    schedule.add(leg("F3", "A1", Time(20 * HOUR), 4));
    schedule.add(leg("F4", "A2", Time(10 * HOUR), 5));

    assert_eq!(
        7.0,
        schedule.total_flight_hours_in_range("A1", Time(10 * HOUR), Time(20 * HOUR))
    );
    // departure decides, not arrival
    assert_eq!(
        3.0,
        schedule.total_flight_hours_in_range("A1", Time(HOUR), Time(11 * HOUR))
    );
    assert_eq!(0.0, schedule.total_flight_hours_in_range("A1", Time(21 * HOUR), Time(30 * HOUR)));
}

#[test]
fn test_overworked_over_ceiling() {
    let mut schedule = Schedule::new();
    schedule.add(leg("F1", "A1", local(2025, 6, 10, 6, 0), 5));
    schedule.add(leg("F2", "A1", local(2025, 6, 10, 11, 0), 5));
    schedule.add(leg("F3", "A1", local(2025, 6, 10, 16, 0), 3));

    assert_eq!(BTreeSet::from([id("A1")]), schedule.overworked_aircraft(CEILING));
}

#[test]
fn test_not_overworked_under_ceiling() {
    let mut schedule = Schedule::new();
    schedule.add(leg("F1", "A1", local(2025, 6, 10, 6, 0), 5));
    schedule.add(leg("F2", "A1", local(2025, 6, 10, 11, 0), 6));

    assert!(schedule.overworked_aircraft(CEILING).is_empty());
}

#[test]
fn test_ceiling_is_exclusive() {
    let mut schedule = Schedule::new();
    schedule.add(leg("F1", "A1", local(2025, 6, 10, 6, 0), 6));
    schedule.add(leg("F2", "A1", local(2025, 6, 10, 12, 0), 6));

    assert!(schedule.overworked_aircraft(CEILING).is_empty());
    assert_eq!(BTreeSet::from([id("A1")]), schedule.overworked_aircraft(11.5));
}

#[test]
fn test_hours_are_split_by_departure_day() {
    let mut schedule = Schedule::new();
    schedule.add(leg("F1", "A1", local(2025, 6, 10, 8, 0), 8));
    schedule.add(leg("F2", "A1", local(2025, 6, 11, 8, 0), 8));
    // departs late on the 11th, counted wholly on the 11th
    schedule.add(leg("F3", "A2", local(2025, 6, 11, 22, 0), 10));

    assert!(schedule.overworked_aircraft(CEILING).is_empty());

    let daily = schedule.daily_utilization();
    let day = |d| Some(NaiveDate::from_ymd_opt(2025, 6, d).unwrap());
    assert_eq!(Some(&8.0), daily.get(&(id("A1"), day(10))));
    assert_eq!(Some(&8.0), daily.get(&(id("A1"), day(11))));
    assert_eq!(Some(&10.0), daily.get(&(id("A2"), day(11))));
    assert_eq!(3, daily.len());
}

#[test]
fn test_overworked_listed_once_and_sorted() {
    let mut schedule = Schedule::new();
    for (day, prefix) in [(10, "X"), (11, "Y")] {
        schedule.add(leg(&format!("{prefix}1"), "B2", local(2025, 6, day, 1, 0), 7));
        schedule.add(leg(&format!("{prefix}2"), "B2", local(2025, 6, day, 9, 0), 7));
    }
    schedule.add(leg("Z1", "A1", local(2025, 6, 10, 1, 0), 7));
    schedule.add(leg("Z2", "A1", local(2025, 6, 10, 9, 0), 7));
    schedule.add(leg("Z3", "C3", local(2025, 6, 10, 1, 0), 7));

    let overworked = schedule.overworked_aircraft(CEILING);
    assert_eq!(vec![id("A1"), id("B2")], overworked.into_iter().collect::<Vec<_>>());
}

#[test]
fn test_counts() {
    let mut schedule = Schedule::new();
    schedule.add(leg("F1", "A1", Time(0), 1));
    schedule.add(leg("F2", "A2", Time(HOUR), 2));
    schedule.add(leg("F3", "A3", Time(10 * HOUR), 1));
    schedule.add(leg("F4", "A4", Time(20 * HOUR), 1));
    schedule.complete_flight("F4");

    assert_eq!(
        FlightCounts {
            total: 4,
            completed: 1,
            scheduled: 1,
            in_progress: 1,
        },
        schedule.counts(Time(2 * HOUR))
    );
}
