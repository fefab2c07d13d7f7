use crate::flight::Flight;
use crate::time::Time;
use chrono::NaiveDate;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn flight(
    number: &str,
    departure_airport: &str,
    destination_airport: &str,
    departure_time: i64,
    arrival_time: i64,
    aircraft_id: &str,
) -> Flight {
    Flight::new(
        number,
        departure_airport,
        destination_airport,
        Time(departure_time),
        Time(arrival_time),
        aircraft_id,
    )
}

pub fn add_flight(
    flights: &mut Vec<Flight>,
    number: &str,
    departure_airport: &str,
    destination_airport: &str,
    departure_time: i64,
    arrival_time: i64,
    aircraft_id: &str,
) {
    flights.push(flight(
        number,
        departure_airport,
        destination_airport,
        departure_time,
        arrival_time,
        aircraft_id,
    ));
}

/// Local wall-clock instant, so calendar-day tests hold in any timezone.
pub fn local(year: i32, month: u32, day: u32, hour: u32, min: u32) -> Time {
    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, 0))
        .unwrap();
    Time::from_local(naive).unwrap()
}

/// `Flight` equality only looks at departure time.
pub fn assert_same_record(expected: &Flight, actual: &Flight) {
    assert_eq!(expected.number, actual.number);
    assert_eq!(expected.departure_airport, actual.departure_airport);
    assert_eq!(expected.destination_airport, actual.destination_airport);
    assert_eq!(expected.departure_time, actual.departure_time);
    assert_eq!(expected.arrival_time, actual.arrival_time);
    assert_eq!(expected.aircraft_id, actual.aircraft_id);
    assert_eq!(expected.is_completed(), actual.is_completed());
}

pub fn numbers(flights: &[&Flight]) -> Vec<Arc<str>> {
    flights.iter().map(|f| f.number.clone()).collect()
}

pub fn arb_id(prefix: &'static str) -> impl Strategy<Value = Arc<str>> {
    prop_oneof![
        Just(Arc::from(format!("{}_1", prefix))),
        Just(Arc::from(format!("{}_2", prefix))),
        Just(Arc::from(format!("{}_3", prefix))),
    ]
}

/// Possibly invalid: airports may coincide and the duration may be non-positive.
pub fn arb_flight() -> impl Strategy<Value = Flight> {
    (
        arb_id("FL"),
        arb_id("AP"),
        arb_id("AP"),
        arb_id("AC"),
        0..20_000i64,
        -100..5000i64,
    )
        .prop_map(|(fid, org, dst, ac, dep, dur)| {
            Flight::new(fid, org, dst, Time(dep), Time(dep + dur), ac)
        })
}

pub fn arb_valid_flight() -> impl Strategy<Value = Flight> {
    (arb_id("FL"), arb_id("AC"), 0..20_000i64, 1..5000i64).prop_map(|(fid, ac, dep, dur)| {
        Flight::new(fid, "SVO", "LED", Time(dep), Time(dep + dur), ac)
    })
}
