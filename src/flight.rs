use crate::time::{HOUR, Time};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub type FlightId = Arc<str>;
pub type AircraftId = Arc<str>;
pub type AirportId = Arc<str>;

/// Structural defect of a single flight, independent of the rest of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidFlight {
    #[error("{0} is empty")]
    EmptyField(&'static str),
    #[error("departure and destination airport are the same")]
    SameAirport,
    #[error("arrival is not after departure")]
    NonPositiveDuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    Completed,
    InProgress,
    Scheduled,
    /// Past its arrival but never marked complete.
    Unknown,
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlightStatus::Completed => "Completed",
            FlightStatus::InProgress => "In Progress",
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// A single leg flown by one aircraft.
///
/// Equality and ordering look at `departure_time` only: two flights leaving
/// at the same instant compare equal whatever their other fields hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub number: FlightId,
    pub departure_airport: AirportId,
    pub destination_airport: AirportId,
    pub departure_time: Time,
    pub arrival_time: Time,
    pub aircraft_id: AircraftId,
    #[serde(default)]
    completed: bool,
}

impl Flight {
    pub fn new(
        number: impl Into<FlightId>,
        departure_airport: impl Into<AirportId>,
        destination_airport: impl Into<AirportId>,
        departure_time: Time,
        arrival_time: Time,
        aircraft_id: impl Into<AircraftId>,
    ) -> Flight {
        Flight {
            number: number.into(),
            departure_airport: departure_airport.into(),
            destination_airport: destination_airport.into(),
            departure_time,
            arrival_time,
            aircraft_id: aircraft_id.into(),
            completed: false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Idempotent.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Seconds in the air, zero when arrival is not after departure.
    pub fn duration(&self) -> i64 {
        (self.arrival_time - self.departure_time).max(0)
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration() as f64 / HOUR as f64
    }

    pub fn is_in_progress(&self, now: Time) -> bool {
        !self.completed && now >= self.departure_time && now <= self.arrival_time
    }

    pub fn is_scheduled(&self, now: Time) -> bool {
        !self.completed && now < self.departure_time
    }

    pub fn status(&self, now: Time) -> FlightStatus {
        if self.completed {
            FlightStatus::Completed
        } else if self.is_in_progress(now) {
            FlightStatus::InProgress
        } else if self.is_scheduled(now) {
            FlightStatus::Scheduled
        } else {
            FlightStatus::Unknown
        }
    }

    pub fn check(&self) -> Result<(), InvalidFlight> {
        let fields = [
            ("number", &self.number),
            ("departure airport", &self.departure_airport),
            ("destination airport", &self.destination_airport),
            ("aircraft", &self.aircraft_id),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(InvalidFlight::EmptyField(*name));
        }
        if self.departure_airport == self.destination_airport {
            return Err(InvalidFlight::SameAirport);
        }
        if self.arrival_time <= self.departure_time {
            return Err(InvalidFlight::NonPositiveDuration);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Same aircraft and overlapping `[departure, arrival)` intervals.
    /// Back-to-back legs do not conflict.
    pub fn conflicts_with(&self, other: &Flight) -> bool {
        if self.aircraft_id != other.aircraft_id {
            return false;
        }
        Time::is_overlapping(
            &(self.departure_time, self.arrival_time),
            &(other.departure_time, other.arrival_time),
        )
    }
}

impl PartialEq for Flight {
    fn eq(&self, other: &Self) -> bool {
        self.departure_time == other.departure_time
    }
}

impl Eq for Flight {}

impl PartialOrd for Flight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Flight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.departure_time.cmp(&other.departure_time)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}->{} {} - {} ({})",
            self.number,
            self.departure_airport,
            self.destination_airport,
            self.departure_time,
            self.arrival_time,
            self.aircraft_id
        )
    }
}
