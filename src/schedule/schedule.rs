use crate::config::Settings;
use crate::error::ScheduleResult;
use crate::flight::Flight;
use crate::time::Time;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Flights ordered by departure time.
///
/// Consistency across flights (double-booked aircraft) is not enforced on
/// insertion; it is checked on demand through the validation views.
#[derive(Debug, Default, Clone)]
pub struct Schedule {
    pub(crate) flights: Vec<Flight>,
}

impl Schedule {
    pub fn new() -> Schedule {
        Schedule::default()
    }

    /// Routes every flight through [`Schedule::add`], so invalid ones are dropped.
    pub fn from_flights(flights: impl IntoIterator<Item = Flight>) -> Schedule {
        let mut schedule = Schedule::new();
        flights.into_iter().for_each(|f| schedule.add(f));
        schedule
    }

    pub fn load_from_file(path: &Path) -> ScheduleResult<(Self, Settings)> {
        let data = std::fs::read_to_string(path)?;
        #[derive(Deserialize)]
        struct RawData {
            #[serde(default)]
            settings: Settings,
            flights: Vec<Flight>,
        }
        let raw: RawData = serde_json::from_str(&data)?;

        let offered = raw.flights.len();
        let schedule = Schedule::from_flights(raw.flights);
        if schedule.len() < offered {
            warn!(
                discarded = offered - schedule.len(),
                path = %path.display(),
                "scenario contains invalid flights"
            );
        }
        Ok((schedule, raw.settings))
    }

    pub(crate) fn sort_flights(&mut self) {
        self.flights.sort_by_key(|f| f.departure_time);
    }

    /// Invalid flights are discarded silently; success shows only as the
    /// flight being findable afterwards.
    pub fn add(&mut self, flight: Flight) {
        if let Err(reason) = flight.check() {
            debug!(flight = %flight.number, %reason, "discarding invalid flight");
            return;
        }
        debug!(flight = %flight.number, aircraft = %flight.aircraft_id, "adding flight");
        self.flights.push(flight);
        self.sort_flights();
    }

    /// Removes every flight carrying `number` and returns how many went.
    pub fn remove(&mut self, number: &str) -> usize {
        let before = self.flights.len();
        self.flights.retain(|f| *f.number != *number);
        before - self.flights.len()
    }

    pub fn find(&self, number: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| *f.number == *number)
    }

    pub fn all(&self) -> &[Flight] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn by_aircraft(&self, aircraft_id: &str) -> Vec<&Flight> {
        self.flights
            .iter()
            .filter(|f| *f.aircraft_id == *aircraft_id)
            .collect()
    }

    /// Flights leaving from or arriving at `code`.
    pub fn by_airport(&self, code: &str) -> Vec<&Flight> {
        self.flights
            .iter()
            .filter(|f| *f.departure_airport == *code || *f.destination_airport == *code)
            .collect()
    }

    /// Flights departing within `[start, end]`.
    pub fn in_time_range(&self, start: Time, end: Time) -> Vec<&Flight> {
        self.flights
            .iter()
            .filter(|f| f.departure_time >= start && f.departure_time <= end)
            .collect()
    }

    /// Marks the first flight carrying `number` as completed. Returns whether
    /// one was found.
    pub fn complete_flight(&mut self, number: &str) -> bool {
        match self.flights.iter_mut().find(|f| *f.number == *number) {
            Some(flight) => {
                flight.complete();
                true
            }
            None => false,
        }
    }
}
