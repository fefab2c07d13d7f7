use crate::flight::{Flight, FlightId};
use crate::schedule::schedule::Schedule;
use crate::time::HOUR;
use tracing::info;

/// Ground time between an arrival and the derived return departure.
pub const TURNAROUND: i64 = 2 * HOUR;
pub const RETURN_SUFFIX: &str = "R";

impl Flight {
    pub fn return_flight_number(&self) -> FlightId {
        format!("{}{}", self.number, RETURN_SUFFIX).into()
    }

    /// Inverse leg on the same aircraft, leaving [`TURNAROUND`] after this one
    /// lands and taking exactly as long as the outbound leg.
    pub fn create_return_flight(&self) -> Flight {
        let departure_time = self.arrival_time + TURNAROUND;
        Flight::new(
            self.return_flight_number(),
            self.destination_airport.clone(),
            self.departure_airport.clone(),
            departure_time,
            departure_time + self.duration(),
            self.aircraft_id.clone(),
        )
    }
}

impl Schedule {
    /// Adds a return flight for every incomplete flight present before the
    /// call. Returns the numbers of those that were accepted.
    pub fn add_return_flights(&mut self) -> Vec<FlightId> {
        let returns = self
            .flights
            .iter()
            .filter(|f| !f.is_completed())
            .map(Flight::create_return_flight)
            .collect::<Vec<_>>();

        let mut accepted = vec![];
        for flight in returns {
            if flight.is_valid() {
                accepted.push(flight.number.clone());
            }
            self.add(flight);
        }
        info!(count = accepted.len(), "added return flights");
        accepted
    }
}
