use crate::flight::{Flight, FlightId};
use crate::schedule::schedule::Schedule;

/// Every unordered pair of flights double-booking an aircraft, in schedule order.
pub fn conflicting_pairs(flights: &[Flight]) -> Vec<(FlightId, FlightId)> {
    flights
        .iter()
        .enumerate()
        .flat_map(|(i, a)| {
            flights[i + 1..]
                .iter()
                .filter(move |b| a.conflicts_with(b))
                .map(move |b| (a.number.clone(), b.number.clone()))
        })
        .collect()
}

pub fn has_conflicts(flights: &[Flight]) -> bool {
    flights
        .iter()
        .enumerate()
        .any(|(i, a)| flights[i + 1..].iter().any(|b| a.conflicts_with(b)))
}

impl Schedule {
    pub fn has_conflicts(&self) -> bool {
        has_conflicts(&self.flights)
    }

    pub fn conflicting_pairs(&self) -> Vec<(FlightId, FlightId)> {
        conflicting_pairs(&self.flights)
    }
}
