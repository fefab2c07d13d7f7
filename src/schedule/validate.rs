use crate::flight::FlightId;
use crate::schedule::schedule::Schedule;
use thiserror::Error;
use tracing::info;

/// One schedule diagnostic. `Display` yields the report line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid flight: {0}")]
    InvalidFlight(FlightId),
    /// Summary only; see [`Schedule::conflicting_pairs`] for the pairs.
    #[error("schedule has conflicts between flights")]
    Conflicts,
}

impl Schedule {
    /// Every flight is structurally valid and no aircraft is double-booked.
    pub fn is_valid(&self) -> bool {
        self.flights.iter().all(|f| f.is_valid()) && !self.has_conflicts()
    }

    pub fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = self
            .flights
            .iter()
            .filter(|f| !f.is_valid())
            .map(|f| ValidationError::InvalidFlight(f.number.clone()))
            .collect::<Vec<_>>();
        if self.has_conflicts() {
            errors.push(ValidationError::Conflicts);
        }
        errors
    }

    /// Drops structurally invalid flights and returns their numbers.
    /// Conflicts are left in place.
    pub fn validate_and_fix(&mut self) -> Vec<FlightId> {
        let (kept, dropped): (Vec<_>, Vec<_>) =
            self.flights.drain(..).partition(|f| f.is_valid());
        self.flights = kept;
        self.sort_flights();

        let removed = dropped.into_iter().map(|f| f.number).collect::<Vec<_>>();
        if !removed.is_empty() {
            info!(count = removed.len(), flights = ?removed, "removed invalid flights");
        }
        removed
    }
}
