use crate::flight::AircraftId;
use crate::schedule::schedule::Schedule;
use crate::time::Time;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Flight-hours per aircraft per local calendar day of departure. Instants
/// outside the representable calendar fall under `None`.
pub type DailyUtilization = BTreeMap<(AircraftId, Option<NaiveDate>), f64>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlightCounts {
    pub total: usize,
    pub completed: usize,
    pub scheduled: usize,
    pub in_progress: usize,
}

impl Schedule {
    pub fn total_flight_hours(&self, aircraft_id: &str) -> f64 {
        self.flights
            .iter()
            .filter(|f| *f.aircraft_id == *aircraft_id)
            .map(|f| f.duration_hours())
            .sum()
    }

    /// Hours of the flights departing within `[start, end]`.
    pub fn total_flight_hours_in_range(&self, aircraft_id: &str, start: Time, end: Time) -> f64 {
        self.in_time_range(start, end)
            .into_iter()
            .filter(|f| *f.aircraft_id == *aircraft_id)
            .map(|f| f.duration_hours())
            .sum()
    }

    pub fn daily_utilization(&self) -> DailyUtilization {
        self.flights.iter().fold(BTreeMap::new(), |mut acc, f| {
            *acc.entry((f.aircraft_id.clone(), f.departure_time.local_date()))
                .or_insert(0.0) += f.duration_hours();
            acc
        })
    }

    /// Aircraft whose hours on any single day exceed `daily_ceiling_hours`.
    pub fn overworked_aircraft(&self, daily_ceiling_hours: f64) -> BTreeSet<AircraftId> {
        self.daily_utilization()
            .into_iter()
            .filter(|(_, hours)| *hours > daily_ceiling_hours)
            .map(|((aircraft_id, _), _)| aircraft_id)
            .collect()
    }

    pub fn counts(&self, now: Time) -> FlightCounts {
        self.flights
            .iter()
            .fold(FlightCounts { total: self.flights.len(), ..Default::default() }, |mut c, f| {
                c.completed += f.is_completed() as usize;
                c.scheduled += f.is_scheduled(now) as usize;
                c.in_progress += f.is_in_progress(now) as usize;
                c
            })
    }
}
