use crate::error::ScheduleError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

pub const MINUTE: i64 = 60;
pub const HOUR: i64 = 60 * MINUTE;

/// Absolute instant in seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Hash, Serialize, Deserialize, PartialOrd)]
pub struct Time(pub i64);

impl Time {
    /// Half-open intervals `[from, to)`: touching endpoints do not overlap.
    pub(crate) fn is_overlapping(time: &(Time, Time), window: &(Time, Time)) -> bool {
        time.0 < window.1 && time.1 > window.0
    }

    pub fn now() -> Time {
        Time(Utc::now().timestamp())
    }

    /// Interprets a wall-clock reading in the local timezone. Skipped local
    /// times (DST gaps) have no instant.
    pub fn from_local(naive: NaiveDateTime) -> Option<Time> {
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| Time(dt.timestamp()))
    }

    pub fn to_local(self) -> Option<DateTime<Local>> {
        Local.timestamp_opt(self.0, 0).single()
    }

    /// Calendar date of this instant in local time.
    pub fn local_date(self) -> Option<NaiveDate> {
        self.to_local().map(|dt| dt.date_naive())
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_local() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            None => write!(f, "@{}", self.0),
        }
    }
}

impl FromStr for Time {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(secs) = s.parse::<i64>() {
            return Ok(Time(secs));
        }
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .and_then(Time::from_local)
            .ok_or_else(|| ScheduleError::InvalidTime(s.to_string()))
    }
}

// Arithmetic saturates at the ends of the i64 range.
impl Add<i64> for Time {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        Time(self.0.saturating_add(rhs))
    }
}

impl Sub<i64> for Time {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        Time(self.0.saturating_sub(rhs))
    }
}

/// Signed distance in seconds.
impl Sub<Time> for Time {
    type Output = i64;

    fn sub(self, rhs: Time) -> Self::Output {
        self.0.saturating_sub(rhs.0)
    }
}

impl AddAssign<i64> for Time {
    fn add_assign(&mut self, rhs: i64) {
        self.0 = self.0.saturating_add(rhs);
    }
}
