use crate::time::Time;
use serde::{Deserialize, Serialize};

/// Tunables read from the `settings` block of a scenario file. Every field is
/// optional there; CLI flags override what the file says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Flight-hours per aircraft per local calendar day above which the
    /// aircraft is reported as overworked.
    pub daily_ceiling_hours: f64,
    /// Tables with more rows than this are sent through the pager.
    pub pager_threshold: usize,
    /// Fixed clock for status classification; wall clock when absent.
    pub now: Option<Time>,
}

impl Settings {
    pub const DEFAULT_DAILY_CEILING_HOURS: f64 = 12.0;

    pub fn now(&self) -> Time {
        self.now.unwrap_or_else(Time::now)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            daily_ceiling_hours: Self::DEFAULT_DAILY_CEILING_HOURS,
            pager_threshold: 20,
            now: None,
        }
    }
}
