use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// A 24-hour wall-clock time with no date component.
///
/// Serialized as "HH:MM". Arithmetic wraps at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    fn total_minutes(&self) -> i32 {
        self.hour as i32 * 60 + self.minute as i32
    }

    /// Signed difference `other - self` in hours.
    ///
    /// Computed on the raw clock values with no day-wrap correction: if
    /// `other` is numerically earlier the result is negative.
    pub fn hours_until(&self, other: ClockTime) -> f64 {
        (other.total_minutes() - self.total_minutes()) as f64 / 60.0
    }

    /// Add a possibly fractional, possibly negative number of hours.
    ///
    /// The fractional part converts to whole minutes by rounding; the result
    /// wraps at 24 hours.
    pub fn add_hours(&self, hours: f64) -> ClockTime {
        let whole = hours.floor();
        let frac_minutes = ((hours - whole) * 60.0).round() as i32;
        let total = self.total_minutes() + whole as i32 * 60 + frac_minutes;
        let wrapped = total.rem_euclid(24 * 60);
        ClockTime {
            hour: (wrapped / 60) as u8,
            minute: (wrapped % 60) as u8,
        }
    }

    /// 12-hour display form, e.g. "06:30" -> "6:30 AM", "17:00" -> "5:00 PM".
    pub fn format_12h(&self) -> String {
        let period = if self.hour >= 12 { "PM" } else { "AM" };
        let hour12 = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour12, self.minute, period)
    }
}

impl FromStr for ClockTime {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlanError::InvalidTime(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;
        ClockTime::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = PlanError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> String {
        t.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
