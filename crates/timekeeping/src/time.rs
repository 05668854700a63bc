use core::fmt;
use core::ops::Sub;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use worklog_core::ValueObject;

const MINUTES_PER_HOUR: i64 = 60;

/// Clock time of day (or a duration between two of them).
///
/// No range is enforced: subtraction yields deltas that may be negative, and
/// values built from literals may carry minutes outside `0..60`. Ordering is
/// defined on the raw fields (hours first, then minutes), not after
/// normalization, which is why the field order below matters for the derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Time {
    hours: i32,
    minutes: i32,
}

impl ValueObject for Time {}

impl Time {
    pub const MIDNIGHT: Time = Time::new(0, 0);
    pub const LAST_MINUTE: Time = Time::new(23, 59);

    pub const fn new(hours: i32, minutes: i32) -> Self {
        Self { hours, minutes }
    }

    /// Whole hours, zero minutes.
    pub const fn from_hours(hours: i32) -> Self {
        Self::new(hours, 0)
    }

    /// Convert fractional hours (`3.5` -> `03:30`).
    ///
    /// Hours are floored and the remaining fraction is truncated to whole
    /// minutes, so negative inputs keep a non-negative minutes component:
    /// `-0.5` becomes `(-1, 30)`.
    ///
    /// Non-finite input follows float-to-int casting: `NaN` gives `00:00`,
    /// infinities saturate at the `i32` bounds.
    pub fn from_fraction(value: f64) -> Self {
        let hours = value.floor();
        let minutes = ((value - hours) * 60.0).trunc();
        Self::new(hours as i32, minutes as i32)
    }

    pub fn to_fraction(self) -> f64 {
        f64::from(self.hours) + f64::from(self.minutes) / 60.0
    }

    pub fn hours(self) -> i32 {
        self.hours
    }

    pub fn minutes(self) -> i32 {
        self.minutes
    }

    pub fn total_minutes(self) -> i64 {
        i64::from(self.hours) * MINUTES_PER_HOUR + i64::from(self.minutes)
    }

    /// Normalized difference `self - other`.
    ///
    /// Same result as `from_fraction(self.to_fraction() - other.to_fraction())`
    /// but computed on whole minutes, so no float drift. Hours are floored and
    /// minutes always land in `0..60`. Hours saturate at the `i32` bounds
    /// when the difference does not fit.
    pub fn subtract(self, other: Time) -> Time {
        let delta = self.total_minutes() - other.total_minutes();
        let hours = delta.div_euclid(MINUTES_PER_HOUR);
        let hours = i32::try_from(hours).unwrap_or(if hours < 0 { i32::MIN } else { i32::MAX });
        Time::new(hours, delta.rem_euclid(MINUTES_PER_HOUR) as i32)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        self.subtract(rhs)
    }
}

impl From<NaiveTime> for Time {
    fn from(value: NaiveTime) -> Self {
        Self::new(value.hour() as i32, value.minute() as i32)
    }
}

/// `HH:MM`, with a leading `-` when hours are negative. Minutes are always
/// rendered unsigned.
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.hours < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:02}:{:02}",
            self.hours.unsigned_abs(),
            self.minutes.unsigned_abs()
        )
    }
}
