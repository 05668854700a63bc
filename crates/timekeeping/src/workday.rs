use core::fmt;
use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use worklog_core::{DomainError, ValueObject};

use crate::time::Time;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WorkdayError {
    #[error("Range `{start} to {end}` does not define a valid workday.")]
    InvalidRange { start: Time, end: Time },
}

impl From<WorkdayError> for DomainError {
    fn from(value: WorkdayError) -> Self {
        DomainError::validation(value.to_string())
    }
}

/// A working day: the closed range `start..=end` of clock times.
///
/// Invariant: `00:00 <= start` and `end <= 23:59`. Checked by [`Workday::new`]
/// and again when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WorkdayBounds")]
pub struct Workday {
    start: Time,
    end: Time,
}

impl ValueObject for Workday {}

#[derive(Deserialize)]
struct WorkdayBounds {
    start: Time,
    end: Time,
}

impl TryFrom<WorkdayBounds> for Workday {
    type Error = WorkdayError;

    fn try_from(value: WorkdayBounds) -> Result<Self, Self::Error> {
        Workday::new(value.start, value.end)
    }
}

impl Workday {
    pub const DEFAULT_WORKING_HOURS: i32 = 8;

    pub fn new(start: Time, end: Time) -> Result<Self, WorkdayError> {
        if start < Time::MIDNIGHT || end > Time::LAST_MINUTE {
            tracing::warn!(%start, %end, "rejected workday range");
            return Err(WorkdayError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Time {
        self.start
    }

    /// Inclusive end of the day.
    pub fn end(&self) -> Time {
        self.end
    }

    pub fn as_range(&self) -> RangeInclusive<Time> {
        self.start..=self.end
    }

    pub fn contains(&self, time: Time) -> bool {
        self.as_range().contains(&time)
    }

    /// Time worked beyond [`Self::DEFAULT_WORKING_HOURS`]; negative when the
    /// day was shorter.
    pub fn calculate_overtime(&self) -> Time {
        self.calculate_overtime_with(Self::DEFAULT_WORKING_HOURS)
    }

    pub fn calculate_overtime_with(&self, standard_hours: i32) -> Time {
        let overtime = self.end - self.start - Time::from_hours(standard_hours);
        tracing::debug!(workday = %self, standard_hours, %overtime, "calculated overtime");
        overtime
    }
}

/// 08:00 to 16:00.
impl Default for Workday {
    fn default() -> Self {
        Self {
            start: Time::from_hours(8),
            end: Time::from_hours(16),
        }
    }
}

impl fmt::Display for Workday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office_hours() -> Workday {
        Workday::new(Time::from_hours(8), Time::from_hours(16)).unwrap()
    }

    #[test]
    fn accepts_a_regular_day() {
        let day = office_hours();
        assert_eq!(day.start(), Time::from_hours(8));
        assert_eq!(day.end(), Time::from_hours(16));
        assert_eq!(day, Workday::default());
    }

    #[test]
    fn accepts_the_full_day() {
        assert!(Workday::new(Time::MIDNIGHT, Time::LAST_MINUTE).is_ok());
    }

    #[test]
    fn rejects_start_before_midnight() {
        let err = Workday::new(Time::from_hours(-1), Time::from_hours(12)).unwrap_err();
        assert_eq!(
            err,
            WorkdayError::InvalidRange {
                start: Time::from_hours(-1),
                end: Time::from_hours(12),
            }
        );
        assert_eq!(
            err.to_string(),
            "Range `-01:00 to 12:00` does not define a valid workday."
        );
    }

    #[test]
    fn rejects_end_after_last_minute() {
        let err = Workday::new(Time::from_hours(8), Time::from_hours(24)).unwrap_err();
        assert!(matches!(err, WorkdayError::InvalidRange { .. }));
    }

    #[test]
    fn converts_into_domain_error() {
        let err: DomainError = Workday::new(Time::new(0, -1), Time::from_hours(12))
            .unwrap_err()
            .into();
        match err {
            DomainError::Validation(msg) if msg.contains("does not define a valid workday") => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn contains_is_inclusive() {
        let day = office_hours();
        assert!(day.contains(Time::new(10, 30)));
        assert!(day.contains(Time::from_hours(8)));
        assert!(day.contains(Time::from_hours(16)));
        assert!(!day.contains(Time::from_hours(7)));
        assert!(!day.contains(Time::new(16, 1)));
    }

    #[test]
    fn overtime_beyond_standard_day() {
        let day = Workday::new(Time::from_hours(8), Time::new(17, 15)).unwrap();
        assert_eq!(day.calculate_overtime(), Time::new(1, 15));
        assert_eq!(day.calculate_overtime().to_string(), "01:15");
    }

    #[test]
    fn short_day_yields_negative_overtime() {
        let day = Workday::new(Time::from_hours(8), Time::from_hours(15)).unwrap();
        assert_eq!(day.calculate_overtime(), Time::new(-1, 0));
        assert_eq!(day.calculate_overtime().to_string(), "-01:00");
    }

    #[test]
    fn overtime_carries_minutes_across_hours() {
        // Field-wise subtraction would give 8h -45m here.
        let day = Workday::new(Time::new(8, 45), Time::from_hours(16)).unwrap();
        assert_eq!(day.end() - day.start(), Time::new(7, 15));
        assert_eq!(day.calculate_overtime(), Time::new(-1, 15));
        assert_eq!(day.calculate_overtime_with(7), Time::new(0, 15));
    }

    #[test]
    fn overtime_with_custom_standard_hours() {
        let day = Workday::new(Time::from_hours(6), Time::new(16, 30)).unwrap();
        assert_eq!(day.calculate_overtime_with(10), Time::new(0, 30));
        assert_eq!(day.calculate_overtime_with(0), Time::new(10, 30));
    }

    #[test]
    fn displays_as_range() {
        assert_eq!(office_hours().to_string(), "08:00 to 16:00");
    }

    #[test]
    fn deserializing_validates_the_range() {
        let ok: Workday = serde_json::from_str(
            r#"{"start":{"hours":8,"minutes":0},"end":{"hours":16,"minutes":0}}"#,
        )
        .unwrap();
        assert_eq!(ok, office_hours());

        let err = serde_json::from_str::<Workday>(
            r#"{"start":{"hours":-1,"minutes":0},"end":{"hours":12,"minutes":0}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("does not define a valid workday"));
    }
}
