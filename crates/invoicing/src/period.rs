use core::cmp::Ordering;
use core::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use worklog_core::{DomainError, ValueObject};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvoicingPeriodError {
    #[error("invoicing period month must be within 1..=12 (got {month})")]
    MonthOutOfRange { month: i32 },

    #[error(
        "invoicing period year must be {first} or later (got {year})",
        first = InvoicingPeriod::FIRST_YEAR
    )]
    YearTooEarly { year: i32 },

    #[error(
        "invoicing period year must be {last} or earlier (got {year})",
        last = InvoicingPeriod::LAST_YEAR
    )]
    YearTooLate { year: i32 },
}

impl From<InvoicingPeriodError> for DomainError {
    fn from(value: InvoicingPeriodError) -> Self {
        DomainError::validation(value.to_string())
    }
}

/// Calendar month an invoice is billed in.
///
/// Invariant: `1 <= month <= 12` and `1970 <= year <= 9999`. Ordered by
/// year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInvoicingPeriod")]
pub struct InvoicingPeriod {
    month: i32,
    year: i32,
}

impl ValueObject for InvoicingPeriod {}

#[derive(Deserialize)]
struct RawInvoicingPeriod {
    month: i32,
    year: i32,
}

impl TryFrom<RawInvoicingPeriod> for InvoicingPeriod {
    type Error = InvoicingPeriodError;

    fn try_from(value: RawInvoicingPeriod) -> Result<Self, Self::Error> {
        InvoicingPeriod::new(value.month, value.year)
    }
}

impl InvoicingPeriod {
    pub const FIRST_YEAR: i32 = 1970;
    pub const LAST_YEAR: i32 = 9999;

    pub fn new(month: i32, year: i32) -> Result<Self, InvoicingPeriodError> {
        if !(1..=12).contains(&month) {
            tracing::warn!(month, year, "rejected invoicing period month");
            return Err(InvoicingPeriodError::MonthOutOfRange { month });
        }
        if year < Self::FIRST_YEAR {
            tracing::warn!(month, year, "rejected invoicing period year");
            return Err(InvoicingPeriodError::YearTooEarly { year });
        }
        if year > Self::LAST_YEAR {
            tracing::warn!(month, year, "rejected invoicing period year");
            return Err(InvoicingPeriodError::YearTooLate { year });
        }
        Ok(Self { month, year })
    }

    /// Period containing the given calendar date.
    pub fn of_date(date: &impl Datelike) -> Result<Self, InvoicingPeriodError> {
        Self::new(date.month() as i32, date.year())
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The following month, rolling December over into January of the next
    /// year.
    ///
    /// Fails only past December of [`Self::LAST_YEAR`].
    pub fn successor(self) -> Result<Self, InvoicingPeriodError> {
        if self.month == 12 {
            Self::new(1, self.year + 1)
        } else {
            Self::new(self.month + 1, self.year)
        }
    }

    /// Inclusive range membership: `lo <= self <= hi`.
    pub fn within(self, lo: InvoicingPeriod, hi: InvoicingPeriod) -> bool {
        (lo..=hi).contains(&self)
    }
}

impl Ord for InvoicingPeriod {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.month.cmp(&other.month))
    }
}

impl PartialOrd for InvoicingPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `MM/YYYY`.
impl fmt::Display for InvoicingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}
