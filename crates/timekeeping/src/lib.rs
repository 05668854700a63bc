//! Timekeeping domain module.
//!
//! Clock-time-of-day values and validated working-day ranges with overtime
//! computation, implemented purely as deterministic domain logic.

pub mod time;
pub mod workday;

pub use time::Time;
pub use workday::{Workday, WorkdayError};
