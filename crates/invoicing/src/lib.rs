//! Invoicing domain module.
//!
//! Monthly invoicing periods, the customer → project → invoice hierarchy and
//! the revenue queries run over it. Pure, deterministic domain logic (no IO,
//! no storage).

pub mod invoice;
pub mod period;
pub mod revenue;
pub mod sample;

pub use invoice::{Customer, Invoice, Project};
pub use period::{InvoicingPeriod, InvoicingPeriodError};
pub use revenue::{most_profitable_project, revenue_per_customer_for_month};
