//! Sample portfolio used by the demo binary and the integration tests.

use worklog_core::DomainResult;

use crate::invoice::{Customer, Invoice, Project};
use crate::period::InvoicingPeriod;

const SAMPLE_YEAR: i32 = 2018;

fn invoice(price: u64, paid: bool, month: i32) -> DomainResult<Invoice> {
    Ok(Invoice::new(price, paid, InvoicingPeriod::new(month, SAMPLE_YEAR)?))
}

/// Three customers with invoices billed between July and October 2018.
pub fn portfolio() -> DomainResult<Vec<Customer>> {
    Ok(vec![
        Customer::new(
            "Westside Chocolate Factory",
            vec![
                Project::new(
                    "Chocolate Quality Improvement",
                    vec![
                        invoice(14_000_000, false, 10)?,
                        invoice(13_000_000, true, 9)?,
                        invoice(10_000_000, true, 8)?,
                        invoice(4_000_000, true, 7)?,
                    ],
                ),
                Project::new(
                    "Unnamed Hot Cocoa Project",
                    vec![invoice(45_000_000, false, 10)?, invoice(40_000_000, false, 9)?],
                ),
            ],
        ),
        Customer::new(
            "Granny's little bakery",
            vec![Project::new(
                "European Market Expansion",
                vec![
                    invoice(314_000_000, false, 10)?,
                    invoice(300_000_000, true, 9)?,
                    invoice(430_000_000, true, 8)?,
                ],
            )],
        ),
        Customer::new(
            "Arnie's Pizza Palace",
            vec![
                Project::new(
                    "Oven maintenance",
                    vec![
                        invoice(13_000, true, 10)?,
                        invoice(11_000, true, 9)?,
                        invoice(13_000, true, 8)?,
                    ],
                ),
                Project::new(
                    "Delivery car fleet upgrade",
                    vec![
                        invoice(250_000, false, 10)?,
                        invoice(450_000, true, 9)?,
                        invoice(133_000, true, 8)?,
                    ],
                ),
            ],
        ),
    ])
}
