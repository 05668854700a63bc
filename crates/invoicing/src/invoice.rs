use serde::{Deserialize, Serialize};

use worklog_core::Entity;

use crate::period::InvoicingPeriod;

/// A single invoice issued for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub paid: bool,
    pub period: InvoicingPeriod,
}

impl Invoice {
    pub fn new(price: u64, paid: bool, period: InvoicingPeriod) -> Self {
        Self {
            price,
            paid,
            period,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub invoices: Vec<Invoice>,
}

impl Project {
    pub fn new(name: impl Into<String>, invoices: Vec<Invoice>) -> Self {
        Self {
            name: name.into(),
            invoices,
        }
    }

    /// Sum of all paid invoice prices, regardless of period.
    pub fn paid_total(&self) -> u64 {
        self.invoices
            .iter()
            .filter(|invoice| invoice.is_paid())
            .fold(0, |total, invoice| total.saturating_add(invoice.price))
    }
}

impl Entity for Project {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Aggregation key for revenue reports.
    pub name: String,
    pub projects: Vec<Project>,
}

impl Customer {
    pub fn new(name: impl Into<String>, projects: Vec<Project>) -> Self {
        Self {
            name: name.into(),
            projects,
        }
    }

    pub fn invoices(&self) -> impl Iterator<Item = &Invoice> {
        self.projects.iter().flat_map(|project| project.invoices.iter())
    }
}

impl Entity for Customer {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(month: i32) -> InvoicingPeriod {
        InvoicingPeriod::new(month, 2018).unwrap()
    }

    #[test]
    fn paid_total_skips_unpaid_invoices() {
        let project = Project::new(
            "Oven maintenance",
            vec![
                Invoice::new(13_000, true, period(10)),
                Invoice::new(11_000, false, period(9)),
                Invoice::new(13_000, true, period(8)),
            ],
        );
        assert_eq!(project.paid_total(), 26_000);
    }

    #[test]
    fn paid_total_of_empty_project_is_zero() {
        assert_eq!(Project::new("Idle", Vec::new()).paid_total(), 0);
    }

    #[test]
    fn customer_invoices_span_all_projects() {
        let customer = Customer::new(
            "Arnie's Pizza Palace",
            vec![
                Project::new("Oven maintenance", vec![Invoice::new(1, true, period(1))]),
                Project::new(
                    "Delivery car fleet upgrade",
                    vec![
                        Invoice::new(2, false, period(2)),
                        Invoice::new(3, true, period(3)),
                    ],
                ),
            ],
        );
        let prices: Vec<u64> = customer.invoices().map(|invoice| invoice.price).collect();
        assert_eq!(prices, vec![1, 2, 3]);
    }

    #[test]
    fn entities_are_identified_by_name() {
        let project = Project::new("European Market Expansion", Vec::new());
        let customer = Customer::new("Granny's little bakery", vec![project.clone()]);
        assert_eq!(project.id(), "European Market Expansion");
        assert_eq!(customer.id(), "Granny's little bakery");
    }
}
