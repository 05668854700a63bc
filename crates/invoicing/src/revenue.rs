//! Revenue queries over the customer → project → invoice hierarchy.
//!
//! Only paid invoices count towards revenue.

use std::collections::HashMap;

use worklog_core::Entity;

use crate::invoice::{Customer, Project};

/// Paid revenue per customer name for the given month number.
///
/// The year of the invoicing period is not considered: September 2018 and
/// September 2019 both count for month `9`. Every customer appears in the
/// result, with `0` when nothing matched.
pub fn revenue_per_customer_for_month(
    customers: &[Customer],
    month: i32,
) -> HashMap<String, u64> {
    let mut revenue: HashMap<String, u64> = HashMap::with_capacity(customers.len());

    for customer in customers {
        let total = customer
            .invoices()
            .filter(|invoice| invoice.is_paid() && invoice.period.month() == month)
            .fold(0u64, |sum, invoice| sum.saturating_add(invoice.price));

        let entry = revenue.entry(customer.id().to_owned()).or_default();
        *entry = entry.saturating_add(total);
    }

    tracing::debug!(month, customers = revenue.len(), "computed revenue per customer");
    revenue
}

/// Project with the highest paid total across all customers.
///
/// Ties go to the project encountered first (customers in order, then their
/// projects in order). `None` only when there are no projects at all.
pub fn most_profitable_project(customers: &[Customer]) -> Option<&Project> {
    let best = customers
        .iter()
        .flat_map(|customer| customer.projects.iter())
        .map(|project| (project, project.paid_total()))
        .fold(None::<(&Project, u64)>, |best, (project, total)| match best {
            Some((_, best_total)) if best_total >= total => best,
            _ => Some((project, total)),
        });

    if let Some((project, total)) = best {
        tracing::debug!(project = project.id(), total, "found most profitable project");
    }
    best.map(|(project, _)| project)
}
