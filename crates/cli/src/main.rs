//! Demo binary: runs the timekeeping and invoicing operations on literal
//! inputs and prints the results.

mod config;

use std::collections::BTreeMap;

use anyhow::Context;
use worklog_invoicing::{
    InvoicingPeriod, most_profitable_project, revenue_per_customer_for_month, sample,
};
use worklog_timekeeping::{Time, Workday};

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    worklog_observability::init(config.log_format);
    tracing::info!(?config, "starting worklog demo");

    print_timekeeping(&config)?;
    print_periods()?;
    print_revenue(&config)?;

    Ok(())
}

fn print_timekeeping(config: &Config) -> anyhow::Result<()> {
    println!("{}", Time::new(1, 30) > Time::new(0, 45));
    println!("{}", Time::new(1, 30) - Time::new(0, 45));
    println!(
        "{}",
        Workday::new(Time::from_hours(8), Time::from_hours(16))?.contains(Time::new(10, 30))
    );
    println!("{}", Workday::default().contains(Time::from_hours(7)));

    let long_day = Workday::new(Time::from_hours(8), Time::new(17, 15))?;
    println!("{}", long_day.calculate_overtime_with(config.standard_hours));
    let short_day = Workday::new(Time::from_hours(8), Time::from_hours(15))?;
    println!("{}", short_day.calculate_overtime_with(config.standard_hours));

    println!("{}", Time::from_fraction(3.5));

    if let Err(err) = Workday::new(Time::from_hours(-1), Time::from_hours(12)) {
        println!("{err}");
    }
    Ok(())
}

fn print_periods() -> anyhow::Result<()> {
    let january = InvoicingPeriod::new(1, 2018)?;
    let october = InvoicingPeriod::new(10, 2018)?;
    let december = InvoicingPeriod::new(12, 2018)?;

    println!("{}", january < october);
    println!("{}", january == InvoicingPeriod::new(1, 2018)?);
    println!("{}", october > january);
    println!("{}", InvoicingPeriod::new(5, 2018)?.within(january, december));
    println!("{}", december.successor()? == InvoicingPeriod::new(1, 2019)?);

    if let Err(err) = InvoicingPeriod::new(-5, 2018) {
        println!("{err}");
    }
    Ok(())
}

fn print_revenue(config: &Config) -> anyhow::Result<()> {
    let customers = sample::portfolio().context("building sample portfolio")?;

    let revenue: BTreeMap<String, u64> =
        revenue_per_customer_for_month(&customers, config.revenue_month)
            .into_iter()
            .collect();
    for (customer, total) in &revenue {
        println!("{customer}: {total}");
    }

    match most_profitable_project(&customers) {
        Some(project) => println!("most profitable: {}", project.name),
        None => println!("most profitable: none"),
    }
    Ok(())
}
