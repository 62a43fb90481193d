//! Per account/region summary of an aggregation.

use super::terminal::format_field;
use crate::models::{Aggregation, Subnets};
use colored::Colorize;
use std::error::Error;

/// One line of the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub account: String,
    pub region: String,
    pub zones: Vec<String>,
    /// Ids of the requested purpose; zero when the region has none.
    pub subnet_count: usize,
}

pub fn summary_rows(aggregation: &Aggregation) -> Vec<SummaryRow> {
    aggregation
        .availability_zones
        .iter()
        .map(|(account, region, zones)| SummaryRow {
            account: account.to_string(),
            region: region.to_string(),
            zones: zones.iter().cloned().collect(),
            subnet_count: aggregation
                .subnet_ids
                .get(account, region)
                .map_or(0, Vec::len),
        })
        .collect()
}

/// Print the summary table to stdout.
pub fn print_summary(aggregation: &Aggregation, purpose: &str) -> Result<(), Box<dyn Error>> {
    let rows = summary_rows(aggregation);
    log::info!("# Got {} account/region pairs", rows.len());

    println!(
        r#"{account},{region},{count},"zones""#,
        account = format_field("account", 16),
        region = format_field("region", 16),
        count = format_field(format!("{purpose}_ids"), 14),
    );
    for row in rows {
        let count = format_field(row.subnet_count, 14);
        println!(
            "{account},{region},{count},{zones}",
            account = format_field(&row.account, 16),
            region = format_field(&row.region, 16),
            count = if row.subnet_count == 0 {
                count.red()
            } else {
                count.normal()
            },
            zones = format_field(row.zones.join(" "), 0),
        );
    }
    Ok(())
}

/// Print a resolver result as pretty JSON to stdout.
pub fn print_json(subnets: &Subnets) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(subnets)?);
    Ok(())
}
