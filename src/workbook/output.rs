use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{Cost, SummaryRow};

/// Column order of the summary file.
pub const SUMMARY_HEADER: [&str; 5] = [
    "dish",
    "recipe_cash_cost",
    "temp_degC",
    "time_mins",
    "most_energy",
];

/// Decimal places kept for recipe costs.
const COST_DECIMALS: u32 = 2;

/// Cost rounded to cents; unknown costs are written as `NaN`.
pub fn format_cost(cost: Cost) -> String {
    cost.rounded(COST_DECIMALS).to_string()
}

pub fn format_number(value: f64) -> String {
    value.to_string()
}

pub fn format_flag(flag: bool) -> &'static str {
    if flag { "True" } else { "False" }
}

/// Write the summary rows to a CSV file.
pub fn write_summary<P: AsRef<Path>>(rows: &[SummaryRow], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(SUMMARY_HEADER)?;

    for row in rows {
        wtr.write_record([
            row.dish.clone(),
            format_cost(row.recipe_cash_cost),
            format_number(row.temp_deg_c),
            format_number(row.time_mins),
            format_flag(row.most_energy).to_string(),
        ])?;
    }

    wtr.flush()?;
    info!("Saved summary to {}", path.display());
    Ok(())
}
