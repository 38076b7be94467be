//! Output formatting module

use allocheck_domain::service::{generate_feasibility_report, FeasibilityReport};
use allocheck_types::{OutputFormat, Result};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    feasible: bool,
    #[serde(flatten)]
    report: &'a FeasibilityReport,
}

pub fn output_report(output_format: OutputFormat, report: &FeasibilityReport) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonReport {
                feasible: report.is_feasible(),
                report,
            })?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("{}", generate_feasibility_report(report));
        }
    }
    Ok(())
}
