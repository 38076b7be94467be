//! Command handlers

use std::path::PathBuf;

use allocheck_app::app::{run_check, ScenarioSource};
use allocheck_app::config::Config;
use allocheck_domain::service::CheckOptions;
use allocheck_types::{Error, OutputFormat, Result};
use log::debug;

use crate::cli::{Cli, Commands};
use crate::output::output_report;

/// Exit status when the allocation is infeasible
const EXIT_INFEASIBLE: i32 = 2;

/// Execute CLI command, returning the process exit status
pub fn execute(cli: Cli) -> Result<i32> {
    let config = Config::load()?;
    debug!("config: {:?}", config);

    match &cli.command {
        Commands::Check {
            scenario,
            capacities,
            requests,
            allow_full,
        } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            let mut options = config.check_options();
            if *allow_full {
                options.require_leftover = false;
            }
            let source = scenario_source(scenario.clone(), capacities.clone(), requests.clone())?;
            cmd_check(&source, &options, output_format)
        }

        Commands::Config {
            show,
            set_output,
            set_require_leftover,
            reset,
        } => {
            cmd_config(*show, *set_output, *set_require_leftover, *reset)?;
            Ok(0)
        }
    }
}

fn scenario_source(
    scenario: Option<PathBuf>,
    capacities: Option<PathBuf>,
    requests: Option<PathBuf>,
) -> Result<ScenarioSource> {
    match (scenario, capacities, requests) {
        (Some(path), None, None) => Ok(ScenarioSource::Json(path)),
        (None, Some(capacities), Some(requests)) => Ok(ScenarioSource::Csv {
            capacities,
            requests,
        }),
        _ => Err(Error::InvalidInput(
            "Provide a JSON scenario file, or both --capacities and --requests".to_string(),
        )),
    }
}

fn cmd_check(
    source: &ScenarioSource,
    options: &CheckOptions,
    output_format: OutputFormat,
) -> Result<i32> {
    let report = run_check(source, options)?;
    output_report(output_format, &report)?;

    if report.is_feasible() {
        Ok(0)
    } else {
        Ok(EXIT_INFEASIBLE)
    }
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_require_leftover: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(require_leftover) = set_require_leftover {
        config.require_leftover = require_leftover;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_source_json() {
        let source = scenario_source(Some(PathBuf::from("s.json")), None, None).unwrap();
        assert_eq!(source, ScenarioSource::Json(PathBuf::from("s.json")));
    }

    #[test]
    fn test_scenario_source_csv() {
        let source = scenario_source(
            None,
            Some(PathBuf::from("c.csv")),
            Some(PathBuf::from("r.csv")),
        )
        .unwrap();
        assert!(matches!(source, ScenarioSource::Csv { .. }));
    }

    #[test]
    fn test_scenario_source_missing() {
        let err = scenario_source(None, None, None).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
