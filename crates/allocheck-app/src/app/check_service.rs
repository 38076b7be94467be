//! Check Service - load a scenario from disk and run the feasibility check

use std::path::{Path, PathBuf};

use allocheck_domain::model::Scenario;
use allocheck_domain::service::{check_scenario, CheckOptions, FeasibilityReport};
use allocheck_infra::{load_capacities_from_csv, load_requests_from_csv, load_scenario_from_json};
use allocheck_types::{Error, Result};
use log::info;

/// Where a scenario is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioSource {
    /// Single JSON file holding capacities and requests
    Json(PathBuf),
    /// Separate CSV files for capacities and requests
    Csv {
        capacities: PathBuf,
        requests: PathBuf,
    },
}

pub fn load_scenario(source: &ScenarioSource) -> Result<Scenario> {
    match source {
        ScenarioSource::Json(path) => {
            ensure_exists(path, "Scenario file")?;
            info!("Loading scenario from: {}", path.display());
            Ok(load_scenario_from_json(path)?)
        }
        ScenarioSource::Csv {
            capacities,
            requests,
        } => {
            ensure_exists(capacities, "Capacities file")?;
            ensure_exists(requests, "Requests file")?;
            info!("Loading capacities from: {}", capacities.display());
            let caps = load_capacities_from_csv(capacities)?;
            info!("Loading requests from: {}", requests.display());
            let reqs = load_requests_from_csv(requests)?;
            Ok(Scenario::new(caps, reqs))
        }
    }
}

/// Load the scenario and check it. A malformed request surfaces as
/// `Error::Validation`; an infeasible allocation is an `Ok` report.
pub fn run_check(source: &ScenarioSource, options: &CheckOptions) -> Result<FeasibilityReport> {
    let scenario = load_scenario(source)?;
    info!(
        "Checking {} requests against {} resources",
        scenario.requests.len(),
        scenario.capacities.len()
    );
    let report = check_scenario(&scenario, options)?;
    info!("Result: {}", report.verdict);
    Ok(report)
}

fn ensure_exists(path: &Path, label: &str) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "{} not found: {}",
            label,
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use allocheck_domain::service::Verdict;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_check_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        fs::write(&path, r#"{"capacities": {"cpu": 10}, "requests": [{"cpu": 3}, {"cpu": 4}]}"#)
            .unwrap();

        let report = run_check(&ScenarioSource::Json(path), &CheckOptions::default()).unwrap();
        assert!(report.is_feasible());
        assert_eq!(report.usage[0].leftover, 3.0);
    }

    #[test]
    fn test_run_check_csv() {
        let dir = tempdir().unwrap();
        let capacities = dir.path().join("caps.csv");
        let requests = dir.path().join("reqs.csv");
        fs::write(&capacities, "cpu,5\n").unwrap();
        fs::write(&requests, "r1,cpu,5\n").unwrap();

        let source = ScenarioSource::Csv {
            capacities,
            requests,
        };
        let report = run_check(&source, &CheckOptions::default()).unwrap();
        assert_eq!(report.verdict, Verdict::NoLeftover);
    }

    #[test]
    fn test_run_check_validation_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        fs::write(&path, r#"{"capacities": {"cpu": 5}, "requests": [{"cpu": 1}, ["cpu", 2]]}"#)
            .unwrap();

        let err = run_check(&ScenarioSource::Json(path), &CheckOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let source = ScenarioSource::Json(dir.path().join("missing.json"));
        let err = load_scenario(&source).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_loader_error_is_wrapped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        fs::write(&path, "not json").unwrap();
        let err = load_scenario(&ScenarioSource::Json(path)).unwrap_err();
        assert!(matches!(err, Error::Loader(_)));
    }
}
