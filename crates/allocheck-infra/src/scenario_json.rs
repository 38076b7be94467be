//! JSON scenario files
//!
//! Expected shape:
//! `{ "capacities": { "cpu": 10 }, "requests": [ { "cpu": 3 }, ... ] }`

use std::path::Path;

use allocheck_domain::model::Scenario;
use allocheck_types::LoaderError;
use log::debug;

/// Load a scenario from a JSON file
pub fn load_scenario_from_json<P: AsRef<Path>>(path: P) -> Result<Scenario, LoaderError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(LoaderError::Empty(path.display().to_string()));
    }
    let scenario = parse_scenario(&content)?;
    debug!(
        "loaded scenario from {}: {} resources, {} requests",
        path.display(),
        scenario.capacities.len(),
        scenario.requests.len()
    );
    Ok(scenario)
}

pub fn parse_scenario(content: &str) -> Result<Scenario, LoaderError> {
    Ok(serde_json::from_str(content)?)
}
