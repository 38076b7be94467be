//! Infrastructure layer - loaders for capacities and requests

pub mod scenario_csv;
pub mod scenario_json;

pub use scenario_csv::{load_capacities_from_csv, load_requests_from_csv};
pub use scenario_json::{load_scenario_from_json, parse_scenario};
