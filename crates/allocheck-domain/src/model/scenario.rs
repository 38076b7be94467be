//! Scenario: capacities plus the requests to check against them

use serde::{Deserialize, Serialize};

use super::{Capacities, RequestEntry};

/// Input for one feasibility check, as stored in a JSON scenario file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub capacities: Capacities,
    #[serde(default)]
    pub requests: Vec<RequestEntry>,
}

impl Scenario {
    pub fn new(capacities: Capacities, requests: Vec<RequestEntry>) -> Self {
        Self {
            capacities,
            requests,
        }
    }
}
