//! Allocation feasibility checking service

use std::collections::BTreeMap;
use std::fmt;

use allocheck_types::{Amount, ValidationError};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{Capacities, RequestEntry, Scenario};

/// Options for a feasibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOptions {
    /// Require at least one resource to keep leftover capacity
    pub require_leftover: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            require_leftover: true,
        }
    }
}

/// Outcome of a feasibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    Feasible,
    NegativeCapacity {
        resource: String,
        capacity: Amount,
    },
    NegativeAmount {
        request_index: usize,
        resource: String,
        amount: Amount,
    },
    UnknownResource {
        request_index: usize,
        resource: String,
    },
    OverCapacity {
        request_index: usize,
        resource: String,
        usage: Amount,
        capacity: Amount,
    },
    NoLeftover,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Feasible => write!(f, "feasible"),
            Verdict::NegativeCapacity { resource, capacity } => {
                write!(f, "capacity of '{}' is negative ({})", resource, capacity)
            }
            Verdict::NegativeAmount {
                request_index,
                resource,
                amount,
            } => write!(
                f,
                "request #{} asks for a negative amount of '{}' ({})",
                request_index, resource, amount
            ),
            Verdict::UnknownResource {
                request_index,
                resource,
            } => write!(
                f,
                "request #{} references undeclared resource '{}'",
                request_index, resource
            ),
            Verdict::OverCapacity {
                request_index,
                resource,
                usage,
                capacity,
            } => write!(
                f,
                "request #{} pushes '{}' to {} over its capacity of {}",
                request_index, resource, usage, capacity
            ),
            Verdict::NoLeftover => write!(f, "every resource is fully consumed"),
        }
    }
}

/// Usage of one declared resource at the point the check stopped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub resource: String,
    pub capacity: Amount,
    pub usage: Amount,
    pub leftover: Amount,
}

/// Detailed result of a feasibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    pub verdict: Verdict,
    pub usage: Vec<ResourceUsage>,
    /// Requests fully accumulated before the verdict was reached
    pub requests_processed: usize,
}

impl FeasibilityReport {
    pub fn is_feasible(&self) -> bool {
        self.verdict == Verdict::Feasible
    }
}

/// Check whether `requests` can all be served from `capacities`.
///
/// Returns `Ok(false)` for every semantic problem (negative values, unknown
/// resources, overflow, no leftover anywhere). Only a request element that is
/// not a mapping is an error.
pub fn is_allocation_feasible(
    capacities: &Capacities,
    requests: &[RequestEntry],
) -> Result<bool, ValidationError> {
    check_allocation(capacities, requests, &CheckOptions::default()).map(|r| r.is_feasible())
}

/// Run the feasibility check and report why it passed or failed.
pub fn check_allocation(
    capacities: &Capacities,
    requests: &[RequestEntry],
    options: &CheckOptions,
) -> Result<FeasibilityReport, ValidationError> {
    let mut usage: BTreeMap<&str, Amount> = BTreeMap::new();
    let mut requests_processed = 0;
    let verdict = evaluate(
        capacities,
        requests,
        options,
        &mut usage,
        &mut requests_processed,
    )?;
    debug!(
        "verdict after {} of {} requests: {}",
        requests_processed,
        requests.len(),
        verdict
    );

    let usage = capacities
        .iter()
        .map(|(resource, &capacity)| {
            let used = usage.get(resource.as_str()).copied().unwrap_or(0.0);
            ResourceUsage {
                resource: resource.clone(),
                capacity,
                usage: used,
                leftover: capacity - used,
            }
        })
        .collect();

    Ok(FeasibilityReport {
        verdict,
        usage,
        requests_processed,
    })
}

pub fn check_scenario(
    scenario: &Scenario,
    options: &CheckOptions,
) -> Result<FeasibilityReport, ValidationError> {
    check_allocation(&scenario.capacities, &scenario.requests, options)
}

fn evaluate<'a>(
    capacities: &'a Capacities,
    requests: &[RequestEntry],
    options: &CheckOptions,
    usage: &mut BTreeMap<&'a str, Amount>,
    requests_processed: &mut usize,
) -> Result<Verdict, ValidationError> {
    for (resource, &capacity) in capacities {
        if capacity < 0.0 {
            return Ok(Verdict::NegativeCapacity {
                resource: resource.clone(),
                capacity,
            });
        }
    }

    for (index, entry) in requests.iter().enumerate() {
        let request = entry.as_demand().ok_or_else(|| ValidationError::NotAMapping {
            index,
            found: entry.kind().to_string(),
        })?;

        for (resource, &amount) in request {
            if amount < 0.0 {
                return Ok(Verdict::NegativeAmount {
                    request_index: index,
                    resource: resource.clone(),
                    amount,
                });
            }

            let Some((declared, &capacity)) = capacities.get_key_value(resource) else {
                return Ok(Verdict::UnknownResource {
                    request_index: index,
                    resource: resource.clone(),
                });
            };

            let used = usage.entry(declared.as_str()).or_insert(0.0);
            *used += amount;
            if *used > capacity {
                return Ok(Verdict::OverCapacity {
                    request_index: index,
                    resource: resource.clone(),
                    usage: *used,
                    capacity,
                });
            }
        }
        *requests_processed += 1;
    }

    if !options.require_leftover || capacities.is_empty() {
        return Ok(Verdict::Feasible);
    }

    // Equality counts as fully consumed.
    let has_leftover = capacities.iter().any(|(resource, &capacity)| {
        usage.get(resource.as_str()).copied().unwrap_or(0.0) < capacity
    });
    if has_leftover {
        Ok(Verdict::Feasible)
    } else {
        Ok(Verdict::NoLeftover)
    }
}

pub fn generate_feasibility_report(report: &FeasibilityReport) -> String {
    let mut out = String::new();
    out.push_str("==================================================\n");
    out.push_str("           Allocation Feasibility Report          \n");
    out.push_str("==================================================\n\n");
    out.push_str("[Summary]\n");
    out.push_str(&format!(
        "  Result:              {}\n",
        if report.is_feasible() {
            "FEASIBLE"
        } else {
            "INFEASIBLE"
        }
    ));
    if !report.is_feasible() {
        out.push_str(&format!("  Reason:              {}\n", report.verdict));
    }
    out.push_str(&format!(
        "  Requests processed:  {}\n",
        report.requests_processed
    ));
    out.push_str(&format!("  Resources declared:  {}\n", report.usage.len()));
    out.push('\n');

    if report.usage.is_empty() {
        out.push_str("[No Resources Declared]\n\n");
    } else {
        out.push_str("[Resource Usage]\n");
        out.push_str("-".repeat(58).as_str());
        out.push('\n');
        out.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>12}\n",
            "Resource", "Capacity", "Usage", "Leftover"
        ));
        out.push_str("-".repeat(58).as_str());
        out.push('\n');
        for row in &report.usage {
            out.push_str(&format!(
                "{:<20} {:>12.2} {:>12.2} {:>12.2}\n",
                truncate_str(&row.resource, 19),
                row.capacity,
                row.usage,
                row.leftover
            ));
        }
        out.push('\n');
    }

    out.push_str("==================================================\n");
    out
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
