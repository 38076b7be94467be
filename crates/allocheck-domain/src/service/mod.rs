//! Domain services

pub mod feasibility_checker;

pub use feasibility_checker::{
    check_allocation, check_scenario, generate_feasibility_report, is_allocation_feasible,
    CheckOptions, FeasibilityReport, ResourceUsage, Verdict,
};
