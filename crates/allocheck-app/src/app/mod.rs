//! Application use cases

pub mod check_service;

pub use check_service::{load_scenario, run_check, ScenarioSource};
