//! Domain models and services for allocation feasibility

pub mod model;
pub mod service;
