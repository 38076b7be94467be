//! Application service layer - config and the check use case

pub mod app;
pub mod config;
