//! Domain model types

pub mod capacity;
pub mod request;
pub mod scenario;

pub use capacity::Capacities;
pub use request::{Request, RequestEntry};
pub use scenario::Scenario;
