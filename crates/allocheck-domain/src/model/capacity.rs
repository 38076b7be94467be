//! Capacity type definitions

use std::collections::BTreeMap;

use allocheck_types::Amount;

/// Declared capacity per resource name
///
/// Ordered by resource name so reports and verdicts are deterministic.
pub type Capacities = BTreeMap<String, Amount>;
