//! Request type definitions

use std::collections::BTreeMap;

use allocheck_types::Amount;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single demand: resource name to amount requested
pub type Request = BTreeMap<String, Amount>;

/// One element of a request sequence as supplied by a caller
///
/// Anything that does not decode as a name-to-number mapping is kept as
/// `Malformed` so the checker can reject it when it is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestEntry {
    Demand(Request),
    Malformed(Value),
}

impl RequestEntry {
    /// Returns the demand if this entry is a well-formed mapping
    pub fn as_demand(&self) -> Option<&Request> {
        match self {
            RequestEntry::Demand(request) => Some(request),
            RequestEntry::Malformed(_) => None,
        }
    }

    /// Short description of the entry's shape, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            RequestEntry::Demand(_) => "mapping",
            RequestEntry::Malformed(value) => match value {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Array(_) => "array",
                Value::Object(_) => "mapping with non-numeric amounts",
            },
        }
    }
}

impl From<Request> for RequestEntry {
    fn from(request: Request) -> Self {
        RequestEntry::Demand(request)
    }
}
