//! Exported function summary

use serde::{Deserialize, Serialize};

/// One exported top-level function: its name and positional parameter names
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    pub parameters: Vec<String>,
}

impl FunctionRecord {
    pub fn new(name: impl Into<String>, parameters: Vec<String>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }
}
