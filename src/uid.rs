use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable component identifier.
///
/// Identifiers survive recomputation: the engine keys sensor readings by
/// `UID`, so the external bench store can match readings back to the
/// components it owns.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct UID(String);

impl From<&str> for UID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Default for UID {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl UID {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
