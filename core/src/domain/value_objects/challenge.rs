//! Reference to a verification challenge held by the provider.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque provider request id
///
/// The provider owns all challenge state; locally a challenge is nothing more
/// than the id it handed back from `start`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Challenge(String);

impl Challenge {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self(request_id.into())
    }

    pub fn request_id(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Challenge {
    fn from(request_id: String) -> Self {
        Self(request_id)
    }
}

impl From<&str> for Challenge {
    fn from(request_id: &str) -> Self {
        Self(request_id.to_string())
    }
}
