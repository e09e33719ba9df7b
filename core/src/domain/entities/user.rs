//! User entity representing a registered phone number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity
///
/// Rows are created outside this service; the authentication flow only
/// touches `verification_id` and `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Primary key
    pub id: u64,

    /// Phone number in international form without the leading `+`
    pub phone: u64,

    /// Identifier of the outstanding provider challenge, if any
    pub verification_id: Option<String>,

    /// Last code accepted by the provider
    pub code: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with no pending challenge
    pub fn new(id: u64, phone: u64) -> Self {
        let now = Utc::now();
        Self {
            id,
            phone,
            verification_id: None,
            code: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records a freshly started challenge, replacing any outstanding one
    pub fn start_verification(&mut self, verification_id: impl Into<String>) {
        self.verification_id = Some(verification_id.into());
        self.updated_at = Utc::now();
    }

    /// Consumes the pending challenge after the provider accepted `code`
    pub fn complete_verification(&mut self, code: impl Into<String>) {
        self.verification_id = None;
        self.code = Some(code.into());
        self.updated_at = Utc::now();
    }
}
