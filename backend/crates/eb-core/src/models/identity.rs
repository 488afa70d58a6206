use crate::{Address, IdentityStatus};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A registered person, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    /// PHC-formatted hash, absent until the password is set
    #[serde(skip)]
    pub password_hash: Option<String>,
    pub status: IdentityStatus,
    pub address: Address,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.status == IdentityStatus::Active
    }

    /// Emails are stored normalized, so compare against the normalized form
    pub fn email_matches(&self, email: &str) -> bool {
        self.email == email.trim().to_lowercase()
    }
}
