use crate::AccountNumber;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Ties an identity to one of its accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnershipLink {
    pub id: Uuid,
    pub identity_id: Uuid,
    pub account_number: AccountNumber,
    pub created_at: DateTime<Utc>,
}

impl OwnershipLink {
    pub fn new(identity_id: Uuid, account_number: AccountNumber) -> Self {
        Self {
            id: Uuid::new_v4(),
            identity_id,
            account_number,
            created_at: Utc::now(),
        }
    }
}
