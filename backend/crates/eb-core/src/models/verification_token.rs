use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Single-use proof of control over the registered email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    pub token: Uuid,
    pub identity_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

impl VerificationToken {
    /// Issue a fresh, unredeemed token valid for `ttl` from `now`
    pub fn issue(identity_id: Uuid, ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            token: Uuid::new_v4(),
            identity_id,
            expires_at: now + ttl,
            used_at: None,
        }
    }

    pub fn is_redeemed(&self) -> bool {
        self.used_at.is_some()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Unredeemed and strictly before expiry
    pub fn is_redeemable(&self, now: DateTime<Utc>) -> bool {
        !self.is_redeemed() && !self.is_expired(now)
    }
}
