use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity lifecycle status.
///
/// `AwaitingVerification -> EmailVerified -> Active`. No other transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdentityStatus {
    /// Registered, email not yet proven
    #[default]
    AwaitingVerification,
    /// Verification token redeemed, no password yet
    EmailVerified,
    /// Password set, may log in
    Active,
}

impl IdentityStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingVerification => "awaiting_verification",
            Self::EmailVerified => "email_verified",
            Self::Active => "active",
        }
    }

    /// Transition taken when the verification token is redeemed
    #[track_caller]
    pub fn verify_email(self) -> CoreErrorResult<Self> {
        match self {
            Self::AwaitingVerification => Ok(Self::EmailVerified),
            other => Err(other.rejected(Self::EmailVerified)),
        }
    }

    /// Transition taken when the password credential is set
    #[track_caller]
    pub fn activate(self) -> CoreErrorResult<Self> {
        match self {
            Self::EmailVerified => Ok(Self::Active),
            other => Err(other.rejected(Self::Active)),
        }
    }

    #[track_caller]
    fn rejected(self, to: Self) -> CoreError {
        CoreError::InvalidStatusTransition {
            from: self.as_str().to_string(),
            to: to.as_str().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl FromStr for IdentityStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "awaiting_verification" => Ok(Self::AwaitingVerification),
            "email_verified" => Ok(Self::EmailVerified),
            "active" => Ok(Self::Active),
            _ => Err(CoreError::InvalidIdentityStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for IdentityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
