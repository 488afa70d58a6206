//! Bank account numbers and their generation.
//!
//! Numbers are 8 digits, zero-padded, drawn from `0..=99_999_999`. The generator
//! is not collision resistant on its own: uniqueness is enforced by the store and
//! the provisioning retry loop regenerates on conflict.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const ACCOUNT_NUMBER_DIGITS: usize = 8;
pub const MAX_ACCOUNT_NUMBER: u32 = 99_999_999;

/// Fixed-width numeric account number
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Build from a numeric value, zero-padding to eight digits
    #[track_caller]
    pub fn from_value(value: u32) -> CoreErrorResult<Self> {
        if value > MAX_ACCOUNT_NUMBER {
            return Err(CoreError::InvalidAccountNumber {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self(format!("{:0width$}", value, width = ACCOUNT_NUMBER_DIGITS)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountNumber {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        if s.len() != ACCOUNT_NUMBER_DIGITS || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidAccountNumber {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for AccountNumber {
    type Error = CoreError;

    fn try_from(value: String) -> CoreErrorResult<Self> {
        AccountNumber::from_str(&value)
    }
}

impl From<AccountNumber> for String {
    fn from(number: AccountNumber) -> Self {
        number.0
    }
}

impl std::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of candidate account numbers
pub trait AccountNumberGenerator: Send + Sync {
    fn generate(&self) -> AccountNumber;
}

/// Uniform random generator over the full 10^8 value space
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAccountNumberGenerator;

impl AccountNumberGenerator for RandomAccountNumberGenerator {
    fn generate(&self) -> AccountNumber {
        let value = rand::rng().random_range(0..=MAX_ACCOUNT_NUMBER);
        AccountNumber(format!("{:0width$}", value, width = ACCOUNT_NUMBER_DIGITS))
    }
}
