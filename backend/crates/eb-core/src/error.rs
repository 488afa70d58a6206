use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Password does not meet policy: {message} {location}")]
    WeakPassword {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid identity status: {value} {location}")]
    InvalidIdentityStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid status transition: {from} -> {to} {location}")]
    InvalidStatusTransition {
        from: String,
        to: String,
        location: ErrorLocation,
    },

    #[error("Invalid account type: {value} {location}")]
    InvalidAccountType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid account number: {value} {location}")]
    InvalidAccountNumber {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field name when the error concerns a specific input field
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::WeakPassword { .. } => Some("password"),
            Self::InvalidAccountType { .. } => Some("accountType"),
            Self::InvalidAccountNumber { .. } => Some("accountNumber"),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
