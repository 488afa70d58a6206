use eb_auth::AuthError;
use eb_core::{CoreError, ErrorLocation};
use eb_db::DbError;

use std::panic::Location;

use thiserror::Error;

/// Failure taxonomy seen by callers of the facade
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation failed: {message} {location}")]
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

    #[error("Resource already exists: {constraint} {location}")]
    DuplicateResource {
        constraint: String,
        location: ErrorLocation,
    },

    #[error("Verification token is invalid or expired {location}")]
    InvalidOrExpiredToken { location: ErrorLocation },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Caller does not own this resource {location}")]
    IdentityMismatch { location: ErrorLocation },

    #[error("Caller lacks capability '{capability}' {location}")]
    MissingCapability {
        capability: String,
        location: ErrorLocation,
    },

    #[error("{entity} not found {location}")]
    NotFound {
        entity: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid status transition: {message} {location}")]
    InvalidStatusTransition {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token invalid: {message} {location}")]
    TokenInvalid {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Resource exhausted after {attempts} attempts {location}")]
    ResourceExhausted {
        attempts: u32,
        location: ErrorLocation,
    },

    #[error("Persistence failure: {message} {location}")]
    PersistenceFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound {
            entity,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn identity_mismatch() -> Self {
        Self::IdentityMismatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_or_expired_token() -> Self {
        Self::InvalidOrExpiredToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let field = err.field().map(str::to_string);
        match err {
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location,
            },
            CoreError::WeakPassword { message, .. } => Self::WeakPassword { message, location },
            CoreError::InvalidStatusTransition { from, to, .. } => Self::InvalidStatusTransition {
                message: format!("{} -> {}", from, to),
                location,
            },
            CoreError::InvalidAccountType { value, .. } => Self::Validation {
                message: format!("accountType must be 'private' or 'business', got '{}'", value),
                field,
                location,
            },
            CoreError::InvalidAccountNumber { value, .. } => Self::Validation {
                message: format!("accountNumber must be 8 digits, got '{}'", value),
                field,
                location,
            },
            CoreError::InvalidIdentityStatus { value, .. } => Self::PersistenceFailure {
                message: format!("stored identity status is invalid: {}", value),
                location,
            },
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            DbError::Duplicate { constraint, .. } => Self::DuplicateResource {
                constraint: constraint.to_string(),
                location,
            },
            DbError::RetriesExhausted { attempts, .. } => {
                Self::ResourceExhausted { attempts, location }
            }
            DbError::StatusConflict {
                entity_id,
                expected,
                ..
            } => Self::InvalidStatusTransition {
                message: format!("{} is no longer {}", entity_id, expected),
                location,
            },
            other => Self::PersistenceFailure {
                message: other.to_string(),
                location,
            },
        }
    }
}

impl From<AuthError> for ServiceError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            AuthError::TokenExpired { .. } => Self::TokenExpired { location },
            AuthError::MissingCapability { capability, .. } => Self::TokenInvalid {
                message: format!("token lacks capability '{}'", capability),
                location,
            },
            e @ AuthError::Encode { .. } => Self::Internal {
                message: e.to_string(),
                location,
            },
            other => Self::TokenInvalid {
                message: other.error_code().to_lowercase(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
