use eb_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Unique constraints the schema enforces, as reported by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UniqueConstraint {
    IdentityEmail,
    AccountNumber,
    OwnershipLink,
    Other(String),
}

impl UniqueConstraint {
    /// Classify an SQLite `UNIQUE constraint failed: <table>.<column>` message
    pub fn from_message(message: &str) -> Self {
        if message.contains("identities.email") {
            Self::IdentityEmail
        } else if message.contains("ownership_links.") {
            Self::OwnershipLink
        } else if message.contains("accounts.account_number") {
            Self::AccountNumber
        } else {
            Self::Other(message.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::IdentityEmail => "identity_email",
            Self::AccountNumber => "account_number",
            Self::OwnershipLink => "ownership_link",
            Self::Other(message) => message,
        }
    }
}

impl std::fmt::Display for UniqueConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated: {constraint} {location}")]
    Duplicate {
        constraint: UniqueConstraint,
        location: ErrorLocation,
    },

    #[error("Gave up after {attempts} attempts {location}")]
    RetriesExhausted {
        attempts: u32,
        location: ErrorLocation,
    },

    #[error("Status of {entity_id} is not {expected} {location}")]
    StatusConflict {
        entity_id: String,
        expected: String,
        location: ErrorLocation,
    },

    #[error("Row missing after commit: {entity} {key} {location}")]
    MissingRow {
        entity: &'static str,
        key: String,
        location: ErrorLocation,
    },

    #[error("Corrupt row in {column}: {message} {location}")]
    CorruptRow {
        column: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Unique violation on the account number, which provisioning resolves by regenerating
    pub fn is_account_number_collision(&self) -> bool {
        matches!(
            self,
            Self::Duplicate {
                constraint: UniqueConstraint::AccountNumber,
                ..
            }
        )
    }

    /// Lock contention or pool exhaustion that may clear on its own
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Sqlx { source, .. } => match source {
                sqlx::Error::PoolTimedOut => true,
                sqlx::Error::Database(e) => matches!(
                    e.code().as_deref(),
                    // SQLITE_BUSY, SQLITE_LOCKED
                    Some("5") | Some("6")
                ),
                _ => false,
            },
            _ => false,
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(e) = &source {
            if e.is_unique_violation() {
                return Self::Duplicate {
                    constraint: UniqueConstraint::from_message(e.message()),
                    location: ErrorLocation::from(Location::caller()),
                };
            }
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
