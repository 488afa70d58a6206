use eb_core::ErrorLocation;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token signature {location}")]
    InvalidSignature { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Malformed token: {source} {location}")]
    MalformedToken {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing bearer token {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Token lacks capability '{capability}' {location}")]
    MissingCapability {
        capability: String,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    Encode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSignature { .. } => "INVALID_SIGNATURE",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MalformedToken { .. } => "MALFORMED_TOKEN",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::MissingToken { .. } => "MISSING_TOKEN",
            Self::MissingCapability { .. } => "MISSING_CAPABILITY",
            Self::Encode { .. } => "TOKEN_ENCODE_FAILED",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
