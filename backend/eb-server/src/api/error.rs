//! REST API error types
//!
//! Every failure leaves the server as `{ "error": { "code", "message", "field"? } }`
//! with the matching HTTP status.

use eb_service::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        code: &'static str,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing, invalid or expired credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Duplicate resource or state conflict (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Transient exhaustion (503)
    #[error("Service unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn missing_token() -> Self {
        Self::Unauthorized {
            code: "MISSING_TOKEN",
            message: "Bearer token required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let body = match self {
            ApiError::Validation {
                code,
                message,
                field,
                ..
            } => ApiErrorBody {
                code: code.into(),
                message,
                field,
            },
            ApiError::Unauthorized { code, message, .. }
            | ApiError::Conflict { code, message, .. } => ApiErrorBody {
                code: code.into(),
                message,
                field: None,
            },
            ApiError::Forbidden { message, .. } => ApiErrorBody {
                code: "FORBIDDEN".into(),
                message,
                field: None,
            },
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Unavailable { message, .. } => ApiErrorBody {
                code: "SERVICE_UNAVAILABLE".into(),
                message,
                field: None,
            },
            // Never expose internal details to clients
            ApiError::Internal { .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message: "Internal server error".into(),
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(e: ServiceError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            ServiceError::Validation { message, field, .. } => ApiError::Validation {
                code: "VALIDATION_ERROR",
                message,
                field,
                location,
            },
            ServiceError::WeakPassword { message, .. } => ApiError::Validation {
                code: "WEAK_PASSWORD",
                message,
                field: Some("password".to_string()),
                location,
            },
            ServiceError::InvalidOrExpiredToken { .. } => ApiError::Validation {
                code: "INVALID_VERIFICATION_TOKEN",
                message: "Invalid or expired email verification token".to_string(),
                field: Some("token".to_string()),
                location,
            },
            ServiceError::InvalidCredentials { .. } => ApiError::Unauthorized {
                code: "INVALID_CREDENTIALS",
                message: "Invalid email or password".to_string(),
                location,
            },
            ServiceError::TokenInvalid { message, .. } => ApiError::Unauthorized {
                code: "INVALID_TOKEN",
                message: format!("Invalid token: {}", message),
                location,
            },
            ServiceError::TokenExpired { .. } => ApiError::Unauthorized {
                code: "TOKEN_EXPIRED",
                message: "Token expired".to_string(),
                location,
            },
            ServiceError::IdentityMismatch { .. } => ApiError::Forbidden {
                message: "Not permitted to access this resource".to_string(),
                location,
            },
            ServiceError::MissingCapability { capability, .. } => ApiError::Forbidden {
                message: format!("Token lacks capability '{}'", capability),
                location,
            },
            ServiceError::NotFound { entity, .. } => ApiError::NotFound {
                message: format!("{} not found", entity),
                location,
            },
            ServiceError::DuplicateResource { constraint, .. } => ApiError::Conflict {
                code: "DUPLICATE_RESOURCE",
                message: format!("Already exists: {}", constraint),
                location,
            },
            ServiceError::InvalidStatusTransition { message, .. } => ApiError::Conflict {
                code: "INVALID_STATUS_TRANSITION",
                message,
                location,
            },
            ServiceError::ResourceExhausted { attempts, .. } => ApiError::Unavailable {
                message: format!("Could not allocate a resource after {} attempts", attempts),
                location,
            },
            ServiceError::PersistenceFailure { message, .. }
            | ServiceError::Internal { message, .. } => ApiError::Internal { message, location },
        }
    }
}

/// Malformed or incomplete JSON bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::Validation {
            code: "INVALID_REQUEST",
            message: e.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            code: "VALIDATION_ERROR",
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
