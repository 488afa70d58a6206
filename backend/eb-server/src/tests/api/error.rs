use crate::ApiError;

use eb_core::ErrorLocation;
use eb_service::ServiceError;

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    // Given
    let error = ApiError::from(ServiceError::Validation {
        message: "email is not a valid address".into(),
        field: Some("email".into()),
        location: here(),
    });

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn given_invalid_verification_token_when_rendered_then_400() {
    let error = ApiError::from(ServiceError::InvalidOrExpiredToken { location: here() });

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INVALID_VERIFICATION_TOKEN");
}

#[tokio::test]
async fn given_credential_and_token_failures_when_rendered_then_401() {
    let errors = [
        ServiceError::InvalidCredentials { location: here() },
        ServiceError::TokenExpired { location: here() },
        ServiceError::TokenInvalid {
            message: "invalid_signature".into(),
            location: here(),
        },
    ];

    for error in errors {
        let response = ApiError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
    assert_eq!(
        ApiError::missing_token().into_response().status(),
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn given_identity_mismatch_when_rendered_then_403() {
    let error = ApiError::from(ServiceError::IdentityMismatch { location: here() });

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn given_duplicate_when_rendered_then_409() {
    let error = ApiError::from(ServiceError::DuplicateResource {
        constraint: "identities.email".into(),
        location: here(),
    });

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "DUPLICATE_RESOURCE");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_resource_exhausted_when_rendered_then_503() {
    let error = ApiError::from(ServiceError::ResourceExhausted {
        attempts: 3,
        location: here(),
    });

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn given_persistence_failure_when_rendered_then_500_without_details() {
    let error = ApiError::from(ServiceError::PersistenceFailure {
        message: "SQLx error: database is locked".into(),
        location: here(),
    });

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(!message.contains("SQLx"));
}
