use crate::{ApiError, BearerToken};

use axum::extract::FromRequestParts;
use http::Request;

async fn extract(request: Request<()>) -> Result<BearerToken, ApiError> {
    let (mut parts, _) = request.into_parts();
    BearerToken::from_request_parts(&mut parts, &()).await
}

#[tokio::test]
async fn given_authorization_header_when_extracted_then_bearer_value() {
    // Given
    let request = Request::builder()
        .uri("/v1/auth/refresh")
        .header("Authorization", "Bearer abc.def.ghi")
        .body(())
        .unwrap();

    // When
    let BearerToken(token) = extract(request).await.unwrap();

    // Then
    assert_eq!(token, "abc.def.ghi");
}

#[tokio::test]
async fn given_query_token_and_header_when_extracted_then_query_wins() {
    let request = Request::builder()
        .uri("/v1/auth/refresh?token=from-query")
        .header("Authorization", "Bearer from-header")
        .body(())
        .unwrap();

    let BearerToken(token) = extract(request).await.unwrap();

    assert_eq!(token, "from-query");
}

#[tokio::test]
async fn given_empty_query_token_when_extracted_then_header_used() {
    let request = Request::builder()
        .uri("/v1/auth/refresh?token=")
        .header("Authorization", "Bearer from-header")
        .body(())
        .unwrap();

    let BearerToken(token) = extract(request).await.unwrap();

    assert_eq!(token, "from-header");
}

#[tokio::test]
async fn given_no_token_when_extracted_then_missing_token() {
    let request = Request::builder()
        .uri("/v1/auth/refresh")
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(())
        .unwrap();

    let result = extract(request).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "MISSING_TOKEN",
            ..
        })
    ));
}
