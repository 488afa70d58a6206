#![allow(dead_code)]

//! Test infrastructure for eb-server API tests

use eb_auth::{TokenConfig, TokenService};
use eb_server::{AppState, build_router};
use eb_service::{BankingFacade, FacadeConfig, PasswordHasher, PasswordHasherConfig};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const PASSWORD: &str = "password123";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    eb_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let tokens = TokenService::new(TokenConfig::new(
        b"server-test-secret-at-least-32-bytes".to_vec(),
    ));
    let hasher = PasswordHasher::new(PasswordHasherConfig {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .expect("valid hasher params");

    let facade = BankingFacade::new(
        pool.clone(),
        Arc::new(tokens),
        Arc::new(hasher),
        FacadeConfig::default(),
    );

    AppState::new(pool, facade)
}

pub async fn create_test_app() -> (Router, AppState) {
    let state = create_test_app_state().await;
    (build_router(state.clone()), state)
}

/// Send one request and decode the JSON body (Null when empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

pub fn registration_body(email: &str) -> Value {
    json!({
        "name": "Test User",
        "email": email,
        "phoneNumber": "+14155552671",
        "line1": "1 Test Road",
        "town": "Testville",
        "postcode": "TE1 1ST"
    })
}

/// Verification token issued for `email`, read straight from the store
pub async fn verification_token_for(pool: &SqlitePool, email: &str) -> String {
    sqlx::query_scalar::<_, String>(
        "SELECT t.token FROM verification_tokens t JOIN identities i ON i.id = t.identity_id WHERE i.email = ?",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .expect("verification token exists")
}

/// Register, verify and set a password; returns (identity id, access token, refresh token)
pub async fn onboard(app: &Router, state: &AppState, email: &str) -> (String, String, String) {
    let (status, registered) = send(app, "POST", "/v1/users", None, Some(registration_body(email))).await;
    assert_eq!(status, StatusCode::CREATED);
    let identity_id = registered["user"]["id"].as_str().unwrap().to_string();

    let token = verification_token_for(&state.pool, email).await;
    let (status, verified) = send(
        app,
        "POST",
        "/v1/users/verify-email",
        None,
        Some(json!({ "token": token })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let set_password_token = verified["setPasswordToken"].as_str().unwrap().to_string();

    let (status, _) = send(
        app,
        "POST",
        "/v1/users/set-password",
        Some(&set_password_token),
        Some(json!({ "email": email, "password": PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, tokens) = send(
        app,
        "POST",
        "/v1/users/login",
        None,
        Some(json!({ "email": email, "password": PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    (
        identity_id,
        tokens["accessToken"].as_str().unwrap().to_string(),
        tokens["refreshToken"].as_str().unwrap().to_string(),
    )
}
