use crate::{
    AppState, create_account, get_account, get_user, health, list_accounts, login, refresh,
    register_user, set_password, verify_email,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Users
        .route("/v1/users", post(register_user))
        .route("/v1/users/verify-email", post(verify_email))
        .route("/v1/users/set-password", post(set_password))
        .route("/v1/users/login", post(login))
        .route("/v1/users/{user_id}", get(get_user))
        // Tokens
        .route("/v1/auth/refresh", post(refresh))
        // Accounts
        .route("/v1/accounts", post(create_account).get(list_accounts))
        .route("/v1/accounts/{account_number}", get(get_account))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
