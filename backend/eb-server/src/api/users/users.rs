//! User lifecycle handlers: registration, email verification, password and login

use crate::{
    AccessCaller, ApiResult, AppState, BearerToken, IdentityDto, LoginRequest, MessageResponse,
    RegisterRequest, RegisterResponse, SetPasswordRequest, TokenPairResponse, UserResponse,
    VerifyEmailRequest, VerifyEmailResponse,
};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

/// POST /v1/users
///
/// Register a new identity awaiting email verification
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(request) = payload?;

    let provisioned = state.facade.register(request.into()).await?;

    // Stands in for the verification email
    log::debug!(
        "Verification token for identity {}: {}",
        provisioned.identity.id,
        provisioned.verification_token.token
    );

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            verification_expires_at: provisioned.verification_token.expires_at,
            user: provisioned.identity.into(),
        }),
    ))
}

/// POST /v1/users/verify-email
///
/// Redeem a verification token and receive a set-password token
pub async fn verify_email(
    State(state): State<AppState>,
    payload: Result<Json<VerifyEmailRequest>, JsonRejection>,
) -> ApiResult<Json<VerifyEmailResponse>> {
    let Json(request) = payload?;

    let verified = state.facade.verify_email(&request.token).await?;

    Ok(Json(VerifyEmailResponse {
        message: "Email verified successfully".to_string(),
        set_password_token: verified.set_password_token.token,
        expires: verified.set_password_token.expires_at.timestamp(),
    }))
}

/// POST /v1/users/set-password
///
/// Requires the set-password token as bearer
pub async fn set_password(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    payload: Result<Json<SetPasswordRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(request) = payload?;

    state
        .facade
        .set_password(&token, &request.email, &request.password)
        .await?;

    Ok(Json(MessageResponse {
        message: "Password set successfully".to_string(),
    }))
}

/// POST /v1/users/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenPairResponse>> {
    let Json(request) = payload?;

    let outcome = state
        .facade
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(outcome.tokens.into()))
}

/// GET /v1/users/{user_id}
///
/// Callers may only fetch themselves
pub async fn get_user(
    State(state): State<AppState>,
    AccessCaller(caller): AccessCaller,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let identity_id = Uuid::parse_str(&user_id)?;

    let identity = state.facade.get_identity(&caller, identity_id).await?;

    Ok(Json(UserResponse {
        user: IdentityDto::from(identity),
    }))
}
