use crate::{ApiResult, AppState, BearerToken, TokenPairResponse};

use axum::{Json, extract::State};

/// POST /v1/auth/refresh
///
/// Exchange a refresh token (bearer) for a fresh pair
pub async fn refresh(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<Json<TokenPairResponse>> {
    let pair = state.facade.refresh_tokens(&token)?;

    Ok(Json(pair.into()))
}
