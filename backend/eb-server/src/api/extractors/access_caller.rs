//! Axum extractor for endpoints that need a logged-in caller

use crate::{ApiError, AppState};

use super::raw_token_from_parts;

use eb_service::Caller;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Caller resolved from a validated access token.
///
/// Rejects with 401 when the token is missing, invalid, expired or not an access token.
pub struct AccessCaller(pub Caller);

impl FromRequestParts<AppState> for AccessCaller {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = raw_token_from_parts(parts)
            .ok_or_else(ApiError::missing_token)
            .and_then(|raw| state.facade.authenticate(&raw).map_err(ApiError::from))
            .map(|caller| {
                log::debug!("Authenticated identity {}", caller.identity_id);
                AccessCaller(caller)
            });

        async move { result }
    }
}
