use crate::ApiError;

use super::raw_token_from_parts;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Unvalidated bearer token, for endpoints that check a non-access token kind themselves
pub struct BearerToken(pub String);

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let raw = raw_token_from_parts(parts);

        async move { raw.map(BearerToken).ok_or_else(ApiError::missing_token) }
    }
}
