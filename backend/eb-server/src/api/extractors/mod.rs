pub mod access_caller;
pub mod bearer_token;

use eb_auth::extract_raw_token;

use axum::extract::Query;
use axum::http::{header::AUTHORIZATION, request::Parts};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct TokenQuery {
    #[serde(default)]
    token: Option<String>,
}

/// Raw token from the `token` query parameter or the `Authorization` header
fn raw_token_from_parts(parts: &Parts) -> Option<String> {
    let query = Query::<TokenQuery>::try_from_uri(&parts.uri)
        .map(|Query(q)| q)
        .unwrap_or_default();
    let authorization = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    extract_raw_token(query.token.as_deref(), authorization).map(str::to_string)
}
