const BEARER_PREFIX: &str = "Bearer ";

/// Locate the raw bearer token for a request.
///
/// A non-empty `token` query value wins; otherwise the `Authorization: Bearer <token>`
/// header is used. Returns `None` when neither carries a token.
pub fn extract_raw_token<'a>(
    query_token: Option<&'a str>,
    authorization: Option<&'a str>,
) -> Option<&'a str> {
    if let Some(token) = query_token.map(str::trim).filter(|t| !t.is_empty()) {
        return Some(token);
    }

    authorization
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
