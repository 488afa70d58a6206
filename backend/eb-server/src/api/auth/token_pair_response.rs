use eb_auth::TokenPair;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token expiry, unix seconds
    pub expires: i64,
    pub refresh_expires: i64,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires: pair.access_expires_at.timestamp(),
            refresh_expires: pair.refresh_expires_at.timestamp(),
        }
    }
}
