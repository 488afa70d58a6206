use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailResponse {
    pub message: String,
    pub set_password_token: String,
    /// Unix seconds
    pub expires: i64,
}
