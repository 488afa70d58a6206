use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VerifyEmailRequest {
    /// Verification token from the registration email
    pub token: String,
}
