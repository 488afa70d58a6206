use serde::Deserialize;

#[derive(Deserialize)]
pub struct SetPasswordRequest {
    pub email: String,
    pub password: String,
}
