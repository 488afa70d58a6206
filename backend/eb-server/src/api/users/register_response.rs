use crate::IdentityDto;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user: IdentityDto,
    pub verification_expires_at: DateTime<Utc>,
}
