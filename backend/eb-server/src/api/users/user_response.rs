use crate::IdentityDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: IdentityDto,
}
