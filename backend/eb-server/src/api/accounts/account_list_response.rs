use crate::AccountDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccountListResponse {
    pub accounts: Vec<AccountDto>,
}
