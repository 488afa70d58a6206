use eb_core::BankAccount;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub account_number: String,
    pub sort_code: String,
    pub name: String,
    pub account_type: String,
    pub balance: Decimal,
    pub currency: String,
    pub created_timestamp: DateTime<Utc>,
    pub updated_timestamp: DateTime<Utc>,
}

impl From<BankAccount> for AccountDto {
    fn from(a: BankAccount) -> Self {
        Self {
            account_number: a.account_number.into(),
            sort_code: a.routing_code,
            name: a.name,
            account_type: a.account_type.to_string(),
            balance: a.balance,
            currency: a.currency,
            created_timestamp: a.created_at,
            updated_timestamp: a.updated_at,
        }
    }
}
