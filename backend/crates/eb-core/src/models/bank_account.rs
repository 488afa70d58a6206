use crate::{AccountNumber, AccountType};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankAccount {
    pub account_number: AccountNumber,
    pub owner_id: Uuid,
    pub name: String,
    pub account_type: AccountType,
    /// Exact decimal, zero at creation
    pub balance: Decimal,
    pub currency: String,
    pub routing_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
