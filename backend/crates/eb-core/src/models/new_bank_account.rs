use crate::validation::require_non_empty;
use crate::{AccountSettings, AccountType, Result as CoreErrorResult};

use std::str::FromStr;

use uuid::Uuid;

/// Validated request for a new account. The account number is assigned
/// per provisioning attempt, so it is not part of the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBankAccount {
    owner_id: Uuid,
    name: String,
    account_type: AccountType,
    routing_code: String,
    currency: String,
}

impl NewBankAccount {
    #[track_caller]
    pub fn new(
        owner_id: Uuid,
        name: &str,
        account_type: &str,
        settings: &AccountSettings,
    ) -> CoreErrorResult<Self> {
        require_non_empty("name", name)?;
        let account_type = AccountType::from_str(account_type)?;

        Ok(Self {
            owner_id,
            name: name.trim().to_string(),
            account_type,
            routing_code: settings.routing_code.clone(),
            currency: settings.currency.clone(),
        })
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn routing_code(&self) -> &str {
        &self.routing_code
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}
