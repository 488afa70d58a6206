use crate::provisioning::retry::{RetryConfig, with_retry};
use crate::provisioning::transaction::db_transaction;
use crate::{AccountRepository, DbError, OwnershipLinkRepository, Result as DbErrorResult};

use eb_core::{
    AccountNumber, AccountNumberGenerator, BankAccount, ErrorLocation, NewBankAccount,
    OwnershipLink,
};

use std::panic::Location;

use sqlx::SqlitePool;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Create an account and its ownership link under a freshly generated number.
///
/// A number collision reruns the whole transaction with a new candidate, up to
/// `max_attempts` times in total. Exhaustion yields `DbError::RetriesExhausted`.
pub async fn provision_account(
    pool: &SqlitePool,
    generator: &dyn AccountNumberGenerator,
    draft: &NewBankAccount,
    max_attempts: u32,
) -> DbErrorResult<BankAccount> {
    let retry = RetryConfig::immediate(max_attempts);

    let account_number = with_retry(&retry, "provision_account", || {
        insert_account(pool, draft, generator.generate())
    })
    .await
    .map_err(|e| {
        if e.is_account_number_collision() {
            log::warn!(
                "No free account number for {} after {} attempts",
                draft.owner_id(),
                max_attempts
            );
            DbError::RetriesExhausted {
                attempts: max_attempts,
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            e
        }
    })?;

    let account = AccountRepository::find_by_number(pool, &account_number)
        .await?
        .ok_or_else(|| DbError::MissingRow {
            entity: "account",
            key: account_number.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!(
        "Provisioned account {} for identity {}",
        account.account_number,
        account.owner_id
    );

    Ok(account)
}

async fn insert_account(
    pool: &SqlitePool,
    draft: &NewBankAccount,
    candidate: AccountNumber,
) -> DbErrorResult<AccountNumber> {
    db_transaction(pool, "insert_account", move |mut tx| async move {
        AccountRepository::create(&mut *tx, &candidate, draft).await?;
        let link = OwnershipLink::new(draft.owner_id(), candidate.clone());
        OwnershipLinkRepository::create(&mut *tx, &link).await?;
        Ok((candidate, tx))
    })
    .await
}
