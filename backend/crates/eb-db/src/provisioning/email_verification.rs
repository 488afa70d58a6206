use crate::provisioning::retry::{RetryConfig, with_retry};
use crate::provisioning::transaction::db_transaction;
use crate::{DbError, IdentityRepository, Result as DbErrorResult, VerificationTokenRepository};

use eb_core::{ErrorLocation, IdentityStatus};

use std::future::Future;
use std::panic::Location;
use std::pin::Pin;

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Future returned by a status-update step; resolves to whether a row changed
pub type StatusUpdateFuture<'c> = Pin<Box<dyn Future<Output = DbErrorResult<bool>> + Send + 'c>>;

/// Move `identity_id` from `awaiting_verification` to `email_verified`
pub fn mark_email_verified(
    conn: &mut SqliteConnection,
    identity_id: Uuid,
) -> StatusUpdateFuture<'_> {
    Box::pin(IdentityRepository::transition_status(
        conn,
        identity_id,
        IdentityStatus::AwaitingVerification,
        IdentityStatus::EmailVerified,
    ))
}

/// Redeem a verification token and mark its identity `email_verified`, atomically.
///
/// Returns `None` when the token is unknown, already redeemed or expired at `now`.
pub async fn redeem_verification_token(
    pool: &SqlitePool,
    token: Uuid,
    now: DateTime<Utc>,
    retry: &RetryConfig,
) -> DbErrorResult<Option<Uuid>> {
    redeem_verification_token_with(pool, token, now, retry, mark_email_verified).await
}

/// Redeem a verification token, then run `update` inside the same transaction.
///
/// `update` is retried on retryable failures per `retry`. If it still fails, or reports
/// that no row changed, the transaction rolls back and the token stays unredeemed.
pub async fn redeem_verification_token_with<F>(
    pool: &SqlitePool,
    token: Uuid,
    now: DateTime<Utc>,
    retry: &RetryConfig,
    update: F,
) -> DbErrorResult<Option<Uuid>>
where
    F: for<'c> Fn(&'c mut SqliteConnection, Uuid) -> StatusUpdateFuture<'c>,
{
    db_transaction(pool, "verify_email", move |mut tx| async move {
        let Some(identity_id) = VerificationTokenRepository::redeem(&mut *tx, token, now).await?
        else {
            return Ok((None, tx));
        };

        let tx = Mutex::new(tx);
        let shared_tx = &tx;
        let update = &update;
        let updated = with_retry(retry, "verify_email status update", move || async move {
            let mut guard = shared_tx.lock().await;
            update(&mut **guard, identity_id).await
        })
        .await?;

        if !updated {
            return Err(DbError::StatusConflict {
                entity_id: identity_id.to_string(),
                expected: IdentityStatus::AwaitingVerification.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok((Some(identity_id), tx.into_inner()))
    })
    .await
}
