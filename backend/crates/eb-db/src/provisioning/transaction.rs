use crate::Result as DbErrorResult;

use std::future::Future;

use sqlx::{Sqlite, SqlitePool, Transaction};

/// Run `operation` inside a transaction, committing on `Ok`.
///
/// The operation hands the transaction back with its result. On `Err`, or if the
/// future is dropped or panics, the transaction is dropped and rolls back.
pub async fn db_transaction<F, Fut, T>(
    pool: &SqlitePool,
    operation_name: &str,
    operation: F,
) -> DbErrorResult<T>
where
    F: FnOnce(Transaction<'static, Sqlite>) -> Fut,
    Fut: Future<Output = DbErrorResult<(T, Transaction<'static, Sqlite>)>>,
{
    log::debug!("Starting transaction: {}", operation_name);

    let tx = pool.begin().await?;

    match operation(tx).await {
        Ok((result, tx)) => {
            tx.commit().await?;
            log::debug!("Transaction {} committed", operation_name);
            Ok(result)
        }
        Err(e) => {
            log::warn!("Transaction {} failed: {}", operation_name, e);
            // Transaction automatically rolled back on drop
            Err(e)
        }
    }
}
