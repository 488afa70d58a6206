use crate::repositories::row;
use crate::{DbError, Result as DbErrorResult};

use eb_core::{AccountNumber, BankAccount, ErrorLocation, NewBankAccount};

use std::panic::Location;
use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const SELECT_ACCOUNT: &str = r#"
    SELECT a.account_number, a.routing_code, a.name, a.account_type, a.balance, a.currency,
           a.created_at, a.updated_at, o.identity_id
    FROM accounts a
    JOIN ownership_links o ON o.account_number = a.account_number
"#;

pub struct AccountRepository;

impl AccountRepository {
    /// Insert an account under `account_number` with a zero balance
    pub async fn create<'e, E>(
        executor: E,
        account_number: &AccountNumber,
        draft: &NewBankAccount,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO accounts (account_number, routing_code, name, account_type, balance, currency)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(account_number.as_str())
        .bind(draft.routing_code())
        .bind(draft.name())
        .bind(draft.account_type().as_str())
        .bind(Decimal::ZERO.to_string())
        .bind(draft.currency())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_number<'e, E>(
        executor: E,
        account_number: &AccountNumber,
    ) -> DbErrorResult<Option<BankAccount>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{} WHERE a.account_number = ?", SELECT_ACCOUNT);
        let row = sqlx::query(&sql)
            .bind(account_number.as_str())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(map_account).transpose()
    }

    /// All accounts owned by `owner_id`, oldest first
    pub async fn find_by_owner<'e, E>(executor: E, owner_id: Uuid) -> DbErrorResult<Vec<BankAccount>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "{} WHERE o.identity_id = ? ORDER BY a.created_at ASC, a.account_number ASC",
            SELECT_ACCOUNT
        );
        let rows = sqlx::query(&sql)
            .bind(owner_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.iter().map(map_account).collect()
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM accounts")
            .fetch_one(executor)
            .await?;

        Ok(row.try_get("n")?)
    }
}

fn map_account(r: &SqliteRow) -> DbErrorResult<BankAccount> {
    let balance: String = r.try_get("balance")?;

    Ok(BankAccount {
        account_number: row::parsed(r, "account_number")?,
        owner_id: row::uuid(r, "identity_id")?,
        name: r.try_get("name")?,
        account_type: row::parsed(r, "account_type")?,
        balance: Decimal::from_str(&balance).map_err(|e| DbError::CorruptRow {
            column: "balance",
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
        currency: r.try_get("currency")?,
        routing_code: r.try_get("routing_code")?,
        created_at: row::timestamp(r, "created_at")?,
        updated_at: row::timestamp(r, "updated_at")?,
    })
}
