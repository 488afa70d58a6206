use crate::Result as DbErrorResult;
use crate::repositories::row;

use eb_core::{AccountNumber, OwnershipLink};

use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct OwnershipLinkRepository;

impl OwnershipLinkRepository {
    pub async fn create<'e, E>(executor: E, link: &OwnershipLink) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO ownership_links (id, identity_id, account_number, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(link.id.to_string())
        .bind(link.identity_id.to_string())
        .bind(link.account_number.as_str())
        .bind(link.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_account<'e, E>(
        executor: E,
        account_number: &AccountNumber,
    ) -> DbErrorResult<Option<OwnershipLink>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, identity_id, account_number, created_at
                FROM ownership_links
                WHERE account_number = ?
            "#,
        )
        .bind(account_number.as_str())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(map_link).transpose()
    }

    pub async fn find_by_identity<'e, E>(
        executor: E,
        identity_id: Uuid,
    ) -> DbErrorResult<Vec<OwnershipLink>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, identity_id, account_number, created_at
                FROM ownership_links
                WHERE identity_id = ?
                ORDER BY created_at ASC
            "#,
        )
        .bind(identity_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(map_link).collect()
    }
}

fn map_link(r: &SqliteRow) -> DbErrorResult<OwnershipLink> {
    Ok(OwnershipLink {
        id: row::uuid(r, "id")?,
        identity_id: row::uuid(r, "identity_id")?,
        account_number: row::parsed(r, "account_number")?,
        created_at: row::timestamp(r, "created_at")?,
    })
}
