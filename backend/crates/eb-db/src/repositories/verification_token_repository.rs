use crate::Result as DbErrorResult;
use crate::repositories::row;

use eb_core::VerificationToken;

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

pub struct VerificationTokenRepository;

impl VerificationTokenRepository {
    pub async fn create<'e, E>(executor: E, token: &VerificationToken) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO verification_tokens (token, identity_id, expires_at, used_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(token.token.to_string())
        .bind(token.identity_id.to_string())
        .bind(token.expires_at.timestamp())
        .bind(token.used_at.map(|t| t.timestamp()))
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find<'e, E>(executor: E, token: Uuid) -> DbErrorResult<Option<VerificationToken>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT token, identity_id, expires_at, used_at
                FROM verification_tokens
                WHERE token = ?
            "#,
        )
        .bind(token.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(|r| -> DbErrorResult<VerificationToken> {
            Ok(VerificationToken {
                token: row::uuid(&r, "token")?,
                identity_id: row::uuid(&r, "identity_id")?,
                expires_at: row::timestamp(&r, "expires_at")?,
                used_at: row::optional_timestamp(&r, "used_at")?,
            })
        })
        .transpose()
    }

    /// Mark the token used if it is unredeemed and unexpired at `now`.
    ///
    /// The check and the write are one statement, so concurrent redemptions of the
    /// same token cannot both succeed. Returns the owning identity on success.
    pub async fn redeem<'e, E>(
        executor: E,
        token: Uuid,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Option<Uuid>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let now = now.timestamp();
        let row = sqlx::query(
            r#"
                UPDATE verification_tokens
                SET used_at = ?
                WHERE token = ? AND used_at IS NULL AND expires_at > ?
                RETURNING identity_id
            "#,
        )
        .bind(now)
        .bind(token.to_string())
        .bind(now)
        .fetch_optional(executor)
        .await?;

        row.map(|r| row::uuid(&r, "identity_id")).transpose()
    }

    pub async fn count_for_identity<'e, E>(executor: E, identity_id: Uuid) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM verification_tokens WHERE identity_id = ?")
            .bind(identity_id.to_string())
            .fetch_one(executor)
            .await?;

        Ok(row.try_get("n")?)
    }
}
