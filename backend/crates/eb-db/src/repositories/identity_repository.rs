use crate::Result as DbErrorResult;
use crate::repositories::row;

use eb_core::{Address, Identity, IdentityStatus, NewIdentity};

use chrono::Utc;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const SELECT_IDENTITY: &str = r#"
    SELECT i.id, i.name, i.email, i.phone_number, i.password_hash, i.status, i.created_at,
           a.line1, a.line2, a.line3, a.town, a.county, a.postcode
    FROM identities i
    JOIN addresses a ON a.identity_id = i.id
"#;

pub struct IdentityRepository;

impl IdentityRepository {
    /// Insert the identity row. `created_at` is assigned by the store.
    pub async fn create<'e, E>(executor: E, identity: &NewIdentity) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO identities (id, name, email, phone_number, status)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(identity.id().to_string())
        .bind(identity.name())
        .bind(identity.email())
        .bind(identity.phone_number())
        .bind(IdentityStatus::AwaitingVerification.as_str())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Identity>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{} WHERE i.id = ?", SELECT_IDENTITY);
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(map_identity).transpose()
    }

    /// Look up by email. Callers pass the normalized (lowercased) address.
    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> DbErrorResult<Option<Identity>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{} WHERE i.email = ?", SELECT_IDENTITY);
        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(map_identity).transpose()
    }

    /// Move `id` from `from` to `to`. Returns false when the identity is not in `from`.
    pub async fn transition_status<'e, E>(
        executor: E,
        id: Uuid,
        from: IdentityStatus,
        to: IdentityStatus,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE identities
                SET status = ?, updated_at = ?
                WHERE id = ? AND status = ?
            "#,
        )
        .bind(to.as_str())
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .bind(from.as_str())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Store the password hash and activate, only from `email_verified`.
    /// Returns false when the identity was not awaiting a password.
    pub async fn activate_with_password<'e, E>(
        executor: E,
        id: Uuid,
        password_hash: &str,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE identities
                SET password_hash = ?, status = ?, updated_at = ?
                WHERE id = ? AND status = ?
            "#,
        )
        .bind(password_hash)
        .bind(IdentityStatus::Active.as_str())
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .bind(IdentityStatus::EmailVerified.as_str())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}

fn map_identity(r: &SqliteRow) -> DbErrorResult<Identity> {
    Ok(Identity {
        id: row::uuid(r, "id")?,
        name: r.try_get("name")?,
        email: r.try_get("email")?,
        phone_number: r.try_get("phone_number")?,
        password_hash: r.try_get("password_hash")?,
        status: row::parsed(r, "status")?,
        address: Address {
            line1: r.try_get("line1")?,
            line2: r.try_get("line2")?,
            line3: r.try_get("line3")?,
            town: r.try_get("town")?,
            county: r.try_get("county")?,
            postcode: r.try_get("postcode")?,
        },
        created_at: row::timestamp(r, "created_at")?,
    })
}
