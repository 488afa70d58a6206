use crate::Result as DbErrorResult;

use eb_core::Address;

use uuid::Uuid;

pub struct AddressRepository;

impl AddressRepository {
    pub async fn create<'e, E>(executor: E, identity_id: Uuid, address: &Address) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO addresses (id, identity_id, line1, line2, line3, town, county, postcode)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(identity_id.to_string())
        .bind(&address.line1)
        .bind(&address.line2)
        .bind(&address.line3)
        .bind(&address.town)
        .bind(&address.county)
        .bind(&address.postcode)
        .execute(executor)
        .await?;

        Ok(())
    }
}
