use crate::provisioning::transaction::db_transaction;
use crate::{
    AddressRepository, DbError, IdentityRepository, Result as DbErrorResult,
    VerificationTokenRepository,
};

use eb_core::{ErrorLocation, Identity, NewIdentity, VerificationToken};

use std::panic::Location;

use sqlx::SqlitePool;

/// Identity as committed, with its verification token
#[derive(Debug, Clone)]
pub struct ProvisionedIdentity {
    pub identity: Identity,
    pub verification_token: VerificationToken,
}

/// Insert identity, address and verification token atomically.
///
/// A taken email surfaces as `DbError::Duplicate { constraint: IdentityEmail }`.
/// After commit the rows are read back so store-assigned columns are populated.
pub async fn provision_identity(
    pool: &SqlitePool,
    identity: &NewIdentity,
    token: &VerificationToken,
) -> DbErrorResult<ProvisionedIdentity> {
    let identity_id = identity.id();

    db_transaction(pool, "provision_identity", move |mut tx| async move {
        IdentityRepository::create(&mut *tx, identity).await?;
        AddressRepository::create(&mut *tx, identity_id, identity.address()).await?;
        VerificationTokenRepository::create(&mut *tx, token).await?;
        Ok(((), tx))
    })
    .await?;

    let identity = IdentityRepository::find_by_id(pool, identity_id)
        .await?
        .ok_or_else(|| DbError::MissingRow {
            entity: "identity",
            key: identity_id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let verification_token = VerificationTokenRepository::find(pool, token.token)
        .await?
        .ok_or_else(|| DbError::MissingRow {
            entity: "verification_token",
            key: token.token.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!("Provisioned identity {}", identity_id);

    Ok(ProvisionedIdentity {
        identity,
        verification_token,
    })
}
