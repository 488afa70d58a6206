//! Persisted identity lifecycle: registration, email verification, password
//! activation and login.

use crate::{PasswordHasher, Result as ServiceResult, ServiceError};

use eb_auth::Claims;
use eb_core::password_policy::validate_password;
use eb_core::{
    ErrorLocation, Identity, IdentityStatus, NewIdentity, RegistrationDetails, VerificationToken,
};
use eb_db::{
    IdentityRepository, ProvisionedIdentity, RetryConfig, provision_identity,
    redeem_verification_token,
};

use std::panic::Location;
use std::sync::Arc;

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

pub const DEFAULT_VERIFICATION_TOKEN_TTL_SECS: i64 = 60 * 60;

#[derive(Debug, Clone)]
pub struct LifecycleConfig {
    /// How long a verification token stays redeemable
    pub verification_token_ttl: Duration,
    /// Bounded retry for the status update made while redeeming a token
    pub status_update_retry: RetryConfig,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            verification_token_ttl: Duration::seconds(DEFAULT_VERIFICATION_TOKEN_TTL_SECS),
            status_update_retry: RetryConfig::default(),
        }
    }
}

pub struct UserLifecycle {
    pool: SqlitePool,
    hasher: Arc<PasswordHasher>,
    config: LifecycleConfig,
}

impl UserLifecycle {
    pub fn new(pool: SqlitePool, hasher: Arc<PasswordHasher>, config: LifecycleConfig) -> Self {
        Self {
            pool,
            hasher,
            config,
        }
    }

    /// Validate and provision a new identity in `awaiting_verification`, with one
    /// unredeemed verification token. Nothing is written if validation fails.
    pub async fn register(&self, details: RegistrationDetails) -> ServiceResult<ProvisionedIdentity> {
        let identity = NewIdentity::new(details)?;
        let token =
            VerificationToken::issue(identity.id(), self.config.verification_token_ttl, Utc::now());

        let provisioned = provision_identity(&self.pool, &identity, &token).await?;

        log::info!(
            "Registered identity {} (verification expires {})",
            provisioned.identity.id,
            provisioned.verification_token.expires_at
        );

        Ok(provisioned)
    }

    /// Redeem `token` and move its identity to `email_verified`
    pub async fn verify_email(&self, token: Uuid) -> ServiceResult<Identity> {
        let identity_id = redeem_verification_token(
            &self.pool,
            token,
            Utc::now(),
            &self.config.status_update_retry,
        )
        .await?
        .ok_or_else(|| {
            log::warn!("Rejected verification token");
            ServiceError::invalid_or_expired_token()
        })?;

        let identity = self.load(identity_id).await?;
        log::info!("Identity {} verified email", identity_id);

        Ok(identity)
    }

    /// Set the password credential and activate the identity.
    ///
    /// `claims` must be a set-password token bound to `identity_id`, the identity must be
    /// `email_verified`, and `email` must match the registered address.
    pub async fn set_password(
        &self,
        identity_id: Uuid,
        email: &str,
        raw_password: &str,
        claims: &Claims,
    ) -> ServiceResult<Identity> {
        claims.authorize_set_password(identity_id)?;

        let identity = self.load(identity_id).await?;
        identity.status.activate()?;

        if !identity.email_matches(email) {
            log::warn!("Set-password email mismatch for identity {}", identity_id);
            return Err(ServiceError::identity_mismatch());
        }

        validate_password(raw_password)?;

        let hash = self.hasher.hash(raw_password).await?;
        let activated =
            IdentityRepository::activate_with_password(&self.pool, identity_id, &hash).await?;
        if !activated {
            // Lost a race with a concurrent set-password
            return Err(ServiceError::InvalidStatusTransition {
                message: format!("identity is no longer {}", IdentityStatus::EmailVerified),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let identity = self.load(identity_id).await?;
        log::info!("Identity {} activated", identity_id);

        Ok(identity)
    }

    /// Check credentials and return the identity id.
    ///
    /// Unknown email, missing password and wrong password all fail with the same
    /// `InvalidCredentials`, and all pay for one Argon2 verification.
    pub async fn login(&self, email: &str, raw_password: &str) -> ServiceResult<Uuid> {
        let email = email.trim().to_lowercase();
        let identity = IdentityRepository::find_by_email(&self.pool, &email).await?;

        let stored_hash = identity.as_ref().and_then(|i| i.password_hash.as_deref());
        let verified = self.hasher.verify(raw_password, stored_hash).await?;

        match identity {
            Some(identity) if verified && identity.is_active() => {
                log::info!("Identity {} logged in", identity.id);
                Ok(identity.id)
            }
            _ => {
                log::warn!("Rejected login attempt");
                Err(ServiceError::invalid_credentials())
            }
        }
    }

    pub async fn find_identity(&self, identity_id: Uuid) -> ServiceResult<Option<Identity>> {
        Ok(IdentityRepository::find_by_id(&self.pool, identity_id).await?)
    }

    async fn load(&self, identity_id: Uuid) -> ServiceResult<Identity> {
        self.find_identity(identity_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("identity"))
    }
}
