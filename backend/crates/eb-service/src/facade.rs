//! Entry points used by the HTTP layer. Composes the lifecycle, provisioning and
//! token components and reports failures as `ServiceError`.

use crate::{
    Caller, LifecycleConfig, PasswordHasher, Result as ServiceResult, ServiceError, UserLifecycle,
};

use eb_auth::{Capability, IssuedToken, LOGIN_CAPABILITIES, TokenPair, TokenService};
use eb_core::{
    AccountNumber, AccountNumberGenerator, AccountSettings, BankAccount, Identity, NewBankAccount,
    RandomAccountNumberGenerator, RegistrationDetails,
};
use eb_db::{AccountRepository, ProvisionedIdentity, provision_account};

use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct FacadeConfig {
    pub lifecycle: LifecycleConfig,
    pub account_settings: AccountSettings,
    pub account_number_max_attempts: u32,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            lifecycle: LifecycleConfig::default(),
            account_settings: AccountSettings::default(),
            account_number_max_attempts: eb_db::provisioning::account_provisioner::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Result of redeeming a verification token
#[derive(Debug, Clone)]
pub struct VerifiedEmail {
    pub identity: Identity,
    pub set_password_token: IssuedToken,
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub identity_id: Uuid,
    pub tokens: TokenPair,
}

pub struct BankingFacade {
    pool: SqlitePool,
    lifecycle: UserLifecycle,
    tokens: Arc<TokenService>,
    generator: Arc<dyn AccountNumberGenerator>,
    account_settings: AccountSettings,
    account_number_max_attempts: u32,
}

impl BankingFacade {
    pub fn new(
        pool: SqlitePool,
        tokens: Arc<TokenService>,
        hasher: Arc<PasswordHasher>,
        config: FacadeConfig,
    ) -> Self {
        Self {
            lifecycle: UserLifecycle::new(pool.clone(), hasher, config.lifecycle),
            pool,
            tokens,
            generator: Arc::new(RandomAccountNumberGenerator),
            account_settings: config.account_settings,
            account_number_max_attempts: config.account_number_max_attempts,
        }
    }

    /// Replace the account number source
    pub fn with_generator(mut self, generator: Arc<dyn AccountNumberGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Resolve a raw access token to its caller
    pub fn authenticate(&self, raw_token: &str) -> ServiceResult<Caller> {
        let claims = self.tokens.validate(raw_token)?;
        Caller::from_claims(claims)
    }

    pub async fn register(&self, details: RegistrationDetails) -> ServiceResult<ProvisionedIdentity> {
        self.lifecycle.register(details).await
    }

    /// Redeem a verification token and hand back a set-password token for the identity
    pub async fn verify_email(&self, raw_token: &str) -> ServiceResult<VerifiedEmail> {
        let token = Uuid::parse_str(raw_token.trim())
            .map_err(|_| ServiceError::invalid_or_expired_token())?;

        let identity = self.lifecycle.verify_email(token).await?;
        let set_password_token = self.tokens.issue_set_password_token(identity.id)?;

        Ok(VerifiedEmail {
            identity,
            set_password_token,
        })
    }

    /// Set the password using a set-password bearer token
    pub async fn set_password(
        &self,
        raw_token: &str,
        email: &str,
        password: &str,
    ) -> ServiceResult<Identity> {
        let claims = self.tokens.validate(raw_token)?;
        let identity_id = claims.identity_id()?;

        self.lifecycle
            .set_password(identity_id, email, password, &claims)
            .await
    }

    pub async fn login(&self, email: &str, password: &str) -> ServiceResult<LoginOutcome> {
        let identity_id = self.lifecycle.login(email, password).await?;
        let tokens = self.tokens.issue_tokens(identity_id, &LOGIN_CAPABILITIES)?;

        Ok(LoginOutcome {
            identity_id,
            tokens,
        })
    }

    pub fn refresh_tokens(&self, raw_refresh_token: &str) -> ServiceResult<TokenPair> {
        Ok(self.tokens.refresh(raw_refresh_token, &LOGIN_CAPABILITIES)?)
    }

    /// Fetch an identity. Callers may only read their own.
    pub async fn get_identity(&self, caller: &Caller, identity_id: Uuid) -> ServiceResult<Identity> {
        caller.require_owner(identity_id)?;

        self.lifecycle
            .find_identity(identity_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("identity"))
    }

    pub async fn create_account(
        &self,
        caller: &Caller,
        name: &str,
        account_type: &str,
    ) -> ServiceResult<BankAccount> {
        caller.require(Capability::CreateAccount)?;

        let draft = NewBankAccount::new(
            caller.identity_id,
            name,
            account_type,
            &self.account_settings,
        )?;

        if self.lifecycle.find_identity(caller.identity_id).await?.is_none() {
            return Err(ServiceError::not_found("identity"));
        }

        Ok(provision_account(
            &self.pool,
            self.generator.as_ref(),
            &draft,
            self.account_number_max_attempts,
        )
        .await?)
    }

    pub async fn list_accounts(&self, caller: &Caller) -> ServiceResult<Vec<BankAccount>> {
        Ok(AccountRepository::find_by_owner(&self.pool, caller.identity_id).await?)
    }

    /// Fetch one account. Absent is `NotFound`; owned by someone else is `IdentityMismatch`.
    pub async fn get_account(
        &self,
        caller: &Caller,
        account_number: &str,
    ) -> ServiceResult<BankAccount> {
        let account_number = AccountNumber::from_str(account_number)?;

        let account = AccountRepository::find_by_number(&self.pool, &account_number)
            .await?
            .ok_or_else(|| ServiceError::not_found("account"))?;
        caller.require_owner(account.owner_id)?;

        Ok(account)
    }
}
