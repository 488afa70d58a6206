pub mod connection;
pub mod error;
pub mod provisioning;
pub mod repositories;

pub use connection::pool::{create_pool, run_migrations};
pub use error::{DbError, Result, UniqueConstraint};
pub use provisioning::account_provisioner::provision_account;
pub use provisioning::email_verification::{
    StatusUpdateFuture, mark_email_verified, redeem_verification_token,
    redeem_verification_token_with,
};
pub use provisioning::identity_provisioner::{ProvisionedIdentity, provision_identity};
pub use provisioning::retry::{IsRetryable, RetryConfig, with_retry};
pub use provisioning::transaction::db_transaction;
pub use repositories::account_repository::AccountRepository;
pub use repositories::address_repository::AddressRepository;
pub use repositories::identity_repository::IdentityRepository;
pub use repositories::ownership_link_repository::OwnershipLinkRepository;
pub use repositories::verification_token_repository::VerificationTokenRepository;
