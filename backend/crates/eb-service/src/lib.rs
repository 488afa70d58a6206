pub mod caller;
pub mod error;
pub mod facade;
pub mod lifecycle;
pub mod password_hasher;

pub use caller::Caller;
pub use error::{Result, ServiceError};
pub use facade::{BankingFacade, FacadeConfig, LoginOutcome, VerifiedEmail};
pub use lifecycle::{LifecycleConfig, UserLifecycle};
pub use password_hasher::{PasswordHasher, PasswordHasherConfig};

pub use eb_db::ProvisionedIdentity;

#[cfg(test)]
mod tests;
