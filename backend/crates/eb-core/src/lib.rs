pub mod account_number;
pub mod error;
pub mod models;
pub mod password_policy;
pub mod validation;

pub use account_number::{AccountNumber, AccountNumberGenerator, RandomAccountNumberGenerator};
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::account_settings::AccountSettings;
pub use models::account_type::AccountType;
pub use models::address::Address;
pub use models::bank_account::BankAccount;
pub use models::identity::Identity;
pub use models::identity_status::IdentityStatus;
pub use models::new_bank_account::NewBankAccount;
pub use models::new_identity::NewIdentity;
pub use models::ownership_link::OwnershipLink;
pub use models::registration_details::RegistrationDetails;
pub use models::verification_token::VerificationToken;

#[cfg(test)]
mod tests;
