pub mod account_settings;
pub mod account_type;
pub mod address;
pub mod bank_account;
pub mod identity;
pub mod identity_status;
pub mod new_bank_account;
pub mod new_identity;
pub mod ownership_link;
pub mod registration_details;
pub mod verification_token;
