pub mod account_provisioner;
pub mod email_verification;
pub mod identity_provisioner;
pub mod retry;
pub mod transaction;
