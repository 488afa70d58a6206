pub mod account_repository;
pub mod address_repository;
pub mod identity_repository;
pub mod ownership_link_repository;
pub mod verification_token_repository;

mod row;
