pub mod auth;
pub mod token_pair_response;
