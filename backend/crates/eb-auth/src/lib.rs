pub mod capability;
pub mod claims;
pub mod error;
pub mod issued_token;
pub mod raw_token;
pub mod token_config;
pub mod token_kind;
pub mod token_service;

pub use capability::{Capability, LOGIN_CAPABILITIES};
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use issued_token::{IssuedToken, TokenPair};
pub use raw_token::extract_raw_token;
pub use token_config::TokenConfig;
pub use token_kind::TokenKind;
pub use token_service::TokenService;

#[cfg(test)]
mod tests;
