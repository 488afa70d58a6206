pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        account_dto::AccountDto,
        account_list_response::AccountListResponse,
        account_response::AccountResponse,
        accounts::{create_account, get_account, list_accounts},
        create_account_request::CreateAccountRequest,
    },
    auth::{auth::refresh, token_pair_response::TokenPairResponse},
    error::ApiError,
    error::Result as ApiResult,
    extractors::{access_caller::AccessCaller, bearer_token::BearerToken},
    message_response::MessageResponse,
    users::{
        identity_dto::IdentityDto,
        login_request::LoginRequest,
        register_request::RegisterRequest,
        register_response::RegisterResponse,
        set_password_request::SetPasswordRequest,
        user_response::UserResponse,
        users::{get_user, login, register_user, set_password, verify_email},
        verify_email_request::VerifyEmailRequest,
        verify_email_response::VerifyEmailResponse,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
