//! Bank account handlers. All require an access token.

use crate::{
    AccessCaller, AccountDto, AccountListResponse, AccountResponse, ApiResult, AppState,
    CreateAccountRequest,
};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /v1/accounts
pub async fn create_account(
    State(state): State<AppState>,
    AccessCaller(caller): AccessCaller,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AccountResponse>)> {
    let Json(request) = payload?;

    let account = state
        .facade
        .create_account(&caller, &request.name, &request.account_type)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountResponse {
            account: account.into(),
        }),
    ))
}

/// GET /v1/accounts
///
/// Accounts owned by the caller
pub async fn list_accounts(
    State(state): State<AppState>,
    AccessCaller(caller): AccessCaller,
) -> ApiResult<Json<AccountListResponse>> {
    let accounts = state.facade.list_accounts(&caller).await?;

    Ok(Json(AccountListResponse {
        accounts: accounts.into_iter().map(AccountDto::from).collect(),
    }))
}

/// GET /v1/accounts/{account_number}
pub async fn get_account(
    State(state): State<AppState>,
    AccessCaller(caller): AccessCaller,
    Path(account_number): Path<String>,
) -> ApiResult<Json<AccountResponse>> {
    let account = state.facade.get_account(&caller, &account_number).await?;

    Ok(Json(AccountResponse {
        account: account.into(),
    }))
}
