mod common;

use common::{
    PASSWORD, ScriptedGenerator, create_facade, create_facade_with, onboard, registration,
};

use eb_auth::{Capability, LOGIN_CAPABILITIES, TokenKind};
use eb_core::{AccountSettings, AccountType, IdentityStatus};
use eb_service::{FacadeConfig, ServiceError};

use std::sync::Arc;

use googletest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

#[tokio::test]
async fn given_full_onboarding_when_logging_in_then_access_token_carries_login_capabilities() {
    // Given
    let facade = create_facade().await;
    let provisioned = facade
        .register(registration("alice@example.com"))
        .await
        .unwrap();
    let verified = facade
        .verify_email(&provisioned.verification_token.token.to_string())
        .await
        .unwrap();
    facade
        .set_password(&verified.set_password_token.token, "alice@example.com", PASSWORD)
        .await
        .unwrap();

    // When
    let outcome = facade.login("alice@example.com", PASSWORD).await.unwrap();

    // Then
    assert_that!(outcome.identity_id, eq(provisioned.identity.id));
    let claims = facade.tokens().validate(&outcome.tokens.access_token).unwrap();
    assert_that!(claims.kind, eq(TokenKind::Access));
    assert_eq!(claims.capabilities, LOGIN_CAPABILITIES.to_vec());
    let caller = facade.authenticate(&outcome.tokens.access_token).unwrap();
    assert_that!(caller.identity_id, eq(provisioned.identity.id));
}

#[tokio::test]
async fn given_verified_email_when_set_password_token_inspected_then_bound_and_scoped() {
    let facade = create_facade().await;
    let provisioned = facade
        .register(registration("bob@example.com"))
        .await
        .unwrap();

    let verified = facade
        .verify_email(&provisioned.verification_token.token.to_string())
        .await
        .unwrap();

    assert_that!(verified.identity.status, eq(IdentityStatus::EmailVerified));
    let claims = facade
        .tokens()
        .validate(&verified.set_password_token.token)
        .unwrap();
    assert_that!(claims.kind, eq(TokenKind::SetPassword));
    assert_eq!(claims.capabilities, vec![Capability::SetPassword]);
    assert_that!(claims.sub, eq(&provisioned.identity.id.to_string()));
}

#[tokio::test]
async fn given_non_uuid_token_when_verifying_email_then_invalid_or_expired() {
    let facade = create_facade().await;

    let result = facade.verify_email("definitely-not-a-token").await;

    assert!(matches!(
        result,
        Err(ServiceError::InvalidOrExpiredToken { .. })
    ));
}

#[tokio::test]
async fn given_access_token_when_setting_password_then_token_invalid() {
    let facade = create_facade().await;
    let access = onboard(&facade, "carol@example.com").await;

    let result = facade
        .set_password(&access, "carol@example.com", "another123")
        .await;

    assert!(matches!(result, Err(ServiceError::TokenInvalid { .. })));
}

#[tokio::test]
async fn given_set_password_token_when_authenticating_then_token_invalid() {
    let facade = create_facade().await;
    let provisioned = facade
        .register(registration("dave@example.com"))
        .await
        .unwrap();
    let verified = facade
        .verify_email(&provisioned.verification_token.token.to_string())
        .await
        .unwrap();

    let result = facade.authenticate(&verified.set_password_token.token);

    assert!(matches!(result, Err(ServiceError::TokenInvalid { .. })));
}

#[tokio::test]
async fn given_refresh_token_when_refreshed_then_new_pair_for_same_identity() {
    let facade = create_facade().await;
    onboard(&facade, "erin@example.com").await;
    let outcome = facade.login("erin@example.com", PASSWORD).await.unwrap();

    let pair = facade.refresh_tokens(&outcome.tokens.refresh_token).unwrap();

    let caller = facade.authenticate(&pair.access_token).unwrap();
    assert_that!(caller.identity_id, eq(outcome.identity_id));
    let access_as_refresh = facade.refresh_tokens(&pair.access_token);
    assert!(matches!(
        access_as_refresh,
        Err(ServiceError::TokenInvalid { .. })
    ));
}

#[tokio::test]
async fn given_own_identity_when_fetched_then_returned() {
    let facade = create_facade().await;
    let access = onboard(&facade, "frank@example.com").await;
    let caller = facade.authenticate(&access).unwrap();

    let identity = facade
        .get_identity(&caller, caller.identity_id)
        .await
        .unwrap();

    assert_that!(identity.email, eq("frank@example.com"));
    assert_that!(identity.status, eq(IdentityStatus::Active));
}

#[tokio::test]
async fn given_other_identity_when_fetched_then_identity_mismatch_even_if_absent() {
    let facade = create_facade().await;
    let access = onboard(&facade, "gina@example.com").await;
    let other = facade
        .register(registration("hal@example.com"))
        .await
        .unwrap();
    let caller = facade.authenticate(&access).unwrap();

    let existing = facade.get_identity(&caller, other.identity.id).await;
    let missing = facade.get_identity(&caller, Uuid::new_v4()).await;

    assert!(matches!(existing, Err(ServiceError::IdentityMismatch { .. })));
    assert!(matches!(missing, Err(ServiceError::IdentityMismatch { .. })));
}

#[tokio::test]
async fn given_caller_when_creating_account_then_zero_balance_with_bank_constants() {
    let facade = create_facade().await;
    let access = onboard(&facade, "ivy@example.com").await;
    let caller = facade.authenticate(&access).unwrap();

    let account = facade
        .create_account(&caller, "Everyday", "business")
        .await
        .unwrap();

    let settings = AccountSettings::default();
    assert_that!(account.owner_id, eq(caller.identity_id));
    assert_that!(account.account_type, eq(AccountType::Business));
    assert_that!(account.balance, eq(Decimal::ZERO));
    assert_that!(account.routing_code, eq(&settings.routing_code));
    assert_that!(account.currency, eq(&settings.currency));
    assert_that!(account.account_number.as_str().len(), eq(8));
}

#[tokio::test]
async fn given_unknown_account_type_when_creating_account_then_validation() {
    let facade = create_facade().await;
    let access = onboard(&facade, "jack@example.com").await;
    let caller = facade.authenticate(&access).unwrap();

    let result = facade.create_account(&caller, "Everyday", "savings").await;

    assert!(matches!(result, Err(ServiceError::Validation { .. })));
    assert_that!(facade.list_accounts(&caller).await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_colliding_generator_when_creating_account_then_retries_to_free_number() {
    let facade = create_facade()
        .await
        .with_generator(Arc::new(ScriptedGenerator::new(&[
            "10000001", "10000001", "10000002",
        ])));
    let access = onboard(&facade, "kate@example.com").await;
    let caller = facade.authenticate(&access).unwrap();

    let first = facade
        .create_account(&caller, "First", "private")
        .await
        .unwrap();
    let second = facade
        .create_account(&caller, "Second", "private")
        .await
        .unwrap();

    assert_that!(first.account_number.as_str(), eq("10000001"));
    assert_that!(second.account_number.as_str(), eq("10000002"));
}

#[tokio::test]
async fn given_generator_stuck_on_taken_number_when_creating_account_then_resource_exhausted() {
    let facade = create_facade_with(FacadeConfig {
        account_number_max_attempts: 2,
        ..FacadeConfig::default()
    })
    .await
    .with_generator(Arc::new(ScriptedGenerator::new(&["20000001"])));
    let access = onboard(&facade, "liam@example.com").await;
    let caller = facade.authenticate(&access).unwrap();
    facade
        .create_account(&caller, "First", "private")
        .await
        .unwrap();

    let result = facade.create_account(&caller, "Second", "private").await;

    match result {
        Err(ServiceError::ResourceExhausted { attempts, .. }) => assert_that!(attempts, eq(2)),
        other => panic!("expected ResourceExhausted, got {:?}", other),
    }
}

#[tokio::test]
async fn given_accounts_of_two_owners_when_listed_then_only_callers_accounts() {
    let facade = create_facade().await;
    let mia = facade
        .authenticate(&onboard(&facade, "mia@example.com").await)
        .unwrap();
    let ned = facade
        .authenticate(&onboard(&facade, "ned@example.com").await)
        .unwrap();
    facade.create_account(&mia, "One", "private").await.unwrap();
    facade.create_account(&mia, "Two", "business").await.unwrap();
    facade.create_account(&ned, "Three", "private").await.unwrap();

    let accounts = facade.list_accounts(&mia).await.unwrap();

    assert_that!(accounts, len(eq(2)));
    assert!(accounts.iter().all(|a| a.owner_id == mia.identity_id));
}

#[tokio::test]
async fn given_account_numbers_when_fetched_then_owner_mismatch_and_absence_are_distinct() {
    let facade = create_facade().await;
    let owner = facade
        .authenticate(&onboard(&facade, "olga@example.com").await)
        .unwrap();
    let stranger = facade
        .authenticate(&onboard(&facade, "pete@example.com").await)
        .unwrap();
    let account = facade
        .create_account(&owner, "Savings pot", "private")
        .await
        .unwrap();
    let number = account.account_number.to_string();

    let own = facade.get_account(&owner, &number).await.unwrap();
    let foreign = facade.get_account(&stranger, &number).await;
    let absent = facade.get_account(&owner, "00000000").await;
    let malformed = facade.get_account(&owner, "12-34").await;

    assert_that!(own.account_number, eq(&account.account_number));
    assert!(matches!(foreign, Err(ServiceError::IdentityMismatch { .. })));
    assert!(matches!(absent, Err(ServiceError::NotFound { .. })));
    assert!(matches!(malformed, Err(ServiceError::Validation { .. })));
}
