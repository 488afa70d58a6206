use crate::{Caller, ServiceError};

use eb_auth::{Capability, Claims, LOGIN_CAPABILITIES, TokenKind};

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

fn claims(kind: TokenKind, sub: String, capabilities: Vec<Capability>) -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        sub,
        kind,
        capabilities,
        iat: now,
        exp: now + 900,
    }
}

#[test]
fn given_access_claims_when_converted_then_caller_carries_identity_and_capabilities() {
    // Given
    let identity_id = Uuid::new_v4();
    let claims = claims(
        TokenKind::Access,
        identity_id.to_string(),
        LOGIN_CAPABILITIES.to_vec(),
    );

    // When
    let caller = Caller::from_claims(claims).unwrap();

    // Then
    assert_that!(caller.identity_id, eq(identity_id));
    assert_eq!(caller.capabilities, LOGIN_CAPABILITIES.to_vec());
}

#[test]
fn given_refresh_claims_when_converted_then_token_invalid() {
    let claims = claims(TokenKind::Refresh, Uuid::new_v4().to_string(), Vec::new());

    let result = Caller::from_claims(claims);

    assert!(matches!(result, Err(ServiceError::TokenInvalid { .. })));
}

#[test]
fn given_non_uuid_subject_when_converted_then_token_invalid() {
    let claims = claims(TokenKind::Access, "not-a-uuid".to_string(), Vec::new());

    let result = Caller::from_claims(claims);

    assert!(matches!(result, Err(ServiceError::TokenInvalid { .. })));
}

#[test]
fn given_caller_without_capability_when_required_then_missing_capability() {
    let caller = Caller {
        identity_id: Uuid::new_v4(),
        capabilities: vec![Capability::Deposit],
    };

    let result = caller.require(Capability::CreateAccount);

    match result {
        Err(ServiceError::MissingCapability { capability, .. }) => {
            assert_that!(capability, eq("create_account"));
        }
        other => panic!("expected MissingCapability, got {:?}", other),
    }
    assert_that!(caller.require(Capability::Deposit), ok(anything()));
}

#[test]
fn given_other_owner_when_ownership_required_then_identity_mismatch() {
    let caller = Caller {
        identity_id: Uuid::new_v4(),
        capabilities: LOGIN_CAPABILITIES.to_vec(),
    };

    assert_that!(caller.require_owner(caller.identity_id), ok(anything()));
    assert!(matches!(
        caller.require_owner(Uuid::new_v4()),
        Err(ServiceError::IdentityMismatch { .. })
    ));
}
