use crate::{AuthError, Capability, Claims, TokenKind};

use uuid::Uuid;

fn set_password_claims(identity_id: Uuid) -> Claims {
    Claims {
        sub: identity_id.to_string(),
        kind: TokenKind::SetPassword,
        capabilities: vec![Capability::SetPassword],
        iat: 0,
        exp: 600,
    }
}

#[test]
fn given_claims_when_serialized_then_wire_names_are_stable() {
    let claims = set_password_claims(Uuid::nil());

    let json = serde_json::to_string(&claims).unwrap();

    assert!(json.contains(r#""kind":"set_password""#));
    assert!(json.contains(r#""capabilities":["set-password"]"#));
}

#[test]
fn given_missing_capabilities_when_deserialized_then_defaults_to_empty() {
    let json = r#"{"sub":"00000000-0000-0000-0000-000000000000","kind":"refresh","iat":0,"exp":1}"#;

    let claims: Claims = serde_json::from_str(json).unwrap();

    assert!(claims.capabilities.is_empty());
    assert!(!claims.has_capability(Capability::CreateAccount));
}

#[test]
fn given_bound_claims_when_authorized_for_owner_then_ok() {
    let identity_id = Uuid::new_v4();
    let claims = set_password_claims(identity_id);

    assert!(claims.authorize_set_password(identity_id).is_ok());
}

#[test]
fn given_claims_without_capability_when_authorized_then_missing_capability() {
    let identity_id = Uuid::new_v4();
    let mut claims = set_password_claims(identity_id);
    claims.capabilities.clear();

    let result = claims.authorize_set_password(identity_id);

    assert!(matches!(result, Err(AuthError::MissingCapability { .. })));
}

#[test]
fn given_claims_for_other_identity_when_authorized_then_invalid_token() {
    let claims = set_password_claims(Uuid::new_v4());

    let result = claims.authorize_set_password(Uuid::new_v4());

    assert!(matches!(result, Err(AuthError::InvalidToken { .. })));
}
