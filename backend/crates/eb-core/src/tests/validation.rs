use crate::validation::{require_non_empty, validate_email, validate_phone_number};

#[test]
fn test_validate_email_accepts_common_addresses() {
    for email in ["a@x.com", "first.last+tag@sub.example.co.uk", "a_b-c@x-y.io"] {
        assert!(validate_email(email).is_ok(), "{email} should be valid");
    }
}

#[test]
fn test_validate_email_rejects_malformed_addresses() {
    for email in [
        "",
        "plain",
        "@x.com",
        "a@",
        "a@@x.com",
        "a@x",
        "a@.com",
        ".a@x.com",
        "a..b@x.com",
        "a b@x.com",
        "a@-x.com",
    ] {
        assert!(validate_email(email).is_err(), "{email} should be invalid");
    }
}

#[test]
fn test_validate_email_rejects_quoted_and_single_label_forms() {
    for email in ["a@localhost", "\"a b\"@x.com", "Alice <alice@x.com>"] {
        assert!(validate_email(email).is_err(), "{email} should be invalid");
    }
}

#[test]
fn test_validate_email_rejects_overlong_address() {
    let email = format!("{}@x.com", "a".repeat(250));
    assert!(validate_email(&email).is_err());
}

#[test]
fn test_validate_phone_accepts_valid_e164() {
    assert!(validate_phone_number("+14155552671").is_ok());
    assert!(validate_phone_number("+441212345678").is_ok());
}

#[test]
fn test_validate_phone_rejects_bad_format() {
    for phone in ["4155552671", "+0123456", "+1 415 555 2671", "+", "+1"] {
        assert!(validate_phone_number(phone).is_err(), "{phone} should be invalid");
    }
}

#[test]
fn test_validate_phone_rejects_numbers_outside_numbering_plan() {
    // Well-formed E.164 shape, but not an assignable number
    assert!(validate_phone_number("+1415555267").is_err());
    assert!(validate_phone_number("+999123456789").is_err());
}

#[test]
fn test_require_non_empty() {
    assert!(require_non_empty("town", "X").is_ok());
    assert!(require_non_empty("town", "  ").is_err());
}
