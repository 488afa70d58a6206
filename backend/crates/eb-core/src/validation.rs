//! Input validation for registration data.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::sync::LazyLock;

use error_location::ErrorLocation;
use regex::Regex;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_EMAIL_LOCAL_LENGTH: usize = 64;

static E164_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 pattern is a valid regex"));

#[track_caller]
fn invalid(field: &str, message: impl Into<String>) -> CoreError {
    CoreError::Validation {
        message: message.into(),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Reject empty or whitespace-only required fields
#[track_caller]
pub fn require_non_empty(field: &str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, format!("{} is required", field)));
    }
    Ok(())
}

/// Validate a bare email address (`local@domain.tld`).
///
/// - exactly one `@`
/// - local part 1-64 characters of `[A-Za-z0-9._%+-]`, no leading, trailing or doubled dots
/// - domain of at least two dot-separated labels, each alphanumeric with inner hyphens
/// - at most 254 characters overall
#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    if email.is_empty() {
        return Err(invalid("email", "email is required"));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(invalid("email", "email address too long (max 254 characters)"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid("email", "email must contain an @ symbol"));
    };
    if domain.contains('@') {
        return Err(invalid("email", "email must contain exactly one @ symbol"));
    }

    if local.is_empty() || local.len() > MAX_EMAIL_LOCAL_LENGTH {
        return Err(invalid("email", "email local part must be 1-64 characters"));
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(invalid("email", "email local part has misplaced dots"));
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
    {
        return Err(invalid("email", "email local part contains invalid characters"));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(invalid("email", "email domain must contain at least one dot"));
    }
    let labels_valid = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    if !labels_valid {
        return Err(invalid("email", "email domain is malformed"));
    }

    Ok(())
}

/// Validate a phone number: E.164 shape first, then full numbering-plan validation.
#[track_caller]
pub fn validate_phone_number(phone: &str) -> CoreErrorResult<()> {
    if !E164_PATTERN.is_match(phone) {
        return Err(invalid(
            "phoneNumber",
            "phone number must be in E.164 format, e.g. +14155552671",
        ));
    }

    let parsed = phonenumber::parse(None, phone)
        .map_err(|e| invalid("phoneNumber", format!("failed to parse phone number: {}", e)))?;

    if !phonenumber::is_valid(&parsed) {
        return Err(invalid("phoneNumber", "phone number is not valid"));
    }

    Ok(())
}
