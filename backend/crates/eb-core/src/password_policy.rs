use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum password policy: at least eight characters and at least one digit.
#[track_caller]
pub fn validate_password(password: &str) -> CoreErrorResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::WeakPassword {
            message: format!("password must be at least {} characters", MIN_PASSWORD_LENGTH),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(CoreError::WeakPassword {
            message: "password must contain a number".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
