//! Validated registration, ready to be provisioned.

use crate::validation::{require_non_empty, validate_email, validate_phone_number};
use crate::{Address, RegistrationDetails, Result as CoreErrorResult};

use uuid::Uuid;

/// An identity that passed every registration check.
///
/// Only obtainable through [`NewIdentity::new`], so holding one proves the
/// input was complete and well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdentity {
    id: Uuid,
    name: String,
    email: String,
    phone_number: String,
    address: Address,
}

impl NewIdentity {
    /// Validate registration input and assign a fresh identity id.
    ///
    /// Emails are stored trimmed and lowercased.
    #[track_caller]
    pub fn new(details: RegistrationDetails) -> CoreErrorResult<Self> {
        require_non_empty("name", &details.name)?;
        require_non_empty("line1", &details.line1)?;
        require_non_empty("town", &details.town)?;
        require_non_empty("postcode", &details.postcode)?;

        let email = details.email.trim().to_lowercase();
        validate_email(&email)?;

        let phone_number = details.phone_number.trim().to_string();
        validate_phone_number(&phone_number)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: details.name.trim().to_string(),
            email,
            phone_number,
            address: Address {
                line1: details.line1.trim().to_string(),
                line2: non_blank(details.line2),
                line3: non_blank(details.line3),
                town: details.town.trim().to_string(),
                county: non_blank(details.county),
                postcode: details.postcode.trim().to_string(),
            },
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
