use eb_core::{
    AccountNumber, AccountNumberGenerator, AccountSettings, NewBankAccount, NewIdentity,
    RegistrationDetails, VerificationToken,
};

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::Mutex;

use chrono::{Duration, Utc};
use uuid::Uuid;

pub fn registration(email: &str) -> RegistrationDetails {
    RegistrationDetails {
        name: "Test User".to_string(),
        email: email.to_string(),
        phone_number: "+14155552671".to_string(),
        line1: "1 Test Road".to_string(),
        line2: Some("Flat 2".to_string()),
        line3: None,
        town: "Testville".to_string(),
        county: None,
        postcode: "TE1 1ST".to_string(),
    }
}

pub fn new_identity(email: &str) -> NewIdentity {
    NewIdentity::new(registration(email)).expect("valid registration")
}

pub fn token_for(identity: &NewIdentity, ttl_secs: i64) -> VerificationToken {
    VerificationToken::issue(identity.id(), Duration::seconds(ttl_secs), Utc::now())
}

pub fn account_draft(owner_id: Uuid) -> NewBankAccount {
    NewBankAccount::new(owner_id, "Everyday", "private", &AccountSettings::default())
        .expect("valid account draft")
}

/// Hands out a fixed script of account numbers, then repeats the last one
pub struct ScriptedGenerator {
    numbers: Mutex<VecDeque<AccountNumber>>,
}

impl ScriptedGenerator {
    pub fn new(numbers: &[&str]) -> Self {
        Self {
            numbers: Mutex::new(
                numbers
                    .iter()
                    .map(|n| AccountNumber::from_str(n).expect("valid account number"))
                    .collect(),
            ),
        }
    }
}

impl AccountNumberGenerator for ScriptedGenerator {
    fn generate(&self) -> AccountNumber {
        let mut numbers = self.numbers.lock().expect("generator lock");
        if numbers.len() > 1 {
            numbers.pop_front().expect("non-empty script")
        } else {
            numbers.front().cloned().expect("non-empty script")
        }
    }
}
