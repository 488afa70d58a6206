#![allow(dead_code)]

use eb_auth::{TokenConfig, TokenService};
use eb_core::{AccountNumber, AccountNumberGenerator, RegistrationDetails};
use eb_service::{BankingFacade, FacadeConfig, PasswordHasher, PasswordHasherConfig};

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const TEST_SECRET: &[u8] = b"service-test-secret-at-least-32-bytes";
pub const PASSWORD: &str = "password123";

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    eb_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Argon2id with the smallest legal cost, so tests stay fast
pub fn cheap_hasher() -> Arc<PasswordHasher> {
    Arc::new(
        PasswordHasher::new(PasswordHasherConfig {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        })
        .expect("valid hasher params"),
    )
}

pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenConfig::new(TEST_SECRET)))
}

pub async fn create_facade() -> BankingFacade {
    create_facade_with(FacadeConfig::default()).await
}

pub async fn create_facade_with(config: FacadeConfig) -> BankingFacade {
    BankingFacade::new(create_test_pool().await, token_service(), cheap_hasher(), config)
}

pub fn registration(email: &str) -> RegistrationDetails {
    RegistrationDetails {
        name: "Test User".to_string(),
        email: email.to_string(),
        phone_number: "+14155552671".to_string(),
        line1: "1 Test Road".to_string(),
        line2: None,
        line3: None,
        town: "Testville".to_string(),
        county: Some("Testshire".to_string()),
        postcode: "TE1 1ST".to_string(),
    }
}

/// Register, verify and set a password; returns the access token
pub async fn onboard(facade: &BankingFacade, email: &str) -> String {
    let provisioned = facade.register(registration(email)).await.expect("register");
    let verified = facade
        .verify_email(&provisioned.verification_token.token.to_string())
        .await
        .expect("verify email");
    facade
        .set_password(&verified.set_password_token.token, email, PASSWORD)
        .await
        .expect("set password");
    facade
        .login(email, PASSWORD)
        .await
        .expect("login")
        .tokens
        .access_token
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
