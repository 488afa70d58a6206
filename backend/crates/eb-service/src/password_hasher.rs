//! Argon2id password hashing.
//!
//! Hashing is deliberately slow, so both hash and verify run on the blocking pool.

use crate::{Result as ServiceResult, ServiceError};

use std::sync::Arc;

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher as _, PasswordVerifier, Version,
};

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasherConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordHasherConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

pub struct PasswordHasher {
    argon2: Arc<Argon2<'static>>,
    /// Verified against when the account has no hash, so both paths cost the same
    dummy_hash: Arc<str>,
}

impl PasswordHasher {
    pub fn new(config: PasswordHasherConfig) -> ServiceResult<Self> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| ServiceError::internal(format!("invalid Argon2 parameters: {}", e)))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let salt = SaltString::generate(&mut OsRng);
        let dummy_hash = argon2
            .hash_password(b"dummy-password-for-timing", &salt)
            .map_err(|e| ServiceError::internal(format!("failed to build dummy hash: {}", e)))?
            .to_string();

        Ok(Self {
            argon2: Arc::new(argon2),
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    /// PHC-formatted Argon2id hash with a fresh random salt
    pub async fn hash(&self, password: &str) -> ServiceResult<String> {
        let argon2 = Arc::clone(&self.argon2);
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| ServiceError::internal(format!("password hashing failed: {}", e)))
        })
        .await
        .map_err(|e| ServiceError::internal(format!("hashing task failed: {}", e)))?
    }

    /// Constant-time check of `password` against `stored`.
    ///
    /// With no stored hash a dummy hash is verified instead and `false` returned.
    pub async fn verify(&self, password: &str, stored: Option<&str>) -> ServiceResult<bool> {
        let argon2 = Arc::clone(&self.argon2);
        let password = password.to_owned();
        let has_hash = stored.is_some();
        let hash: Arc<str> = match stored {
            Some(hash) => Arc::from(hash),
            None => Arc::clone(&self.dummy_hash),
        };

        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&hash)
                .map_err(|e| ServiceError::internal(format!("stored hash is malformed: {}", e)))?;
            let matches = argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok();
            Ok(matches && has_hash)
        })
        .await
        .map_err(|e| ServiceError::internal(format!("verification task failed: {}", e)))?
    }
}
