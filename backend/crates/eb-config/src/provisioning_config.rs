use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCOUNT_NUMBER_MAX_ATTEMPTS, DEFAULT_CURRENCY,
    DEFAULT_ROUTING_CODE, DEFAULT_VERIFICATION_TOKEN_TTL_SECS, MAX_ACCOUNT_NUMBER_MAX_ATTEMPTS,
    MAX_TOKEN_TTL_SECS, MIN_ACCOUNT_NUMBER_MAX_ATTEMPTS, MIN_TOKEN_TTL_SECS,
};

use serde::Deserialize;

/// Registration and account provisioning settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProvisioningConfig {
    pub verification_token_ttl_secs: u64,
    /// Attempts at a free account number before giving up
    pub account_number_max_attempts: u32,
    pub routing_code: String,
    /// ISO 4217 code stamped on new accounts
    pub currency: String,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            verification_token_ttl_secs: DEFAULT_VERIFICATION_TOKEN_TTL_SECS,
            account_number_max_attempts: DEFAULT_ACCOUNT_NUMBER_MAX_ATTEMPTS,
            routing_code: String::from(DEFAULT_ROUTING_CODE),
            currency: String::from(DEFAULT_CURRENCY),
        }
    }
}

impl ProvisioningConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_TOKEN_TTL_SECS..=MAX_TOKEN_TTL_SECS).contains(&self.verification_token_ttl_secs) {
            return Err(ConfigError::provisioning(format!(
                "provisioning.verification_token_ttl_secs must be {}-{}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.verification_token_ttl_secs
            )));
        }

        if self.account_number_max_attempts < MIN_ACCOUNT_NUMBER_MAX_ATTEMPTS
            || self.account_number_max_attempts > MAX_ACCOUNT_NUMBER_MAX_ATTEMPTS
        {
            return Err(ConfigError::provisioning(format!(
                "provisioning.account_number_max_attempts must be {}-{}, got {}",
                MIN_ACCOUNT_NUMBER_MAX_ATTEMPTS,
                MAX_ACCOUNT_NUMBER_MAX_ATTEMPTS,
                self.account_number_max_attempts
            )));
        }

        if self.routing_code.trim().is_empty() {
            return Err(ConfigError::provisioning(
                "provisioning.routing_code cannot be empty",
            ));
        }

        if self.currency.len() != 3 || !self.currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ConfigError::provisioning(format!(
                "provisioning.currency must be a 3-letter ISO 4217 code, got '{}'",
                self.currency
            )));
        }

        Ok(())
    }
}
