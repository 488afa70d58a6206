use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_TOKEN_TTL_SECS, DEFAULT_REFRESH_TOKEN_TTL_SECS,
    DEFAULT_SET_PASSWORD_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, MIN_JWT_SECRET_LENGTH,
    MIN_TOKEN_TTL_SECS,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Never logged.
    pub jwt_secret: Option<String>,
    pub access_token_ttl_secs: u64,
    pub refresh_token_ttl_secs: u64,
    pub set_password_token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TOKEN_TTL_SECS,
            set_password_token_ttl_secs: DEFAULT_SET_PASSWORD_TOKEN_TTL_SECS,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("access_token_ttl_secs", &self.access_token_ttl_secs)
            .field("refresh_token_ttl_secs", &self.refresh_token_ttl_secs)
            .field("set_password_token_ttl_secs", &self.set_password_token_ttl_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(secret) = &self.jwt_secret else {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required (set EB_AUTH_JWT_SECRET)",
            ));
        };

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        for (name, value) in [
            ("access_token_ttl_secs", self.access_token_ttl_secs),
            ("refresh_token_ttl_secs", self.refresh_token_ttl_secs),
            ("set_password_token_ttl_secs", self.set_password_token_ttl_secs),
        ] {
            if !(MIN_TOKEN_TTL_SECS..=MAX_TOKEN_TTL_SECS).contains(&value) {
                return Err(ConfigError::auth(format!(
                    "auth.{} must be {}-{}, got {}",
                    name, MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, value
                )));
            }
        }

        if self.refresh_token_ttl_secs < self.access_token_ttl_secs {
            return Err(ConfigError::auth(format!(
                "auth.refresh_token_ttl_secs ({}) must not be shorter than auth.access_token_ttl_secs ({})",
                self.refresh_token_ttl_secs, self.access_token_ttl_secs
            )));
        }

        Ok(())
    }
}
