mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod password_config;
mod provisioning_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use password_config::PasswordConfig;
pub use provisioning_config::ProvisioningConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "EB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".eb";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "eagle-bank.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 64;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 15 * 60;
const DEFAULT_REFRESH_TOKEN_TTL_SECS: u64 = 60 * 60;
const DEFAULT_SET_PASSWORD_TOKEN_TTL_SECS: u64 = 10 * 60;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

const DEFAULT_VERIFICATION_TOKEN_TTL_SECS: u64 = 60 * 60;
const DEFAULT_ACCOUNT_NUMBER_MAX_ATTEMPTS: u32 = 3;
const MIN_ACCOUNT_NUMBER_MAX_ATTEMPTS: u32 = 1;
const MAX_ACCOUNT_NUMBER_MAX_ATTEMPTS: u32 = 10;
const DEFAULT_ROUTING_CODE: &str = "10-10-10";
const DEFAULT_CURRENCY: &str = "GBP";

// Argon2id defaults (OWASP minimum profile)
const DEFAULT_PASSWORD_MEMORY_KIB: u32 = 19 * 1024;
const DEFAULT_PASSWORD_ITERATIONS: u32 = 2;
const DEFAULT_PASSWORD_PARALLELISM: u32 = 1;
const MAX_PASSWORD_MEMORY_KIB: u32 = 1024 * 1024;
const MAX_PASSWORD_ITERATIONS: u32 = 16;
const MAX_PASSWORD_PARALLELISM: u32 = 16;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
