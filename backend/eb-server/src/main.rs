use eb_server::{AppState, build_router, logger};

use eb_auth::{TokenConfig, TokenService};
use eb_core::AccountSettings;
use eb_db::RetryConfig;
use eb_service::{
    BankingFacade, FacadeConfig, LifecycleConfig, PasswordHasher, PasswordHasherConfig,
};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = eb_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting eb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = eb_db::create_pool(&database_path, config.database.max_connections).await?;

    info!("Running database migrations...");
    eb_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    // validate() guarantees the secret is present
    let secret = config
        .auth
        .jwt_secret
        .clone()
        .ok_or_else(|| eb_config::ConfigError::auth("jwt_secret is required"))?;
    let tokens = TokenService::new(TokenConfig {
        secret: secret.into_bytes(),
        access_ttl: seconds(config.auth.access_token_ttl_secs),
        refresh_ttl: seconds(config.auth.refresh_token_ttl_secs),
        set_password_ttl: seconds(config.auth.set_password_token_ttl_secs),
    });

    let hasher = PasswordHasher::new(PasswordHasherConfig {
        memory_kib: config.password.memory_kib,
        iterations: config.password.iterations,
        parallelism: config.password.parallelism,
    })?;

    let facade = BankingFacade::new(
        pool.clone(),
        Arc::new(tokens),
        Arc::new(hasher),
        FacadeConfig {
            lifecycle: LifecycleConfig {
                verification_token_ttl: seconds(config.provisioning.verification_token_ttl_secs),
                status_update_retry: RetryConfig::default(),
            },
            account_settings: AccountSettings {
                routing_code: config.provisioning.routing_code.clone(),
                currency: config.provisioning.currency.clone(),
            },
            account_number_max_attempts: config.provisioning.account_number_max_attempts,
        },
    );

    let app = build_router(AppState::new(pool.clone(), facade));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

/// Config values are validated into a small range, so the cast cannot wrap
fn seconds(secs: u64) -> chrono::Duration {
    chrono::Duration::seconds(secs as i64)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
