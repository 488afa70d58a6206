use eb_service::BankingFacade;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub facade: Arc<BankingFacade>,
}

impl AppState {
    pub fn new(pool: SqlitePool, facade: BankingFacade) -> Self {
        Self {
            pool,
            facade: Arc::new(facade),
        }
    }
}
