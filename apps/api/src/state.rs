use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::license::LicenseClient;
use crate::llm_client::ModelInvoker;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub llm: Arc<dyn ModelInvoker>,
    pub license: LicenseClient,
    pub config: Config,
}
