use std::sync::Arc;
use std::time::Duration;

use movies_core::store::MovieStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store handle lives for the whole process.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the `movies` collection.
    pub store: Arc<dyn MovieStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Time budget for the store calls of a single handler invocation.
    pub fn store_timeout(&self) -> Duration {
        self.config.store_timeout()
    }
}
