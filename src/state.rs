use crate::config::ServerConfig;
use crate::store::CoffeeStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Document store handle, shared across requests. Injected rather than
    /// global so tests can substitute the in-memory backend.
    pub store: Arc<dyn CoffeeStore>,
}

impl ServerState {
    /// Create server state around an already-connected store
    pub fn new(config: ServerConfig, store: Arc<dyn CoffeeStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
