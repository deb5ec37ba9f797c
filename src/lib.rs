pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod model;
pub mod observability;
pub mod route;
pub mod schema;
pub mod store;

use tokio::sync::RwLock;

use crate::store::UserRegistry;

// Struct representing the application state
pub struct AppState {
    pub registry: RwLock<UserRegistry>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_registry(UserRegistry::new())
    }

    pub fn with_registry(registry: UserRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
