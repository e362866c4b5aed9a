//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostService;
use blog_infra::InMemoryPostService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostService>,
}

impl AppState {
    /// Build the application state with the in-memory post service.
    pub fn new() -> Self {
        tracing::info!("Application state initialized (in-memory post store)");

        Self {
            posts: Arc::new(InMemoryPostService::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
