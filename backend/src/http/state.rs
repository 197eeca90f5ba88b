//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::ReadingService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only reading service (descriptions, composer)
    pub reading: Arc<ReadingService>,
}

impl AppState {
    /// Create a new application state with the given reading service.
    pub fn new(reading: ReadingService) -> Self {
        Self {
            reading: Arc::new(reading),
        }
    }
}
