use std::sync::Arc;

use crate::application::services::{CreationService, RedirectEngine};
use crate::domain::repositories::RecordStore;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub creation_service: Arc<CreationService>,
    pub redirect_engine: Arc<RedirectEngine>,
    pub store: Arc<dyn RecordStore>,
    pub base_url: String,
}

impl AppState {
    /// Full short URL for a code, e.g. `https://s.example.com/abc123`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
