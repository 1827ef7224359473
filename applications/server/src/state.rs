/// Shared application state
use crate::config::ServerConfig;
use std::sync::Arc;
use tracklist_storage::TrackStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: TrackStore,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: TrackStore, config: Arc<ServerConfig>) -> Self {
        Self { store, config }
    }

    pub fn max_upload_size(&self) -> usize {
        self.config.upload.max_file_size
    }
}
