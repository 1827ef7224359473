//! Test helpers and fixtures for storage integration tests
//!
//! Every store lives in its own temporary data directory, removed on drop.

#![allow(dead_code)]

use tempfile::TempDir;
use tracklist_core::{CreateTrack, Track};
use tracklist_storage::TrackStore;

/// Initialized store wrapper that cleans up on drop
pub struct TestStore {
    pub store: TrackStore,
    temp_dir: TempDir,
}

impl TestStore {
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = TrackStore::new(temp_dir.path());
        store.initialize().await.expect("Failed to initialize store");
        Self { store, temp_dir }
    }

    pub fn path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    /// A second store over the same directory, as after a restart
    pub async fn reopen(&self) -> TrackStore {
        let store = TrackStore::new(self.temp_dir.path());
        store.initialize().await.expect("Failed to reopen store");
        store
    }
}

pub fn new_track(title: &str, artist: &str) -> CreateTrack {
    CreateTrack {
        title: title.to_string(),
        artist: artist.to_string(),
        album: "Test Album".to_string(),
        genres: vec!["Rock".to_string()],
        cover_image: String::new(),
    }
}

/// Test fixture: create a track or panic
pub async fn create_test_track(store: &TrackStore, title: &str, artist: &str) -> Track {
    store
        .create(new_track(title, artist))
        .await
        .expect("Failed to create test track")
}
