/// Data directory layout and the in-memory track index
use crate::error::{Result, StorageError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{info, warn};
use tracklist_core::{Track, TrackId};

pub(crate) const TRACKS_DIR: &str = "tracks";
pub(crate) const UPLOADS_DIR: &str = "uploads";
pub(crate) const GENRES_FILE: &str = "genres.json";

/// File-backed track store.
///
/// Every track lives in `tracks/<id>.json`; the index in memory mirrors those
/// files and is the only thing readers touch. Writers hold the index lock
/// across the file write, so writes are serialized within one process.
#[derive(Debug, Clone)]
pub struct TrackStore {
    root: PathBuf,
    pub(crate) index: Arc<RwLock<HashMap<TrackId, Track>>>,
}

impl TrackStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            index: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create the directory layout, seed genres and load existing tracks
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(self.tracks_dir()).await?;
        fs::create_dir_all(self.uploads_dir()).await?;
        self.seed_genres().await?;

        let loaded = self.load_tracks().await?;
        let count = loaded.len();
        *self.index.write().await = loaded;

        info!(root = %self.root.display(), tracks = count, "track store ready");
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn tracks_dir(&self) -> PathBuf {
        self.root.join(TRACKS_DIR)
    }

    pub(crate) fn uploads_dir(&self) -> PathBuf {
        self.root.join(UPLOADS_DIR)
    }

    pub(crate) fn genres_file(&self) -> PathBuf {
        self.root.join(GENRES_FILE)
    }

    fn track_file(&self, id: &TrackId) -> Result<PathBuf> {
        if !is_plain_file_name(id.as_str()) {
            return Err(StorageError::InvalidPath(format!("track id {}", id)));
        }
        Ok(self.tracks_dir().join(format!("{}.json", id.as_str())))
    }

    async fn load_tracks(&self) -> Result<HashMap<TrackId, Track>> {
        let mut tracks = HashMap::new();
        let mut entries = fs::read_dir(self.tracks_dir()).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let bytes = fs::read(&path).await?;
            match serde_json::from_slice::<Track>(&bytes) {
                Ok(track) => {
                    tracks.insert(track.id.clone(), track);
                }
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable track file"),
            }
        }

        Ok(tracks)
    }

    pub(crate) async fn write_track(&self, track: &Track) -> Result<()> {
        let path = self.track_file(&track.id)?;
        let json = serde_json::to_vec_pretty(track)?;
        fs::write(path, json).await?;
        Ok(())
    }

    pub(crate) async fn remove_track_file(&self, id: &TrackId) -> Result<()> {
        let path = self.track_file(id)?;
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// A single path component with no separators or parent references
pub(crate) fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains('\0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_file_names() {
        assert!(is_plain_file_name("abc-123.mp3"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name("../etc/passwd"));
        assert!(!is_plain_file_name("a\\b"));
    }

    #[tokio::test]
    async fn initialize_creates_layout() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = TrackStore::new(temp_dir.path());
        store.initialize().await.unwrap();

        assert!(temp_dir.path().join(TRACKS_DIR).is_dir());
        assert!(temp_dir.path().join(UPLOADS_DIR).is_dir());
        assert!(temp_dir.path().join(GENRES_FILE).is_file());
    }
}
