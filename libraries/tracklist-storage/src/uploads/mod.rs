use crate::error::{Result, StorageError};
use crate::store::{is_plain_file_name, TrackStore};
use chrono::Utc;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;
use tracklist_core::{Track, TrackId};

/// Content types accepted for uploads
pub const ALLOWED_CONTENT_TYPES: [&str; 6] = [
    "audio/mpeg",
    "audio/wav",
    "audio/mp3",
    "image/jpeg",
    "image/png",
    "image/jpg",
];

/// Upload size limit used when none is configured (10 MiB)
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

pub fn is_allowed_content_type(content_type: &str) -> bool {
    ALLOWED_CONTENT_TYPES.contains(&content_type)
}

/// Reduce a client-supplied name to `[A-Za-z0-9._-]`, dropping any directory part
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    cleaned.trim_start_matches('.').to_string()
}

impl TrackStore {
    /// Location of an uploaded file; rejects anything but a bare file name
    pub fn upload_path(&self, name: &str) -> Result<PathBuf> {
        if !is_plain_file_name(name) {
            return Err(StorageError::InvalidPath(name.to_string()));
        }
        Ok(self.uploads_dir().join(name))
    }

    /// Store `bytes` as the track's audio file, replacing any previous one
    pub async fn save_audio(&self, id: &TrackId, original_name: &str, bytes: &[u8]) -> Result<Track> {
        let sanitized = sanitize_file_name(original_name);
        if sanitized.is_empty() {
            return Err(StorageError::InvalidInput("File name is required".to_string()));
        }

        let mut index = self.index.write().await;
        let mut track = index
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::not_found("Track", id.as_str()))?;

        let file_name = format!("{}-{}", id.as_str(), sanitized);
        fs::write(self.upload_path(&file_name)?, bytes).await?;

        if let Some(previous) = track.audio_file.replace(file_name.clone()) {
            if previous != file_name {
                self.remove_upload(&previous).await?;
            }
        }
        track.updated_at = Utc::now();

        self.write_track(&track).await?;
        index.insert(track.id.clone(), track.clone());

        info!(id = %id, file = %file_name, size = bytes.len(), "audio file stored");
        Ok(track)
    }

    /// Remove the track's audio file, if it has one
    pub async fn delete_audio(&self, id: &TrackId) -> Result<Track> {
        let mut index = self.index.write().await;
        let mut track = index
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::not_found("Track", id.as_str()))?;

        let Some(file_name) = track.audio_file.take() else {
            return Ok(track);
        };
        self.remove_upload(&file_name).await?;
        track.updated_at = Utc::now();

        self.write_track(&track).await?;
        index.insert(track.id.clone(), track.clone());

        info!(id = %id, file = %file_name, "audio file removed");
        Ok(track)
    }

    pub(crate) async fn remove_upload(&self, name: &str) -> Result<()> {
        match fs::remove_file(self.upload_path(name)?).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_client_names() {
        assert_eq!(sanitize_file_name("My Song.mp3"), "My_Song.mp3");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\music\\a b.wav"), "a_b.wav");
        assert_eq!(sanitize_file_name(".hidden"), "hidden");
        assert_eq!(sanitize_file_name(""), "");
    }

    #[test]
    fn content_type_allowlist() {
        assert!(is_allowed_content_type("audio/mpeg"));
        assert!(is_allowed_content_type("image/png"));
        assert!(!is_allowed_content_type("application/pdf"));
        assert!(!is_allowed_content_type("audio/flac"));
    }

    #[test]
    fn upload_path_rejects_traversal() {
        let store = TrackStore::new("/data");
        assert!(store.upload_path("a.mp3").is_ok());
        assert!(matches!(
            store.upload_path("../secret"),
            Err(StorageError::InvalidPath(_))
        ));
    }
}
