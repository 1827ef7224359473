//! Audio file uploads for the Tracklist server.

use crate::client::{parse_json, TracklistClient};
use crate::error::{ClientError, Result};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::{debug, info};
use tracklist_core::{Track, TrackId};

/// Upload client, borrowed from a [`TracklistClient`].
pub struct UploadClient<'a> {
    client: &'a TracklistClient,
}

impl<'a> UploadClient<'a> {
    pub(crate) fn new(client: &'a TracklistClient) -> Self {
        Self { client }
    }

    /// Upload a file from disk as the track's audio.
    pub async fn audio_file(&self, id: &TrackId, file_path: &Path) -> Result<Track> {
        if !file_path.exists() {
            return Err(ClientError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("track")
            .to_string();

        debug!(file = %file_path.display(), "Uploading audio");
        let contents = tokio::fs::read(file_path).await?;

        self.audio_bytes(id, &file_name, mime_type_for_file(file_path), contents)
            .await
    }

    /// Upload in-memory content as the track's audio.
    pub async fn audio_bytes(
        &self,
        id: &TrackId,
        file_name: &str,
        content_type: &str,
        contents: Vec<u8>,
    ) -> Result<Track> {
        let size = contents.len();
        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("file", part);

        let url = self
            .client
            .endpoint_segments(&["api", "tracks", id.as_str(), "upload"])?;
        let response = self.client.http().post(url).multipart(form).send().await?;
        let track: Track = parse_json(response, "upload").await?;

        info!(id = %id, file = %file_name, size, "Audio uploaded");
        Ok(track)
    }
}

/// MIME type the server accepts for a file extension.
fn mime_type_for_file(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_types() {
        assert_eq!(mime_type_for_file(Path::new("song.mp3")), "audio/mpeg");
        assert_eq!(mime_type_for_file(Path::new("SONG.MP3")), "audio/mpeg");
        assert_eq!(mime_type_for_file(Path::new("song.wav")), "audio/wav");
        assert_eq!(mime_type_for_file(Path::new("cover.jpg")), "image/jpeg");
        assert_eq!(
            mime_type_for_file(Path::new("song.flac")),
            "application/octet-stream"
        );
    }
}
