/// Track domain type
use crate::slug::slugify;
use crate::types::TrackId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A track record as persisted and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name, empty when unknown
    #[serde(default)]
    pub album: String,

    /// Genre names
    #[serde(default)]
    pub genres: Vec<String>,

    /// URL slug derived from the title, unique across tracks
    pub slug: String,

    /// Cover image URL, empty when unset
    #[serde(default)]
    pub cover_image: String,

    /// Stored audio file name (relative to the uploads directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,

    /// When the track was created
    pub created_at: DateTime<Utc>,

    /// When the track was last modified
    pub updated_at: DateTime<Utc>,
}

impl Track {
    /// Build a new track from creation data, stamping id, slug and timestamps
    pub fn from_create(data: CreateTrack) -> Self {
        let now = Utc::now();
        Self {
            id: TrackId::generate(),
            slug: slugify(&data.title),
            title: data.title,
            artist: data.artist,
            album: data.album,
            genres: data.genres,
            cover_image: data.cover_image,
            audio_file: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Empty strings and empty genre lists are ignored.
    ///
    /// Returns `true` when the title changed (and the slug was regenerated).
    pub fn apply_update(&mut self, update: UpdateTrack) -> bool {
        let mut title_changed = false;

        if let Some(title) = update.title.filter(|t| !t.is_empty()) {
            if title != self.title {
                self.slug = slugify(&title);
                title_changed = true;
            }
            self.title = title;
        }
        if let Some(artist) = update.artist.filter(|a| !a.is_empty()) {
            self.artist = artist;
        }
        if let Some(album) = update.album.filter(|a| !a.is_empty()) {
            self.album = album;
        }
        if let Some(genres) = update.genres.filter(|g| !g.is_empty()) {
            self.genres = genres;
        }
        if let Some(cover_image) = update.cover_image.filter(|c| !c.is_empty()) {
            self.cover_image = cover_image;
        }

        self.updated_at = Utc::now();
        title_changed
    }

    /// Whether any genre of this track equals `genre` exactly
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// Data for creating a new track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrack {
    /// Track title (required)
    #[serde(default)]
    pub title: String,
    /// Artist name (required)
    #[serde(default)]
    pub artist: String,
    /// Album name
    #[serde(default)]
    pub album: String,
    /// Genre names
    #[serde(default)]
    pub genres: Vec<String>,
    /// Cover image URL
    #[serde(default)]
    pub cover_image: String,
}

impl CreateTrack {
    /// Check required fields after trimming surrounding whitespace
    pub fn has_required_fields(&self) -> bool {
        !self.title.trim().is_empty() && !self.artist.trim().is_empty()
    }
}

/// Partial update of a track; `None` and empty values leave the field as is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Track {
        Track::from_create(CreateTrack {
            title: "Test Track".to_string(),
            artist: "Test Artist".to_string(),
            album: "Test Album".to_string(),
            genres: vec!["Rock".to_string()],
            cover_image: String::new(),
        })
    }

    #[test]
    fn from_create_derives_slug_and_timestamps() {
        let track = sample();
        assert_eq!(track.slug, "test-track");
        assert_eq!(track.created_at, track.updated_at);
        assert!(track.audio_file.is_none());
    }

    #[test]
    fn update_ignores_empty_fields() {
        let mut track = sample();
        let changed = track.apply_update(UpdateTrack {
            title: Some(String::new()),
            artist: Some("New Artist".to_string()),
            album: Some(String::new()),
            genres: Some(vec![]),
            cover_image: None,
        });

        assert!(!changed);
        assert_eq!(track.title, "Test Track");
        assert_eq!(track.artist, "New Artist");
        assert_eq!(track.album, "Test Album");
        assert_eq!(track.genres, vec!["Rock".to_string()]);
    }

    #[test]
    fn title_change_regenerates_slug() {
        let mut track = sample();
        let changed = track.apply_update(UpdateTrack {
            title: Some("Updated Track Title".to_string()),
            ..UpdateTrack::default()
        });

        assert!(changed);
        assert_eq!(track.slug, "updated-track-title");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("coverImage").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("audioFile").is_none());
    }

    #[test]
    fn required_fields_are_trimmed() {
        let data = CreateTrack {
            title: "   ".to_string(),
            artist: "Someone".to_string(),
            ..CreateTrack::default()
        };
        assert!(!data.has_required_fields());
    }
}
