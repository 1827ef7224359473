//! Tracklist Storage
//!
//! JSON-file persistence for the track library.
//!
//! # Layout
//!
//! ```text
//! <data_dir>/
//!   tracks/<id>.json   one file per track
//!   uploads/           audio and cover files, named `<id>-<file name>`
//!   genres.json        array of genre names
//! ```
//!
//! # Architecture
//!
//! - **Vertical Slicing**: tracks, genres and uploads each own their operations
//! - **Single Writer**: an async `RwLock` over the in-memory index serializes writes
//!
//! # Example
//!
//! ```rust,no_run
//! use tracklist_core::{CreateTrack, TrackQuery};
//! use tracklist_storage::TrackStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = TrackStore::new("./data");
//! store.initialize().await?;
//!
//! store
//!     .create(CreateTrack {
//!         title: "So What".into(),
//!         artist: "Miles Davis".into(),
//!         ..CreateTrack::default()
//!     })
//!     .await?;
//!
//! let page = store.list(&TrackQuery::default()).await;
//! assert_eq!(page.meta.total, 1);
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

// Vertical slices
pub mod genres;
pub mod tracks;
pub mod uploads;

pub use error::{Result, StorageError};
pub use genres::DEFAULT_GENRES;
pub use store::TrackStore;
pub use uploads::{
    is_allowed_content_type, sanitize_file_name, ALLOWED_CONTENT_TYPES, DEFAULT_MAX_UPLOAD_SIZE,
};
