//! Tracklist Client
//!
//! HTTP client library for the Tracklist server API.
//!
//! # Features
//!
//! - **Tracks**: paginated listing with filters, CRUD by id/slug, bulk delete
//! - **Upload**: attach audio files to tracks
//! - **Genres** and **health**
//!
//! # Example
//!
//! ```ignore
//! use tracklist_client::{ClientConfig, TracklistClient};
//! use tracklist_filters::{MemoryHistory, TracksFilters};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TracklistClient::new(ClientConfig::new("http://localhost:8000"))?;
//!     let filters = TracksFilters::new(MemoryHistory::new("/tracks?genre=Jazz"));
//!
//!     let page = client.tracks().list(&filters.query()).await?;
//!     println!("page {} of {}", page.meta.page, page.meta.total_pages);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod tracks;
mod types;
mod upload;

pub use client::TracklistClient;
pub use error::{ClientError, Result};
pub use tracks::TracksClient;
pub use types::{ClientConfig, HealthResponse};
pub use upload::UploadClient;
