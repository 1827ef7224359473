//! Tracklist Core
//!
//! Shared domain types and error handling for the Tracklist workspace.
//!
//! This crate is used by every other crate (filters, storage, client and
//! server), so it stays free of I/O.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `CreateTrack`, `UpdateTrack`
//! - **List Queries**: `TrackQuery`, `SortField`, `SortOrder`, `TrackPage`
//! - **Error Handling**: Unified `TracklistError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tracklist_core::types::{SortField, SortOrder, TrackQuery};
//!
//! let query = TrackQuery {
//!     sort: Some(SortField::Title),
//!     order: Some(SortOrder::Asc),
//!     ..TrackQuery::default()
//! };
//! assert_eq!(query.page, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod slug;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TracklistError};
pub use slug::slugify;

pub use types::{
    CreateTrack, DeleteTracksRequest, DeleteTracksResponse, PaginationMeta, SortField, SortOrder,
    Track, TrackId, TrackPage, TrackQuery, UpdateTrack,
};
