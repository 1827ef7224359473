//! Tracklist Filters
//!
//! Filter state for the track list page, kept in sync with the page URL.
//!
//! # Architecture
//!
//! - **Config**: field defaults, allowed page sizes, sort option labels and
//!   the per-field query-string codec ([`config`])
//! - **State**: [`FilterState`] and its reducer ([`state`])
//! - **Debounce**: delayed republishing of the free-text search ([`debounce`])
//! - **URL sync**: query-string mapping and the [`History`] seam ([`url_sync`],
//!   [`history`])
//! - **Facade**: [`TracksFilters`], the single object a page consumes
//! - **Selection**: selected tracks for bulk deletion ([`selection`])
//!
//! # Example
//!
//! ```rust
//! use tracklist_filters::{History, MemoryHistory, TracksFilters};
//! use tracklist_core::{SortField, SortOrder};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let history = MemoryHistory::new("/tracks");
//! let mut filters = TracksFilters::new(history.clone());
//!
//! filters.set_sort(SortField::Title);
//! filters.set_order(SortOrder::Asc);
//! assert_eq!(history.location(), "/tracks?sort=title&order=asc");
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod debounce;
pub mod facade;
pub mod history;
pub mod selection;
pub mod state;
pub mod url_sync;

pub use config::{FilterKey, FilterValue, PageSize, PAGE_SIZES};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use facade::{FilterEvent, TracksFilters};
pub use history::{History, MemoryHistory, PopState};
pub use selection::{DeleteSummary, TrackSelection};
pub use state::{reduce, FilterAction, FilterState, FilterStore};
pub use url_sync::{read_state, serialize, to_query_string, QueryParams, UrlSync};
