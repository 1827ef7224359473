//! The composed filter object consumed by the track list page

use crate::config::PageSize;
use crate::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::history::History;
use crate::state::{FilterState, FilterStore};
use crate::url_sync::UrlSync;
use std::num::NonZeroU32;
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;
use tracklist_core::{SortField, SortOrder, TrackQuery};

/// What [`TracksFilters::next_event`] reacted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// The debounced search value changed (URL synced)
    SearchSettled(String),
    /// The user navigated back/forward; state was restored from the URL
    Navigated(FilterState),
}

enum Wake {
    Search(bool),
    Navigation(Option<FilterState>),
}

/// Filter store + debounced search + URL synchronizer.
///
/// The raw search value (`filters().search`) follows keystrokes; the debounced
/// one drives remote queries and the URL, so history does not fill up with
/// one entry per keystroke.
pub struct TracksFilters<H: History> {
    store: FilterStore,
    search: Debouncer<String>,
    debounced: watch::Receiver<String>,
    url: UrlSync<H>,
}

impl<H: History> TracksFilters<H> {
    /// Build from the current location with the default search delay
    pub fn new(history: H) -> Self {
        Self::with_delay(history, SEARCH_DEBOUNCE)
    }

    pub fn with_delay(history: H, delay: Duration) -> Self {
        let url = UrlSync::new(history);
        let initial = url.initial_state();
        let search = Debouncer::new(initial.search.clone(), delay);
        let debounced = search.subscribe();

        let filters = Self {
            store: FilterStore::new(initial),
            search,
            debounced,
            url,
        };
        // Normalizes a location carrying invalid or default-valued parameters.
        filters.sync_url();
        filters
    }

    pub fn filters(&self) -> &FilterState {
        self.store.state()
    }

    pub fn search(&self) -> &str {
        &self.filters().search
    }

    pub fn genre(&self) -> &str {
        &self.filters().genre
    }

    pub fn artist(&self) -> &str {
        &self.filters().artist
    }

    pub fn sort(&self) -> SortField {
        self.filters().sort
    }

    pub fn order(&self) -> SortOrder {
        self.filters().order
    }

    pub fn page(&self) -> NonZeroU32 {
        self.filters().page
    }

    pub fn limit(&self) -> PageSize {
        self.filters().limit
    }

    pub fn debounced_search(&self) -> String {
        self.debounced.borrow().clone()
    }

    pub fn page_sizes(&self) -> &'static [PageSize] {
        &PageSize::ALL
    }

    pub fn history(&self) -> &H {
        self.url.history()
    }

    /// State as reflected in the URL and in remote queries
    pub fn effective_state(&self) -> FilterState {
        FilterState {
            search: self.debounced_search(),
            ..self.filters().clone()
        }
    }

    /// Request for the remote list endpoint
    pub fn query(&self) -> TrackQuery {
        self.effective_state().to_track_query()
    }

    fn sync_url(&self) -> bool {
        self.url.sync(&self.effective_state())
    }

    /// Update the raw search; the URL follows once the input settles
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.store.set_search(search.clone());
        self.search.push(search);
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.store.set_genre(genre);
        self.sync_url();
    }

    pub fn set_artist(&mut self, artist: impl Into<String>) {
        self.store.set_artist(artist);
        self.sync_url();
    }

    pub fn set_sort(&mut self, sort: SortField) {
        self.store.set_sort(sort);
        self.sync_url();
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.store.set_order(order);
        self.sync_url();
    }

    pub fn set_page(&mut self, page: NonZeroU32) {
        self.store.set_page(page);
        self.sync_url();
    }

    pub fn set_limit(&mut self, limit: PageSize) {
        self.store.set_limit(limit);
        self.sync_url();
    }

    /// Replace the whole state from the live URL (back/forward navigation)
    fn restore(&mut self, state: FilterState) {
        debug!(?state, "restoring filters from URL");
        self.search.flush(state.search.clone());
        // The flush is not a settled keystroke; do not report it.
        self.debounced.borrow_and_update();
        self.store.reset_state(state);
    }

    /// Wait for the next debounced search update or back/forward navigation
    /// and apply it. Returns `None` once the history is gone.
    pub async fn next_event(&mut self) -> Option<FilterEvent> {
        // Navigation first: syncing a settled search over a location the
        // user just navigated to would erase that navigation.
        let wake = tokio::select! {
            biased;
            state = self.url.next_popstate() => Wake::Navigation(state),
            changed = self.debounced.changed() => Wake::Search(changed.is_ok()),
        };

        match wake {
            Wake::Search(false) => None,
            Wake::Search(true) => {
                if let Some(state) = self.url.try_popstate() {
                    self.restore(state.clone());
                    return Some(FilterEvent::Navigated(state));
                }
                let settled = self.debounced.borrow_and_update().clone();
                self.sync_url();
                Some(FilterEvent::SearchSettled(settled))
            }
            Wake::Navigation(state) => {
                let state = state?;
                self.restore(state.clone());
                Some(FilterEvent::Navigated(state))
            }
        }
    }

    /// Apply a pending back/forward navigation without waiting
    pub fn poll_navigation(&mut self) -> Option<FilterState> {
        let state = self.url.try_popstate()?;
        self.restore(state.clone());
        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;

    #[tokio::test]
    async fn initial_state_comes_from_location() {
        let history = MemoryHistory::new("/?search=foo&page=3");
        let filters = TracksFilters::new(history);

        assert_eq!(filters.search(), "foo");
        assert_eq!(filters.debounced_search(), "foo");
        assert_eq!(filters.page().get(), 3);
        assert_eq!(filters.genre(), "");
        assert_eq!(filters.artist(), "");
        assert_eq!(filters.sort(), SortField::CreatedAt);
        assert_eq!(filters.order(), SortOrder::Desc);
        assert_eq!(filters.limit().get(), 20);
    }

    #[tokio::test]
    async fn invalid_location_is_normalized_on_mount() {
        let history = MemoryHistory::new("/?page=0&limit=999&sort=nonsense");
        let filters = TracksFilters::new(history.clone());

        assert_eq!(filters.filters(), &FilterState::default());
        assert_eq!(history.location(), "/");
        assert_eq!(history.len(), 2);
    }

    #[tokio::test]
    async fn page_sizes_exposed() {
        let filters = TracksFilters::new(MemoryHistory::default());
        let sizes: Vec<u32> = filters.page_sizes().iter().map(|s| s.get()).collect();
        assert_eq!(sizes, vec![10, 20, 30, 50, 100]);
    }
}
