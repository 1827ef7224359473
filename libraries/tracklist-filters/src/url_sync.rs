//! Two-way mapping between [`FilterState`] and the query string
//!
//! Only non-default fields are written, so the query string is a canonical,
//! minimal encoding of the state and `read_state(serialize(s)) == s`.

use crate::config::FilterKey;
use crate::history::{build_location, History, PopState};
use crate::state::FilterState;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::{debug, warn};
use url::form_urlencoded;

/// Ordered `(name, value)` query pairs, values not yet percent-encoded
pub type QueryParams = Vec<(String, String)>;

/// Parse a query string (with or without the leading `?`) into a full state.
///
/// For repeated parameters the first occurrence wins. Missing or invalid
/// parameters yield the field default.
pub fn read_state(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    FilterKey::ALL
        .into_iter()
        .fold(FilterState::default(), |state, key| {
            let raw = pairs
                .iter()
                .find(|(name, _)| name == key.name())
                .map(|(_, value)| value.as_str());
            state.with(key.parse_or_default(raw))
        })
}

/// Non-default fields of `state`, in [`FilterKey::ALL`] order
pub fn serialize(state: &FilterState) -> QueryParams {
    FilterKey::ALL
        .into_iter()
        .map(|key| state.value(key))
        .filter(|value| !value.is_default())
        .map(|value| (value.key().name().to_string(), value.to_param()))
        .collect()
}

/// Percent-encode query pairs (`application/x-www-form-urlencoded`)
pub fn to_query_string(params: &QueryParams) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}

/// Keeps a [`History`] and the filter state consistent.
///
/// Holds a popstate subscription for as long as it lives.
pub struct UrlSync<H: History> {
    history: H,
    popstate: broadcast::Receiver<PopState>,
}

impl<H: History> UrlSync<H> {
    pub fn new(history: H) -> Self {
        let popstate = history.subscribe_popstate();
        Self { history, popstate }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// State encoded by the live location
    pub fn initial_state(&self) -> FilterState {
        read_state(&self.history.search())
    }

    /// Location `state` should be shown at
    pub fn url_for(&self, state: &FilterState) -> String {
        build_location(
            &self.history.pathname(),
            &to_query_string(&serialize(state)),
        )
    }

    /// Push a history entry for `state` unless the location already matches.
    ///
    /// Returns whether an entry was pushed.
    pub fn sync(&self, state: &FilterState) -> bool {
        let next = self.url_for(state);
        if next == self.history.location() {
            return false;
        }

        debug!(url = %next, "syncing filters to URL");
        self.history.push_state(&next);
        true
    }

    /// Wait for the next back/forward navigation and return the state of the
    /// location the browser is showing at that moment.
    ///
    /// Returns `None` once the history is gone.
    pub async fn next_popstate(&mut self) -> Option<FilterState> {
        match self.popstate.recv().await {
            Ok(_) => Some(self.initial_state()),
            Err(RecvError::Lagged(missed)) => {
                warn!(missed, "popstate listener lagged, reading live URL");
                Some(self.initial_state())
            }
            Err(RecvError::Closed) => None,
        }
    }

    /// Non-blocking variant of [`next_popstate`](Self::next_popstate).
    ///
    /// Drains every queued navigation; only the live location matters.
    pub fn try_popstate(&mut self) -> Option<FilterState> {
        let mut navigated = false;
        loop {
            match self.popstate.try_recv() {
                Ok(_) | Err(TryRecvError::Lagged(_)) => navigated = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        navigated.then(|| self.initial_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageSize;
    use crate::history::MemoryHistory;
    use std::num::NonZeroU32;
    use tracklist_core::{SortField, SortOrder};

    #[test]
    fn default_state_serializes_to_empty_query() {
        assert!(serialize(&FilterState::default()).is_empty());
        assert_eq!(to_query_string(&serialize(&FilterState::default())), "");
    }

    #[test]
    fn reads_search_and_page() {
        let state = read_state("?search=foo&page=3");
        assert_eq!(
            state,
            FilterState {
                search: "foo".to_string(),
                page: NonZeroU32::new(3).unwrap(),
                ..FilterState::default()
            }
        );
    }

    #[test]
    fn malformed_parameters_fall_back_to_defaults() {
        for query in [
            "page=0",
            "page=-5",
            "page=abc",
            "limit=7",
            "sort=bogus",
            "order=bogus",
            "page=0&limit=999&sort=nonsense",
            "%%%&&==",
        ] {
            assert_eq!(read_state(query), FilterState::default(), "query {query}");
        }
    }

    #[test]
    fn encoded_whitespace_is_trimmed() {
        assert_eq!(read_state("search=%20test%20").search, "test");
        assert_eq!(read_state("search=+test+").search, "test");
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(read_state("genre=Rock&genre=Jazz").genre, "Rock");
    }

    #[test]
    fn serialization_uses_url_tokens_and_key_order() {
        let state = FilterState {
            order: SortOrder::Asc,
            sort: SortField::CreatedAt,
            limit: PageSize::new(50).unwrap(),
            genre: "Hip Hop".to_string(),
            ..FilterState::default()
        };
        assert_eq!(
            to_query_string(&serialize(&state)),
            "genre=Hip+Hop&order=asc&limit=50"
        );

        let sorted = state.with(crate::config::FilterValue::Sort(SortField::CreatedAt));
        assert!(!to_query_string(&serialize(&sorted)).contains("sort"));
    }

    #[test]
    fn sync_pushes_only_on_change() {
        let history = MemoryHistory::new("/tracks");
        let sync = UrlSync::new(history.clone());

        assert!(!sync.sync(&FilterState::default()));
        assert_eq!(history.len(), 1);

        let state = FilterState {
            sort: SortField::Title,
            ..FilterState::default()
        };
        assert!(sync.sync(&state));
        assert!(!sync.sync(&state));
        assert_eq!(history.len(), 2);
        assert_eq!(history.location(), "/tracks?sort=title");
    }

    #[test]
    fn own_pushes_are_not_popstate() {
        let history = MemoryHistory::default();
        let mut sync = UrlSync::new(history.clone());
        sync.sync(&FilterState {
            artist: "Nina".to_string(),
            ..FilterState::default()
        });
        assert!(sync.try_popstate().is_none());

        history.back();
        assert_eq!(sync.try_popstate(), Some(FilterState::default()));
    }

    #[test]
    fn subscription_ends_with_synchronizer() {
        let history = MemoryHistory::default();
        let sync = UrlSync::new(history.clone());
        assert_eq!(history.popstate_listeners(), 1);
        drop(sync);
        assert_eq!(history.popstate_listeners(), 0);
    }
}
