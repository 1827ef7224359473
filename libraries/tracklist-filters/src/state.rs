//! Filter state and its reducer

use crate::config::{
    FilterKey, FilterValue, PageSize, DEFAULT_ARTIST, DEFAULT_GENRE, DEFAULT_PAGE,
    DEFAULT_SEARCH_TERM, DEFAULT_SORT_FIELD, DEFAULT_SORT_ORDER,
};
use std::num::NonZeroU32;
use tracing::debug;
use tracklist_core::{SortField, SortOrder, TrackQuery};

/// Current values of every filter field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub genre: String,
    pub artist: String,
    pub sort: SortField,
    pub order: SortOrder,
    pub page: NonZeroU32,
    pub limit: PageSize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: DEFAULT_SEARCH_TERM.to_string(),
            genre: DEFAULT_GENRE.to_string(),
            artist: DEFAULT_ARTIST.to_string(),
            sort: DEFAULT_SORT_FIELD,
            order: DEFAULT_SORT_ORDER,
            page: DEFAULT_PAGE,
            limit: PageSize::DEFAULT,
        }
    }
}

impl FilterState {
    /// Value of one field as a tagged value
    pub fn value(&self, key: FilterKey) -> FilterValue {
        match key {
            FilterKey::Search => FilterValue::Search(self.search.clone()),
            FilterKey::Genre => FilterValue::Genre(self.genre.clone()),
            FilterKey::Artist => FilterValue::Artist(self.artist.clone()),
            FilterKey::Sort => FilterValue::Sort(self.sort),
            FilterKey::Order => FilterValue::Order(self.order),
            FilterKey::Page => FilterValue::Page(self.page),
            FilterKey::Limit => FilterValue::Limit(self.limit),
        }
    }

    /// Replace exactly the field `value` belongs to
    pub fn apply(&mut self, value: FilterValue) {
        match value {
            FilterValue::Search(search) => self.search = search,
            FilterValue::Genre(genre) => self.genre = genre,
            FilterValue::Artist(artist) => self.artist = artist,
            FilterValue::Sort(sort) => self.sort = sort,
            FilterValue::Order(order) => self.order = order,
            FilterValue::Page(page) => self.page = page,
            FilterValue::Limit(limit) => self.limit = limit,
        }
    }

    /// Builder-style [`apply`](Self::apply)
    pub fn with(mut self, value: FilterValue) -> Self {
        self.apply(value);
        self
    }

    /// Request for the remote list endpoint. Empty text filters are omitted.
    pub fn to_track_query(&self) -> TrackQuery {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        TrackQuery {
            page: self.page.get(),
            limit: self.limit.get(),
            sort: Some(self.sort),
            order: Some(self.order),
            search: non_empty(&self.search),
            genre: non_empty(&self.genre),
            artist: non_empty(&self.artist),
        }
    }
}

/// Transitions of the filter state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Replace a single field
    SetField(FilterValue),
    /// Replace the whole state (restoring from the URL)
    ResetState(FilterState),
}

/// Pure reducer
pub fn reduce(state: FilterState, action: FilterAction) -> FilterState {
    match action {
        FilterAction::SetField(value) => state.with(value),
        FilterAction::ResetState(next) => next,
    }
}

/// Holder of the current filter state.
///
/// Setters perform no validation; typed values are valid by construction and
/// raw input is validated at the parse boundary in [`crate::config`].
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    state: FilterState,
}

impl FilterStore {
    pub fn new(initial: FilterState) -> Self {
        Self { state: initial }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn dispatch(&mut self, action: FilterAction) {
        debug!(?action, "filter action");
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
    }

    pub fn set_field(&mut self, value: FilterValue) {
        self.dispatch(FilterAction::SetField(value));
    }

    pub fn reset_state(&mut self, state: FilterState) {
        self.dispatch(FilterAction::ResetState(state));
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.set_field(FilterValue::Search(search.into()));
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.set_field(FilterValue::Genre(genre.into()));
    }

    pub fn set_artist(&mut self, artist: impl Into<String>) {
        self.set_field(FilterValue::Artist(artist.into()));
    }

    pub fn set_sort(&mut self, sort: SortField) {
        self.set_field(FilterValue::Sort(sort));
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.set_field(FilterValue::Order(order));
    }

    pub fn set_page(&mut self, page: NonZeroU32) {
        self.set_field(FilterValue::Page(page));
    }

    pub fn set_limit(&mut self, limit: PageSize) {
        self.set_field(FilterValue::Limit(limit));
    }
}
