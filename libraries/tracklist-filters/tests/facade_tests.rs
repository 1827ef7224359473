//! Integration tests for the track list filters facade
//!
//! Time is paused, so debounce delays are driven with `tokio::time::advance`.

use std::num::NonZeroU32;
use std::time::Duration;
use tracklist_core::{SortField, SortOrder};
use tracklist_filters::{
    FilterEvent, FilterState, History, MemoryHistory, PageSize, TracksFilters, SEARCH_DEBOUNCE,
};

fn page(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

#[tokio::test(start_paused = true)]
async fn sort_and_order_are_written_to_url() {
    let history = MemoryHistory::new("/tracks");
    let mut filters = TracksFilters::new(history.clone());

    filters.set_sort(SortField::Title);
    filters.set_order(SortOrder::Asc);

    assert_eq!(history.location(), "/tracks?sort=title&order=asc");
    assert_eq!(history.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn returning_to_default_removes_key() {
    let history = MemoryHistory::default();
    let mut filters = TracksFilters::new(history.clone());

    filters.set_limit(PageSize::new(50).unwrap());
    filters.set_page(page(4));
    assert_eq!(history.search(), "page=4&limit=50");

    filters.set_limit(PageSize::DEFAULT);
    assert_eq!(history.search(), "page=4");
    filters.set_page(page(1));
    assert_eq!(history.location(), "/");
}

#[tokio::test(start_paused = true)]
async fn setting_current_value_does_not_push() {
    let history = MemoryHistory::default();
    let mut filters = TracksFilters::new(history.clone());

    filters.set_genre("Rock");
    filters.set_genre("Rock");
    filters.set_sort(SortField::CreatedAt);

    assert_eq!(history.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn rapid_typing_pushes_one_url() {
    let history = MemoryHistory::default();
    let mut filters = TracksFilters::new(history.clone());

    for typed in ["r", "ro", "roc", "rock"] {
        filters.set_search(typed);
        tokio::time::advance(Duration::from_millis(100)).await;
    }

    assert_eq!(filters.search(), "rock");
    assert_eq!(filters.debounced_search(), "");
    assert_eq!(history.len(), 1);

    tokio::time::advance(SEARCH_DEBOUNCE).await;
    let event = filters.next_event().await;

    assert_eq!(event, Some(FilterEvent::SearchSettled("rock".to_string())));
    assert_eq!(history.location(), "/?search=rock");
    assert_eq!(history.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn query_uses_debounced_search() {
    let history = MemoryHistory::new("/?genre=Jazz");
    let mut filters = TracksFilters::new(history);

    filters.set_search("miles");
    let query = filters.query();
    assert!(query.search.is_none());
    assert_eq!(query.genre.as_deref(), Some("Jazz"));
    assert_eq!(query.limit, 20);

    tokio::time::advance(SEARCH_DEBOUNCE).await;
    filters.next_event().await;
    assert_eq!(filters.query().search.as_deref(), Some("miles"));
}

#[tokio::test(start_paused = true)]
async fn other_setters_keep_url_search_debounced() {
    let history = MemoryHistory::default();
    let mut filters = TracksFilters::new(history.clone());

    filters.set_search("pending");
    filters.set_artist("Nina");

    assert_eq!(history.search(), "artist=Nina");
}

#[tokio::test(start_paused = true)]
async fn back_navigation_restores_state() {
    let history = MemoryHistory::default();
    let mut filters = TracksFilters::new(history.clone());

    filters.set_genre("Rock");
    filters.set_page(page(2));
    assert!(history.back());

    let event = filters.next_event().await;
    let expected = FilterState {
        genre: "Rock".to_string(),
        ..FilterState::default()
    };
    assert_eq!(event, Some(FilterEvent::Navigated(expected.clone())));
    assert_eq!(filters.filters(), &expected);
    assert_eq!(history.location(), "/?genre=Rock");
}

#[tokio::test(start_paused = true)]
async fn popstate_to_empty_url_resets_everything() {
    let history = MemoryHistory::new("/?search=jazz&genre=Jazz&sort=album&order=asc&page=3&limit=10");
    let mut filters = TracksFilters::new(history.clone());
    assert_eq!(filters.page().get(), 3);

    history.push_state("/");
    history.push_state("/?page=9");
    history.go(-1);

    let state = filters.poll_navigation();
    assert_eq!(state, Some(FilterState::default()));
    assert_eq!(filters.filters(), &FilterState::default());
    assert_eq!(filters.debounced_search(), "");
}

#[tokio::test(start_paused = true)]
async fn navigation_discards_pending_search() {
    let history = MemoryHistory::default();
    let mut filters = TracksFilters::new(history.clone());

    filters.set_genre("Pop");
    filters.set_search("typing");
    assert!(history.back());

    assert!(filters.poll_navigation().is_some());
    assert_eq!(filters.search(), "");

    tokio::time::advance(SEARCH_DEBOUNCE * 2).await;
    assert_eq!(filters.debounced_search(), "");
    assert_eq!(history.location(), "/");
}

#[tokio::test(start_paused = true)]
async fn no_navigation_means_nothing_to_poll() {
    let history = MemoryHistory::default();
    let mut filters = TracksFilters::new(history.clone());
    filters.set_artist("Nina");

    assert!(filters.poll_navigation().is_none());
}

#[tokio::test(start_paused = true)]
async fn dropping_filters_deregisters_listener() {
    let history = MemoryHistory::default();
    let filters = TracksFilters::new(history.clone());
    assert_eq!(history.popstate_listeners(), 1);

    drop(filters);
    assert_eq!(history.popstate_listeners(), 0);
}

#[tokio::test(start_paused = true)]
async fn navigation_wins_over_search_settling_at_the_same_time() {
    let history = MemoryHistory::default();
    let mut filters = TracksFilters::new(history.clone());

    filters.set_genre("Rock");
    filters.set_search("rock");
    assert!(history.back());
    tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;

    let event = filters.next_event().await;
    assert_eq!(event, Some(FilterEvent::Navigated(FilterState::default())));
    assert_eq!(filters.filters(), &FilterState::default());
    assert_eq!(filters.debounced_search(), "");
    assert_eq!(history.location(), "/");
    assert_eq!(history.len(), 2);

    let next = tokio::time::timeout(SEARCH_DEBOUNCE * 4, filters.next_event()).await;
    assert!(next.is_err());
    assert_eq!(history.location(), "/");
}
