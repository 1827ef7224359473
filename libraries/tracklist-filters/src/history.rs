//! Browser-style location and session history
//!
//! [`History`] is the seam between the filter synchronizer and whatever owns
//! the address bar. [`MemoryHistory`] is the in-process implementation used by
//! non-browser front ends and by tests.

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;
use tracing::debug;

const POPSTATE_CAPACITY: usize = 16;

/// Fired when the user navigates through history (back/forward).
///
/// Never fired for `push_state`/`replace_state`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopState {
    /// Location after the navigation
    pub url: String,
}

/// Location and session history of a single page
pub trait History {
    /// Path component of the current location
    fn pathname(&self) -> String;

    /// Query string of the current location, without the leading `?`
    fn search(&self) -> String;

    /// Add a new history entry and make it current
    fn push_state(&self, url: &str);

    /// Register a popstate listener. Dropping the receiver deregisters it.
    fn subscribe_popstate(&self) -> broadcast::Receiver<PopState>;

    /// `pathname` plus `?search` when the query is non-empty
    fn location(&self) -> String {
        build_location(&self.pathname(), &self.search())
    }
}

pub(crate) fn build_location(pathname: &str, search: &str) -> String {
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, search)
    }
}

fn split_location(url: &str) -> (String, String) {
    let url = url.split('#').next().unwrap_or_default();
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let path = if path.is_empty() { "/" } else { path };
    (path.to_string(), query.to_string())
}

#[derive(Debug)]
struct Entries {
    urls: Vec<String>,
    index: usize,
}

/// In-memory session history with browser semantics
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Arc<Mutex<Entries>>,
    popstate: broadcast::Sender<PopState>,
}

impl MemoryHistory {
    /// Start a history with a single entry
    pub fn new(initial_url: &str) -> Self {
        let (path, query) = split_location(initial_url);
        let (popstate, _) = broadcast::channel(POPSTATE_CAPACITY);
        Self {
            entries: Arc::new(Mutex::new(Entries {
                urls: vec![build_location(&path, &query)],
                index: 0,
            })),
            popstate,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn current(&self) -> (String, String) {
        let entries = self.lock();
        split_location(&entries.urls[entries.index])
    }

    /// Replace the current entry without adding one
    pub fn replace_state(&self, url: &str) {
        let (path, query) = split_location(url);
        let mut entries = self.lock();
        let index = entries.index;
        entries.urls[index] = build_location(&path, &query);
    }

    /// Move `delta` entries through history, firing popstate if the cursor moved
    pub fn go(&self, delta: isize) -> bool {
        let url = {
            let mut entries = self.lock();
            let target = entries.index as isize + delta;
            if delta == 0 || target < 0 || target >= entries.urls.len() as isize {
                return false;
            }
            entries.index = target as usize;
            entries.urls[entries.index].clone()
        };

        debug!(url = %url, "popstate");
        // No listeners is not an error for a browser either.
        let _ = self.popstate.send(PopState { url });
        true
    }

    pub fn back(&self) -> bool {
        self.go(-1)
    }

    pub fn forward(&self) -> bool {
        self.go(1)
    }

    /// Number of entries in the session history
    pub fn len(&self) -> usize {
        self.lock().urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().urls.is_empty()
    }

    /// Currently registered popstate listeners
    pub fn popstate_listeners(&self) -> usize {
        self.popstate.receiver_count()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn pathname(&self) -> String {
        self.current().0
    }

    fn search(&self) -> String {
        self.current().1
    }

    fn push_state(&self, url: &str) {
        let (path, query) = split_location(url);
        let url = build_location(&path, &query);
        debug!(url = %url, "pushState");

        let mut entries = self.lock();
        let keep = entries.index + 1;
        entries.urls.truncate(keep);
        entries.urls.push(url);
        entries.index = keep;
    }

    fn subscribe_popstate(&self) -> broadcast::Receiver<PopState> {
        self.popstate.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_initial_location() {
        let history = MemoryHistory::new("/tracks?page=2#top");
        assert_eq!(history.pathname(), "/tracks");
        assert_eq!(history.search(), "page=2");
        assert_eq!(history.location(), "/tracks?page=2");

        let bare = MemoryHistory::new("?x=1");
        assert_eq!(bare.pathname(), "/");
    }

    #[test]
    fn push_truncates_forward_entries() {
        let history = MemoryHistory::default();
        history.push_state("/?a=1");
        history.push_state("/?a=2");
        assert!(history.back());
        history.push_state("/?a=3");

        assert_eq!(history.len(), 3);
        assert!(!history.forward());
        assert_eq!(history.search(), "a=3");
    }

    #[test]
    fn back_and_forward_fire_popstate() {
        let history = MemoryHistory::default();
        let mut rx = history.subscribe_popstate();
        history.push_state("/?page=2");
        assert!(rx.try_recv().is_err());

        assert!(history.back());
        assert_eq!(rx.try_recv().unwrap().url, "/");
        assert!(history.forward());
        assert_eq!(rx.try_recv().unwrap().url, "/?page=2");
    }

    #[test]
    fn navigation_out_of_range_is_a_no_op() {
        let history = MemoryHistory::default();
        let mut rx = history.subscribe_popstate();
        assert!(!history.back());
        assert!(!history.forward());
        assert!(!history.go(0));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn replace_keeps_length() {
        let history = MemoryHistory::new("/?a=1");
        history.replace_state("/?a=2");
        assert_eq!(history.len(), 1);
        assert_eq!(history.search(), "a=2");
    }

    #[test]
    fn listeners_deregister_on_drop() {
        let history = MemoryHistory::default();
        let rx = history.subscribe_popstate();
        assert_eq!(history.popstate_listeners(), 1);
        drop(rx);
        assert_eq!(history.popstate_listeners(), 0);
    }
}
