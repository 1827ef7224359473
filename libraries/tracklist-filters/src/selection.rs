//! Track selection for bulk actions

use tracing::{info, warn};
use tracklist_core::{DeleteTracksRequest, DeleteTracksResponse, TrackId};

/// Result of a bulk delete as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteSummary {
    pub deleted: usize,
    pub failed: usize,
}

impl DeleteSummary {
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Ordered set of selected track ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackSelection {
    ids: Vec<TrackId>,
}

impl TrackSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection; duplicates keep their first position
    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = TrackId>) {
        self.ids.clear();
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Select `id` if unselected, otherwise unselect it. Returns whether it
    /// is selected afterwards.
    pub fn toggle(&mut self, id: TrackId) -> bool {
        if let Some(pos) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: &TrackId) -> bool {
        self.ids.contains(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn selected(&self) -> &[TrackId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Body for the bulk delete endpoint, `None` when nothing is selected
    pub fn delete_request(&self) -> Option<DeleteTracksRequest> {
        (!self.is_empty()).then(|| DeleteTracksRequest {
            ids: self.ids.clone(),
        })
    }

    /// Clear the selection after a bulk delete and summarize the outcome
    pub fn apply_outcome(&mut self, response: &DeleteTracksResponse) -> DeleteSummary {
        let summary = DeleteSummary {
            deleted: response.success.len(),
            failed: response.failed.len(),
        };

        if summary.is_complete() {
            info!(deleted = summary.deleted, "tracks deleted");
        } else {
            warn!(
                deleted = summary.deleted,
                failed = summary.failed,
                "some tracks could not be deleted"
            );
        }

        self.clear();
        summary
    }
}
