use crate::error::{Result, StorageError};
use crate::store::TrackStore;
use std::cmp::Ordering;
use tracing::{debug, info, warn};
use tracklist_core::{
    CreateTrack, DeleteTracksResponse, PaginationMeta, SortField, SortOrder, Track, TrackId,
    TrackPage, TrackQuery, UpdateTrack,
};

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether `track` passes the search, genre and artist filters of `query`
pub fn matches(track: &Track, query: &TrackQuery) -> bool {
    let search = query.search.as_deref().filter(|s| !s.is_empty());
    let genre = query.genre.as_deref().filter(|g| !g.is_empty());
    let artist = query.artist.as_deref().filter(|a| !a.is_empty());

    search.map_or(true, |s| {
        contains_ci(&track.title, s) || contains_ci(&track.artist, s) || contains_ci(&track.album, s)
    }) && genre.map_or(true, |g| track.has_genre(g))
        && artist.map_or(true, |a| contains_ci(&track.artist, a))
}

/// Ordering of two tracks by `field`; text fields compare case-insensitively
pub fn compare(a: &Track, b: &Track, field: SortField) -> Ordering {
    let text = |x: &str, y: &str| x.to_lowercase().cmp(&y.to_lowercase());
    match field {
        SortField::Title => text(&a.title, &b.title),
        SortField::Artist => text(&a.artist, &b.artist),
        SortField::Album => text(&a.album, &b.album),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// Filter, sort and paginate `tracks`
pub fn select_page(tracks: impl IntoIterator<Item = Track>, query: &TrackQuery) -> TrackPage {
    let mut matching: Vec<Track> = tracks.into_iter().filter(|t| matches(t, query)).collect();

    let field = query.sort.unwrap_or_default();
    let order = query.order.unwrap_or_default();
    matching.sort_by(|a, b| {
        let ordering = compare(a, b, field).then_with(|| a.id.cmp(&b.id));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let total = matching.len();
    let data = matching
        .into_iter()
        .skip(query.offset())
        .take(query.limit())
        .collect();

    TrackPage {
        data,
        meta: PaginationMeta::new(total, query.page(), query.limit()),
    }
}

impl TrackStore {
    pub async fn list(&self, query: &TrackQuery) -> TrackPage {
        let index = self.index.read().await;
        let page = select_page(index.values().cloned(), query);
        debug!(total = page.meta.total, page = page.meta.page, "listed tracks");
        page
    }

    pub async fn get_by_id(&self, id: &TrackId) -> Result<Track> {
        self.index
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::not_found("Track", id.as_str()))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Track> {
        self.index
            .read()
            .await
            .values()
            .find(|t| t.slug == slug)
            .cloned()
            .ok_or_else(|| StorageError::not_found("Track", slug))
    }

    /// Create a track. Title and artist are required; the slug derived from
    /// the title must be unused.
    pub async fn create(&self, data: CreateTrack) -> Result<Track> {
        if !data.has_required_fields() {
            return Err(StorageError::InvalidInput(
                "Title and artist are required".to_string(),
            ));
        }

        let track = Track::from_create(data);
        let mut index = self.index.write().await;
        if index.values().any(|t| t.slug == track.slug) {
            return Err(StorageError::Conflict(
                "A track with this title already exists".to_string(),
            ));
        }

        self.write_track(&track).await?;
        index.insert(track.id.clone(), track.clone());

        info!(id = %track.id, slug = %track.slug, "track created");
        Ok(track)
    }

    /// Apply a partial update; a new title must not collide with another
    /// track's slug
    pub async fn update(&self, id: &TrackId, update: UpdateTrack) -> Result<Track> {
        let mut index = self.index.write().await;
        let mut track = index
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::not_found("Track", id.as_str()))?;

        if track.apply_update(update)
            && index.values().any(|t| t.slug == track.slug && t.id != track.id)
        {
            return Err(StorageError::Conflict(
                "A track with this title already exists".to_string(),
            ));
        }

        self.write_track(&track).await?;
        index.insert(track.id.clone(), track.clone());

        info!(id = %track.id, "track updated");
        Ok(track)
    }

    /// Delete a track and its uploaded audio.
    ///
    /// The track stays indexed unless its file is gone. Audio left behind is
    /// only logged.
    pub async fn delete(&self, id: &TrackId) -> Result<()> {
        let mut index = self.index.write().await;
        if !index.contains_key(id) {
            return Err(StorageError::not_found("Track", id.as_str()));
        }

        self.remove_track_file(id).await?;
        let Some(track) = index.remove(id) else {
            return Ok(());
        };
        if let Some(file) = &track.audio_file {
            if let Err(e) = self.remove_upload(file).await {
                warn!(id = %id, file = %file, error = %e, "failed to remove audio of deleted track");
            }
        }

        info!(id = %id, "track deleted");
        Ok(())
    }

    /// Delete every id that exists; unknown ids and ids whose files could not
    /// be removed are reported as failed
    pub async fn delete_many(&self, ids: &[TrackId]) -> DeleteTracksResponse {
        let mut response = DeleteTracksResponse::default();
        for id in ids {
            match self.delete(id).await {
                Ok(()) => response.success.push(id.clone()),
                Err(e) => {
                    debug!(id = %id, error = %e, "bulk delete skipped track");
                    response.failed.push(id.clone());
                }
            }
        }
        response
    }
}
