//! Track operations for the Tracklist server.

use crate::client::{check_status, parse_json, TracklistClient};
use crate::error::{ClientError, Result};
use tracing::{debug, info};
use tracklist_core::{
    CreateTrack, DeleteTracksRequest, DeleteTracksResponse, Track, TrackId, TrackPage, TrackQuery,
    UpdateTrack,
};
use url::Url;

/// Track client, borrowed from a [`TracklistClient`].
pub struct TracksClient<'a> {
    client: &'a TracklistClient,
}

impl<'a> TracksClient<'a> {
    pub(crate) fn new(client: &'a TracklistClient) -> Self {
        Self { client }
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut path = vec!["api", "tracks"];
        path.extend_from_slice(segments);
        self.client.endpoint_segments(&path)
    }

    /// One page of tracks matching `query`.
    pub async fn list(&self, query: &TrackQuery) -> Result<TrackPage> {
        let url = self.url(&[])?;
        debug!(url = %url, ?query, "Fetching tracks");

        let response = self.client.http().get(url).query(query).send().await?;
        let page: TrackPage = parse_json(response, "track list").await?;

        debug!(
            returned = page.data.len(),
            total = page.meta.total,
            "Fetched tracks"
        );
        Ok(page)
    }

    /// Track by slug; `ClientError::NotFound` when absent.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Track> {
        let url = self.url(&[slug])?;
        debug!(url = %url, "Fetching track");

        let response = self.client.http().get(url).send().await?;
        parse_json(response, "track").await
    }

    pub async fn create(&self, data: &CreateTrack) -> Result<Track> {
        let response = self.client.http().post(self.url(&[])?).json(data).send().await?;
        let track: Track = parse_json(response, "created track").await?;

        info!(id = %track.id, slug = %track.slug, "Track created");
        Ok(track)
    }

    pub async fn update(&self, id: &TrackId, update: &UpdateTrack) -> Result<Track> {
        let response = self
            .client
            .http()
            .put(self.url(&[id.as_str()])?)
            .json(update)
            .send()
            .await?;
        parse_json(response, "updated track").await
    }

    pub async fn delete(&self, id: &TrackId) -> Result<()> {
        let response = self
            .client
            .http()
            .delete(self.url(&[id.as_str()])?)
            .send()
            .await?;
        check_status(response).await?;

        info!(id = %id, "Track deleted");
        Ok(())
    }

    /// Bulk delete; the server reports which ids failed.
    pub async fn delete_many(&self, ids: &[TrackId]) -> Result<DeleteTracksResponse> {
        if ids.is_empty() {
            return Err(ClientError::ServerError {
                status: 400,
                message: "Track IDs are required".to_string(),
            });
        }

        let body = DeleteTracksRequest { ids: ids.to_vec() };
        let response = self
            .client
            .http()
            .post(self.url(&["delete"])?)
            .json(&body)
            .send()
            .await?;
        let outcome: DeleteTracksResponse = parse_json(response, "bulk delete").await?;

        info!(
            deleted = outcome.success.len(),
            failed = outcome.failed.len(),
            "Bulk delete finished"
        );
        Ok(outcome)
    }

    /// Remove the track's audio file and return the updated track.
    pub async fn delete_file(&self, id: &TrackId) -> Result<Track> {
        let response = self
            .client
            .http()
            .delete(self.url(&[id.as_str(), "file"])?)
            .send()
            .await?;
        parse_json(response, "track").await
    }
}
