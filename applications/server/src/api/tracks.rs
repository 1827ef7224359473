/// Tracks API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use tracing::info;
use tracklist_core::{
    CreateTrack, DeleteTracksRequest, DeleteTracksResponse, Track, TrackId, TrackPage,
    TrackQuery, UpdateTrack,
};
use tracklist_storage::is_allowed_content_type;

/// GET /api/tracks
pub async fn list_tracks(
    State(app_state): State<AppState>,
    Query(query): Query<TrackQuery>,
) -> Json<TrackPage> {
    Json(app_state.store.list(&query).await)
}

/// GET /api/tracks/:slug
pub async fn get_track(
    Path(slug): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Track>> {
    Ok(Json(app_state.store.get_by_slug(&slug).await?))
}

/// POST /api/tracks
pub async fn create_track(
    State(app_state): State<AppState>,
    Json(data): Json<CreateTrack>,
) -> Result<(StatusCode, Json<Track>)> {
    let track = app_state.store.create(data).await?;
    Ok((StatusCode::CREATED, Json(track)))
}

/// PUT /api/tracks/:id
pub async fn update_track(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Json(update): Json<UpdateTrack>,
) -> Result<Json<Track>> {
    let track = app_state.store.update(&TrackId::new(id), update).await?;
    Ok(Json(track))
}

/// DELETE /api/tracks/:id
pub async fn delete_track(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    app_state.store.delete(&TrackId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/tracks/delete
pub async fn delete_tracks(
    State(app_state): State<AppState>,
    Json(request): Json<DeleteTracksRequest>,
) -> Result<Json<DeleteTracksResponse>> {
    if request.ids.is_empty() {
        return Err(ServerError::BadRequest("Track IDs are required".to_string()));
    }

    let response = app_state.store.delete_many(&request.ids).await;
    info!(
        deleted = response.success.len(),
        failed = response.failed.len(),
        "Bulk delete"
    );
    Ok(Json(response))
}

/// POST /api/tracks/:id/upload
/// Attach an audio file (multipart field `file`) to a track
pub async fn upload_file(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Track>> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ServerError::BadRequest("Missing Content-Type".to_string()))?;

    let boundary = multer::parse_boundary(content_type)
        .map_err(|_| ServerError::BadRequest("Expected multipart/form-data".to_string()))?;

    // Convert Bytes to a stream for multer
    let stream = futures_util::stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut upload: Option<(String, String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Failed to parse multipart: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let mime = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();
        let data = field
            .bytes()
            .await
            .map_err(|e| ServerError::BadRequest(format!("Failed to read file: {}", e)))?;

        upload = Some((file_name, mime, data));
    }

    let (file_name, mime, data) =
        upload.ok_or_else(|| ServerError::BadRequest("Missing file".to_string()))?;

    if file_name.is_empty() {
        return Err(ServerError::BadRequest("Missing file name".to_string()));
    }
    if !is_allowed_content_type(&mime) {
        return Err(ServerError::BadRequest(format!("Invalid file type: {}", mime)));
    }
    if data.len() > app_state.max_upload_size() {
        return Err(ServerError::PayloadTooLarge(format!(
            "File size exceeds limit of {} bytes",
            app_state.max_upload_size()
        )));
    }

    let track = app_state
        .store
        .save_audio(&TrackId::new(id), &file_name, &data)
        .await?;
    Ok(Json(track))
}

/// DELETE /api/tracks/:id/file
pub async fn delete_file(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Track>> {
    let track = app_state.store.delete_audio(&TrackId::new(id)).await?;
    Ok(Json(track))
}
