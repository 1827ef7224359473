/// Genres API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};

/// GET /api/genres
pub async fn list_genres(State(app_state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(app_state.store.genres().await?))
}
