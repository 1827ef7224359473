/// API route modules
pub mod files;
pub mod genres;
pub mod health;
pub mod tracks;

use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Room for multipart boundaries and headers around the file itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Build the full application router
pub fn router(app_state: AppState) -> Router {
    let upload_limit = app_state.max_upload_size() + MULTIPART_OVERHEAD;

    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/genres", get(genres::list_genres))
        .route(
            "/tracks",
            get(tracks::list_tracks).post(tracks::create_track),
        )
        .route("/tracks/delete", post(tracks::delete_tracks))
        .route(
            "/tracks/:id",
            get(tracks::get_track)
                .put(tracks::update_track)
                .delete(tracks::delete_track),
        )
        .route(
            "/tracks/:id/upload",
            post(tracks::upload_file).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/tracks/:id/file", delete(tracks::delete_file))
        .route("/files/:name", get(files::serve_file));

    let cors = cors_layer(&app_state.config.cors.origin);

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(cors)
        .with_state(app_state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        match HeaderValue::from_str(origin) {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                tracing::warn!(origin, "Invalid CORS origin, allowing any");
                AllowOrigin::any()
            }
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
