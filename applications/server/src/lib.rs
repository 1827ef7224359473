//! Tracklist Server Library
//!
//! REST backend for the track list: tracks, genres and uploaded audio over a
//! JSON-file store.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod seed;
pub mod state;

// Re-export commonly used types for convenience
pub use api::router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
