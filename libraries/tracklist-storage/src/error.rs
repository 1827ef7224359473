/// Storage-specific errors
use thiserror::Error;
use tracklist_core::TracklistError;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Rejected input (missing fields, bad file names)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Write would collide with an existing track
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Path escapes the data directory
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Serialization/deserialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<StorageError> for TracklistError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => TracklistError::NotFound { entity, id },
            StorageError::InvalidInput(msg) | StorageError::InvalidPath(msg) => {
                TracklistError::InvalidInput(msg)
            }
            StorageError::Conflict(msg) => TracklistError::Conflict(msg),
            StorageError::Serialization(e) => TracklistError::Serialization(e),
            StorageError::Io(e) => TracklistError::Io(e),
        }
    }
}
