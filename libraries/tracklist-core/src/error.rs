/// Core error types for Tracklist
use thiserror::Error;

/// Result type alias using `TracklistError`
pub type Result<T> = std::result::Result<T, TracklistError>;

/// Core error type for Tracklist
#[derive(Error, Debug)]
pub enum TracklistError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input (missing required fields, rejected file types, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The write would collide with an existing entity (e.g. a slug)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Upload exceeds the configured size limit
    #[error("Payload too large: {size} bytes (limit {limit})")]
    PayloadTooLarge { size: usize, limit: usize },

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl TracklistError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Whether this error means the requested entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let err = TracklistError::not_found("Track", "abc");
        assert_eq!(err.to_string(), "Track not found: abc");
        assert!(err.is_not_found());
    }

    #[test]
    fn conflict_is_not_not_found() {
        let err = TracklistError::conflict("slug taken");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Conflict: slug taken");
    }
}
