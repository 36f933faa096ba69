//! Error types for eventscout

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventscoutError {
    // Geolocation errors
    #[error("Geolocation is not supported by this host")]
    Unsupported,

    #[error("Failed to get location: {reason}")]
    LocationUnavailable { reason: String },

    // Suggestion errors. Non-fatal and invisible to the user: logged only,
    // the suggestion list keeps its prior value.
    #[error("Suggestion lookup failed: {reason}")]
    SuggestionFetchFailed { reason: String },

    // Event search errors
    #[error("Event service reported an error: {message}")]
    SearchServiceError { message: String },

    #[error("Event search got no response: {reason}")]
    SearchTransportFailure { reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EventscoutError>;
