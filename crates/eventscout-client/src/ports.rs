//! Client port definitions
//!
//! These traits define the interfaces that service adapters must implement.
//! The session layer and the CLI depend on the traits, never on concrete
//! clients, so tests can drive the orchestration with canned collaborators.

use async_trait::async_trait;
use eventscout_core::compose::ParameterSet;
use eventscout_core::error::Result;
use eventscout_core::models::{Coordinates, Event};

/// Port for city-name autocompletion
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Look up candidate city names for a partial query
    ///
    /// Returns the service's ordered candidate list. Failures map to
    /// [`SuggestionFetchFailed`](eventscout_core::EventscoutError::SuggestionFetchFailed);
    /// the caller decides that they are non-fatal.
    async fn suggest(&self, query: &str) -> Result<Vec<String>>;
}

/// Port for the event-search service
#[async_trait]
pub trait EventSearch: Send + Sync {
    /// Run a composed search and decode the result list
    ///
    /// A service-reported error envelope maps to
    /// [`SearchServiceError`](eventscout_core::EventscoutError::SearchServiceError);
    /// getting no usable response at all maps to
    /// [`SearchTransportFailure`](eventscout_core::EventscoutError::SearchTransportFailure).
    async fn search(&self, params: &ParameterSet) -> Result<Vec<Event>>;
}

/// Port for the host's geolocation capability
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Request a single position fix
    ///
    /// Fails with [`Unsupported`](eventscout_core::EventscoutError::Unsupported)
    /// when the host exposes no geolocation capability at all, and with
    /// [`LocationUnavailable`](eventscout_core::EventscoutError::LocationUnavailable)
    /// when a lookup was attempted and did not produce a fix.
    async fn resolve(&self) -> Result<Coordinates>;
}
