//! Eventscout Client - HTTP adapters for the collaborator services
//!
//! This crate defines the ports the session orchestration depends on
//! (suggestions, event search, geolocation) along with reqwest-backed
//! adapter implementations. The collaborator services are opaque JSON
//! endpoints; everything here is mapping their responses into domain types
//! and the error taxonomy.

pub mod events;
pub mod locate;
pub mod ports;
pub mod suggest;

// Re-export main types
pub use events::EventsClient;
pub use locate::GeoLocator;
pub use ports::{EventSearch, LocationProvider, SuggestionSource};
pub use suggest::SuggestClient;
