//! Event search adapter

use async_trait::async_trait;
use eventscout_core::compose::ParameterSet;
use eventscout_core::error::{EventscoutError, Result};
use eventscout_core::models::Event;
use serde::Deserialize;
use std::time::Duration;

use crate::ports::EventSearch;

/// Event-search service client
///
/// Talks to `GET {base_url}/events?<params>`. The service answers with
/// either a JSON array of events or an error envelope `{"error": <msg>}`;
/// classification goes by body shape, not HTTP status. A body that is
/// neither shape counts as getting no response.
pub struct EventsClient {
    /// Base URL of the event-search service (e.g., "http://localhost:5000")
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

/// The two shapes the service produces
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EventsResponse {
    Error { error: String },
    Events(Vec<Event>),
}

/// Classify a raw response body into events or a failure
///
/// Split out of the transport so the mapping is testable without a live
/// service.
fn classify_body(body: &str) -> Result<Vec<Event>> {
    match serde_json::from_str::<EventsResponse>(body) {
        Ok(EventsResponse::Events(events)) => Ok(events),
        Ok(EventsResponse::Error { error }) => {
            Err(EventscoutError::SearchServiceError { message: error })
        }
        Err(e) => Err(EventscoutError::SearchTransportFailure {
            reason: format!("undecodable body: {}", e),
        }),
    }
}

impl EventsClient {
    /// Create a new event-search client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }
}

#[async_trait]
impl EventSearch for EventsClient {
    async fn search(&self, params: &ParameterSet) -> Result<Vec<Event>> {
        let response = self
            .client
            .get(format!("{}/events", self.base_url))
            .query(params.pairs())
            .send()
            .await
            .map_err(|e| EventscoutError::SearchTransportFailure {
                reason: format!("request failed: {}", e),
            })?;

        let body = response.text().await.map_err(|e| {
            EventscoutError::SearchTransportFailure {
                reason: format!("unreadable body: {}", e),
            }
        })?;

        classify_body(&body)
    }
}
