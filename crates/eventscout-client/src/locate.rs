//! Ambient geolocation adapter
//!
//! The terminal-host analogue of device geolocation: a configurable HTTP
//! endpoint that reports where this host is. No configured endpoint means
//! the capability simply does not exist here.

use async_trait::async_trait;
use eventscout_core::error::{EventscoutError, Result};
use eventscout_core::models::Coordinates;
use serde::Deserialize;
use std::time::Duration;

use crate::ports::LocationProvider;

/// Geolocation endpoint client
pub struct GeoLocator {
    /// Endpoint answering `GET` with `{"lat": <f64>, "lon": <f64>}`;
    /// `None` when the host has no geolocation capability
    endpoint: Option<String>,

    /// HTTP client
    client: reqwest::Client,
}

/// Position fix returned by the endpoint
#[derive(Debug, Deserialize)]
struct PositionResponse {
    lat: f64,
    lon: f64,
}

impl GeoLocator {
    /// Create a new locator; pass `None` for hosts without geolocation
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Whether a lookup could possibly succeed on this host
    pub fn is_supported(&self) -> bool {
        self.endpoint.is_some()
    }
}

#[async_trait]
impl LocationProvider for GeoLocator {
    async fn resolve(&self) -> Result<Coordinates> {
        let endpoint = self.endpoint.as_ref().ok_or(EventscoutError::Unsupported)?;

        let response = self.client.get(endpoint).send().await.map_err(|e| {
            EventscoutError::LocationUnavailable { reason: format!("request failed: {}", e) }
        })?;

        if !response.status().is_success() {
            return Err(EventscoutError::LocationUnavailable {
                reason: format!("endpoint answered {}", response.status()),
            });
        }

        let position: PositionResponse = response.json().await.map_err(|e| {
            EventscoutError::LocationUnavailable { reason: format!("undecodable fix: {}", e) }
        })?;

        Ok(Coordinates::new(position.lat, position.lon))
    }
}
