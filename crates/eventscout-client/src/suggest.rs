//! City suggestion adapter

use async_trait::async_trait;
use eventscout_core::error::{EventscoutError, Result};
use std::time::Duration;

use crate::ports::SuggestionSource;

/// Suggestion service client
///
/// Talks to `GET {base_url}/suggest?q=<text>`, which answers with a JSON
/// array of city names. The service defines no error envelope: any non-2xx
/// status, transport error, or undecodable body is a fetch failure.
pub struct SuggestClient {
    /// Base URL of the suggestion service (e.g., "http://localhost:5000")
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl SuggestClient {
    /// Create a new suggestion client
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
impl SuggestionSource for SuggestClient {
    async fn suggest(&self, query: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/suggest", self.base_url))
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| EventscoutError::SuggestionFetchFailed {
                reason: format!("request failed: {}", e),
            })?;

        if !response.status().is_success() {
            return Err(EventscoutError::SuggestionFetchFailed {
                reason: format!("service answered {}", response.status()),
            });
        }

        response.json::<Vec<String>>().await.map_err(|e| {
            EventscoutError::SuggestionFetchFailed {
                reason: format!("undecodable body: {}", e),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_client_creation() {
        let client = SuggestClient::new("http://localhost:5000", Duration::from_secs(10));
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
