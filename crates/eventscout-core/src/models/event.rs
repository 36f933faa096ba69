use serde::{Deserialize, Serialize};

/// A single event as returned by the search service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event title
    pub title: String,

    /// Date and time, preformatted by the service
    pub datetime: String,

    /// Venue name, when the service knows it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    /// Detail link. The service withholds it for tier-gated content, so
    /// absence is gating, not a data error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Event {
    /// Whether the service withheld the detail link for this event
    pub fn is_gated(&self) -> bool {
        self.url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_full_event() {
        let event: Event = serde_json::from_str(
            r#"{"title":"Jazz Night","datetime":"2024-05-01 20:00","venue":"Blue Hall","url":"https://example.com/e/1"}"#,
        )
        .unwrap();

        assert_eq!(event.title, "Jazz Night");
        assert_eq!(event.venue.as_deref(), Some("Blue Hall"));
        assert!(!event.is_gated());
    }

    #[test]
    fn test_absent_url_means_gated() {
        let event: Event =
            serde_json::from_str(r#"{"title":"Members Gala","datetime":"2024-05-02 19:00"}"#)
                .unwrap();

        assert!(event.venue.is_none());
        assert!(event.is_gated());
    }
}
