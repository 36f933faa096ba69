//! Session status line
//!
//! A single overwritable slot consumed by the presentation layer. Not a
//! log: only the latest value is ever visible, and there are no severity
//! levels beyond what the message text conveys.

use crate::models::Coordinates;

/// Outcome of the most recent asynchronous operation, as shown to the user
///
/// The search lifecycle runs `Idle -> Searching` and terminates in one of
/// `Idle` (results found), `NoEvents`, `SearchError`, or `FetchFailed`.
/// Location lookups run `Locating -> Located | LocationUnsupported |
/// LocationFailed`. Every terminal state other than a non-empty search
/// success leaves its message visible until the next action overwrites it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Status {
    /// Nothing to report; the line is hidden
    #[default]
    Idle,

    /// Location lookup in flight
    Locating,

    /// Location resolved; shown rounded, stored at full precision
    Located(Coordinates),

    /// The host exposes no geolocation capability
    LocationUnsupported,

    /// Location lookup failed (denied, timed out, or unavailable)
    LocationFailed,

    /// Event search in flight
    Searching,

    /// Search succeeded but matched nothing
    NoEvents,

    /// The service returned an error envelope; detail went to the log
    SearchError,

    /// No response from the service at all
    FetchFailed,
}

impl Status {
    /// The human-readable line, or `None` when there is nothing to show
    pub fn line(&self) -> Option<String> {
        match self {
            Status::Idle => None,
            Status::Locating => Some("Locating...".to_string()),
            Status::Located(coords) => Some(format!("Got location {}", coords.display())),
            Status::LocationUnsupported => Some("Geolocation not supported.".to_string()),
            Status::LocationFailed => Some("Failed to get location.".to_string()),
            Status::Searching => Some("Searching events...".to_string()),
            Status::NoEvents => Some("No events found.".to_string()),
            Status::SearchError => Some("Error fetching events. See log for details.".to_string()),
            Status::FetchFailed => Some("Fetch failed.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_line() {
        assert_eq!(Status::Idle.line(), None);
    }

    #[test]
    fn test_located_line_uses_rounded_coordinates() {
        let status = Status::Located(Coordinates::new(48.137154, 11.576124));
        assert_eq!(status.line().unwrap(), "Got location (48.137, 11.576)");
    }
}
