//! Session state and transitions
//!
//! The whole interactive session lives in one [`Session`] value. User input
//! and completed network calls are applied through transition methods;
//! transitions that need a network round-trip hand back a ticket describing
//! the request to issue, and a matching `apply_*` method reconciles the
//! completion later. The session never performs I/O itself.
//!
//! Completions must be delivered one at a time, but in any order: the
//! ticket sequence number — not delivery order — is what protects the
//! suggestion list from stale responses.

use chrono::NaiveDate;

use crate::compose::{compose, ParameterSet};
use crate::error::EventscoutError;
use crate::models::{AccessTier, Category, Coordinates, Event, FilterState, ProximityZone, TimeSlot};
use crate::status::Status;

/// A suggestion lookup to issue, minted by [`Session::edit_city`]
///
/// `seq` identifies the request at completion time; only the completion of
/// the latest minted ticket may touch the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestTicket {
    pub seq: u64,
    pub query: String,
}

/// Central session state container
///
/// Holds the filter dimensions, the suggestion list, resolved coordinates,
/// the current event list, and the status slot. All fields are private;
/// every mutation goes through a transition method so the ordering rules
/// live in exactly one place.
#[derive(Debug, Clone, Default)]
pub struct Session {
    filters: FilterState,
    suggestions: Vec<String>,
    /// Sequence number of the most recently minted suggestion ticket
    suggest_seq: u64,
    coords: Option<Coordinates>,
    events: Vec<Event>,
    status: Status,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // --- filter dimensions (independent, side-effect-free setters) ---

    pub fn set_time_slot(&mut self, slot: TimeSlot) {
        self.filters.time_slot = slot;
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.filters.date = date;
    }

    pub fn set_zone(&mut self, zone: Option<ProximityZone>) {
        self.filters.zone = zone;
    }

    pub fn set_category(&mut self, category: Category) {
        self.filters.category = category;
    }

    pub fn set_role(&mut self, role: AccessTier) {
        self.filters.role = role;
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    // --- city query and suggestions ---

    /// Record an edit to the city query.
    ///
    /// Returns the suggestion lookup to issue for the new value, keyed by
    /// the raw (untrimmed) query. When the trimmed query is empty the list
    /// is cleared and no ticket is minted, so no network call happens.
    pub fn edit_city(&mut self, text: impl Into<String>) -> Option<SuggestTicket> {
        self.filters.city = text.into();

        if self.filters.city_trimmed().is_empty() {
            self.suggestions.clear();
            return None;
        }

        self.suggest_seq += 1;
        Some(SuggestTicket { seq: self.suggest_seq, query: self.filters.city.clone() })
    }

    /// Apply a completed suggestion lookup, replacing the list wholesale.
    ///
    /// A completion for a superseded ticket is discarded; returns whether
    /// the list was updated.
    pub fn apply_suggestions(&mut self, seq: u64, cities: Vec<String>) -> bool {
        if seq != self.suggest_seq {
            tracing::debug!(seq, latest = self.suggest_seq, "discarding stale suggestion response");
            return false;
        }
        self.suggestions = cities;
        true
    }

    /// Record a failed suggestion lookup.
    ///
    /// Silent and non-fatal: the list keeps its prior value and the status
    /// line is untouched. The error goes to the diagnostic log only.
    /// Returns whether the failure belonged to the current ticket.
    pub fn suggestions_failed(&mut self, seq: u64, error: &EventscoutError) -> bool {
        if seq != self.suggest_seq {
            tracing::debug!(seq, latest = self.suggest_seq, "discarding stale suggestion failure");
            return false;
        }
        tracing::warn!(%error, "suggestion lookup failed");
        true
    }

    /// Adopt a suggestion as the city query.
    ///
    /// Terminal for the lookup cycle: the query becomes exactly the chosen
    /// string, the list empties, and no ticket is minted for this edit.
    pub fn select_suggestion(&mut self, city: &str) {
        self.filters.city = city.to_string();
        self.suggestions.clear();
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    // --- location ---

    /// Mark a location lookup as started.
    pub fn begin_locate(&mut self) {
        self.status = Status::Locating;
    }

    /// Apply the outcome of a location lookup.
    ///
    /// A later lookup's outcome simply overwrites an earlier one's status;
    /// the slot is advisory, so last-write-wins is fine here.
    pub fn apply_location(&mut self, outcome: Result<Coordinates, EventscoutError>) {
        match outcome {
            Ok(coords) => {
                self.coords = Some(coords);
                self.status = Status::Located(coords);
            }
            Err(EventscoutError::Unsupported) => {
                self.status = Status::LocationUnsupported;
            }
            Err(error) => {
                tracing::warn!(%error, "location lookup failed");
                self.status = Status::LocationFailed;
            }
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coords
    }

    // --- event search ---

    /// Compose the request for the current state and mark the search as in
    /// flight.
    pub fn begin_search(&mut self) -> ParameterSet {
        self.status = Status::Searching;
        compose(&self.filters, self.coords.as_ref())
    }

    /// Apply the outcome of an event search.
    ///
    /// A service-reported error clears the list; a transport failure (no
    /// response at all) leaves it alone. A successful empty response keeps
    /// the "no events" message visible; a non-empty one clears the status.
    pub fn apply_search(&mut self, outcome: Result<Vec<Event>, EventscoutError>) {
        match outcome {
            Ok(events) => {
                self.status = if events.is_empty() { Status::NoEvents } else { Status::Idle };
                self.events = events;
            }
            Err(EventscoutError::SearchServiceError { message }) => {
                tracing::error!(%message, "event service returned an error");
                self.events.clear();
                self.status = Status::SearchError;
            }
            Err(error) => {
                tracing::error!(%error, "event search got no response");
                self.status = Status::FetchFailed;
            }
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn status(&self) -> &Status {
        &self.status
    }
}
