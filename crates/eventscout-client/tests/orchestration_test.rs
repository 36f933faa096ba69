//! Integration tests for session orchestration over the ports
//!
//! These tests drive the session with canned collaborators under real task
//! interleaving, the same dispatch/completion shape the interactive client
//! uses: lookups spawned per edit, completions funneled through a channel,
//! applied serially.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use eventscout_client::{EventSearch, SuggestionSource};
use eventscout_core::compose::ParameterSet;
use eventscout_core::error::{EventscoutError, Result};
use eventscout_core::models::Event;
use eventscout_core::session::Session;
use eventscout_core::status::Status;

/// Suggestion source answering canned responses after per-query delays
struct CannedSuggestions {
    responses: HashMap<&'static str, (Duration, Vec<&'static str>)>,
}

#[async_trait]
impl SuggestionSource for CannedSuggestions {
    async fn suggest(&self, query: &str) -> Result<Vec<String>> {
        match self.responses.get(query) {
            Some((delay, cities)) => {
                tokio::time::sleep(*delay).await;
                Ok(cities.iter().map(|c| c.to_string()).collect())
            }
            None => Err(EventscoutError::SuggestionFetchFailed {
                reason: format!("no canned response for {:?}", query),
            }),
        }
    }
}

/// Event search answering a fixed outcome
struct CannedEvents {
    outcome: fn() -> Result<Vec<Event>>,
}

#[async_trait]
impl EventSearch for CannedEvents {
    async fn search(&self, _params: &ParameterSet) -> Result<Vec<Event>> {
        (self.outcome)()
    }
}

fn dispatch(
    session: &mut Session,
    source: &Arc<CannedSuggestions>,
    tx: &mpsc::UnboundedSender<(u64, Result<Vec<String>>)>,
    text: &str,
) {
    if let Some(ticket) = session.edit_city(text) {
        let source = Arc::clone(source);
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = source.suggest(&ticket.query).await;
            let _ = tx.send((ticket.seq, result));
        });
    }
}

#[tokio::test(start_paused = true)]
async fn test_slow_stale_response_never_wins() {
    // The older, broader query is slow; the newer one is fast, so the stale
    // completion arrives last.
    let source = Arc::new(CannedSuggestions {
        responses: HashMap::from([
            ("Mun", (Duration::from_millis(500), vec!["Mundelein", "Munster", "Munich"])),
            ("Munich", (Duration::from_millis(50), vec!["Munich"])),
        ]),
    });

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = Session::new();

    dispatch(&mut session, &source, &tx, "Mun");
    dispatch(&mut session, &source, &tx, "Munich");
    drop(tx);

    // Apply completions strictly in arrival order.
    while let Some((seq, result)) = rx.recv().await {
        match result {
            Ok(cities) => {
                session.apply_suggestions(seq, cities);
            }
            Err(error) => {
                session.suggestions_failed(seq, &error);
            }
        }
    }

    assert_eq!(session.suggestions(), ["Munich".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_failed_lookup_leaves_newest_successful_list() {
    let source = Arc::new(CannedSuggestions {
        responses: HashMap::from([
            // "Muni" has no canned response and fails fast; "Mun" succeeds
            // slowly but is stale by then.
            ("Mun", (Duration::from_millis(300), vec!["Munich", "Munster"])),
        ]),
    });

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = Session::new();

    dispatch(&mut session, &source, &tx, "Mun");
    dispatch(&mut session, &source, &tx, "Muni");
    drop(tx);

    while let Some((seq, result)) = rx.recv().await {
        match result {
            Ok(cities) => {
                session.apply_suggestions(seq, cities);
            }
            Err(error) => {
                session.suggestions_failed(seq, &error);
            }
        }
    }

    // The current lookup failed (silently) and the stale success was
    // discarded: the list stays empty, ready for the next edit.
    assert!(session.suggestions().is_empty());
    assert_eq!(*session.status(), Status::Idle);
}

#[tokio::test]
async fn test_search_through_the_port_updates_the_session() {
    let search = CannedEvents {
        outcome: || {
            Ok(vec![Event {
                title: "Jazz Night".to_string(),
                datetime: "2024-05-01 20:00".to_string(),
                venue: None,
                url: None,
            }])
        },
    };

    let mut session = Session::new();
    session.edit_city("Munich");

    let params = session.begin_search();
    assert_eq!(*session.status(), Status::Searching);

    let outcome = search.search(&params).await;
    session.apply_search(outcome);

    assert_eq!(session.events().len(), 1);
    assert_eq!(*session.status(), Status::Idle);
}

#[tokio::test]
async fn test_service_error_through_the_port_clears_events() {
    let ok_search = CannedEvents {
        outcome: || {
            Ok(vec![Event {
                title: "Jazz Night".to_string(),
                datetime: "2024-05-01 20:00".to_string(),
                venue: None,
                url: None,
            }])
        },
    };
    let failing_search = CannedEvents {
        outcome: || Err(EventscoutError::SearchServiceError { message: "bad request".to_string() }),
    };

    let mut session = Session::new();
    let ok_params = session.begin_search();
    session.apply_search(ok_search.search(&ok_params).await);
    assert_eq!(session.events().len(), 1);

    let params = session.begin_search();
    session.apply_search(failing_search.search(&params).await);

    assert!(session.events().is_empty());
    assert_eq!(*session.status(), Status::SearchError);
}
