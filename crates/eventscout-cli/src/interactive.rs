//! Interactive session
//!
//! A menu-driven rendition of the event finder. Suggestion lookups run as
//! background tasks and report back over a channel; completions are applied
//! to the session one at a time between prompts, and the session's ticket
//! check drops any that a newer query has superseded.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use eventscout_client::{
    EventSearch, EventsClient, GeoLocator, LocationProvider, SuggestClient, SuggestionSource,
};
use eventscout_core::config::LayeredConfig;
use eventscout_core::error::EventscoutError;
use eventscout_core::models::{AccessTier, Category, ProximityZone, TimeSlot};
use eventscout_core::session::{Session, SuggestTicket};

use crate::output::OutputWriter;
use crate::progress::create_spinner;

/// A completed suggestion lookup, tagged with its ticket sequence number
type SuggestCompletion = (u64, Result<Vec<String>, EventscoutError>);

/// How long the city prompt waits for a suggestion round-trip before moving
/// on; stragglers are reconciled on a later drain
const SUGGEST_WAIT: Duration = Duration::from_millis(1500);

pub async fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    if output.is_json() {
        output.warning("--json has no effect on the interactive session");
    }

    let timeout = crate::commands::request_timeout(config);
    let suggest = Arc::new(SuggestClient::new(config.service_url.value.clone(), timeout));
    let events = EventsClient::new(config.service_url.value.clone(), timeout);
    let locator = GeoLocator::new(config.locator_url.value.clone(), timeout);

    let (tx, mut rx) = mpsc::unbounded_channel::<SuggestCompletion>();
    let mut session = Session::new();

    println!("{}", style("Find events near you").bold());

    loop {
        drain_completions(&mut session, &mut rx);

        println!();
        print_summary(&session);
        output.status(session.status());

        let choice = Select::new()
            .with_prompt("What next?")
            .items(&[
                "Enter a city",
                "Use my location",
                "Adjust filters",
                "Search events",
                "Quit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => city_prompt(&mut session, &suggest, &tx, &mut rx).await?,
            1 => locate_flow(&mut session, &locator, output).await?,
            2 => filters_prompt(&mut session)?,
            3 => search_flow(&mut session, &events, output).await?,
            _ => break,
        }
    }

    Ok(())
}

/// Prompt for a city, dispatching a suggestion lookup per edit
async fn city_prompt(
    session: &mut Session,
    suggest: &Arc<SuggestClient>,
    tx: &mpsc::UnboundedSender<SuggestCompletion>,
    rx: &mut mpsc::UnboundedReceiver<SuggestCompletion>,
) -> Result<()> {
    loop {
        let text: String = Input::new()
            .with_prompt("City")
            .with_initial_text(session.filters().city.clone())
            .allow_empty(true)
            .interact_text()?;

        // A cleared query ends the cycle: list emptied, nothing fetched.
        let Some(ticket) = session.edit_city(text) else {
            return Ok(());
        };

        dispatch_lookup(suggest, tx, ticket);
        await_current_completion(session, rx, SUGGEST_WAIT).await;

        if session.suggestions().is_empty() {
            // Nothing came back (or the lookup failed); keep what was typed.
            return Ok(());
        }

        let mut items: Vec<String> = session.suggestions().to_vec();
        let keep_index = items.len();
        items.push(format!("(keep \"{}\")", session.filters().city));
        items.push("(type again)".to_string());

        let picked = Select::new()
            .with_prompt("Did you mean")
            .items(&items)
            .default(0)
            .interact()?;

        if picked < keep_index {
            let city = items[picked].clone();
            session.select_suggestion(&city);
            return Ok(());
        }
        if picked == keep_index {
            return Ok(());
        }
        // "(type again)": back to the input with the current text
    }
}

/// Spawn a suggestion lookup for a minted ticket
fn dispatch_lookup(
    suggest: &Arc<SuggestClient>,
    tx: &mpsc::UnboundedSender<SuggestCompletion>,
    ticket: SuggestTicket,
) {
    let suggest = Arc::clone(suggest);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = suggest.suggest(&ticket.query).await;
        // The receiver may be gone when the session has ended.
        let _ = tx.send((ticket.seq, result));
    });
}

/// Wait briefly for the current ticket's completion, reconciling (and
/// discarding) whatever else arrives first
async fn await_current_completion(
    session: &mut Session,
    rx: &mut mpsc::UnboundedReceiver<SuggestCompletion>,
    wait: Duration,
) {
    let deadline = tokio::time::Instant::now() + wait;
    loop {
        match tokio::time::timeout_at(deadline, rx.recv()).await {
            Ok(Some((seq, Ok(cities)))) => {
                if session.apply_suggestions(seq, cities) {
                    return;
                }
            }
            Ok(Some((seq, Err(error)))) => {
                if session.suggestions_failed(seq, &error) {
                    return;
                }
            }
            // Timed out or the channel closed; a straggler will be
            // reconciled on a later drain.
            _ => return,
        }
    }
}

/// Apply any suggestion completions that arrived since the last prompt
fn drain_completions(session: &mut Session, rx: &mut mpsc::UnboundedReceiver<SuggestCompletion>) {
    while let Ok((seq, result)) = rx.try_recv() {
        match result {
            Ok(cities) => {
                session.apply_suggestions(seq, cities);
            }
            Err(error) => {
                session.suggestions_failed(seq, &error);
            }
        }
    }
}

async fn locate_flow(
    session: &mut Session,
    locator: &GeoLocator,
    output: &OutputWriter,
) -> Result<()> {
    session.begin_locate();

    let spinner = locator.is_supported().then(|| create_spinner("Locating..."));
    let outcome = locator.resolve().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    session.apply_location(outcome);
    output.status(session.status());
    Ok(())
}

async fn search_flow(
    session: &mut Session,
    events: &EventsClient,
    output: &OutputWriter,
) -> Result<()> {
    let params = session.begin_search();
    tracing::debug!(?params, "composed search request");

    let spinner = create_spinner("Searching events...");
    let outcome = events.search(&params).await;
    spinner.finish_and_clear();

    session.apply_search(outcome);

    println!();
    output.events(session.events(), session.status());
    Ok(())
}

/// Adjust filter dimensions one at a time
fn filters_prompt(session: &mut Session) -> Result<()> {
    loop {
        let filters = session.filters();
        let items = vec![
            format!("Time slot [{}]", filters.time_slot.param_value().unwrap_or("all")),
            format!(
                "Date      [{}]",
                filters.date.map_or_else(|| "any".to_string(), |d| d.to_string())
            ),
            format!(
                "Zone      [{}]",
                filters.zone.map_or("none", |z| z.param_value())
            ),
            format!("Category  [{}]", filters.category.param_value().unwrap_or("All")),
            format!("Role      [{}]", filters.role.param_value().unwrap_or("standard")),
            "Done".to_string(),
        ];

        let choice = Select::new()
            .with_prompt("Adjust which filter?")
            .items(&items)
            .default(items.len() - 1)
            .interact()?;

        match choice {
            0 => {
                let slots = ["All", "Morning", "Afternoon", "Evening"];
                let idx =
                    Select::new().with_prompt("Time slot").items(&slots).default(0).interact()?;
                session.set_time_slot(match idx {
                    1 => TimeSlot::Morning,
                    2 => TimeSlot::Afternoon,
                    3 => TimeSlot::Evening,
                    _ => TimeSlot::All,
                });
            }
            1 => {
                let text: String = Input::new()
                    .with_prompt("Date (YYYY-MM-DD, empty for any)")
                    .allow_empty(true)
                    .interact_text()?;

                if text.trim().is_empty() {
                    session.set_date(None);
                } else {
                    match text.trim().parse::<chrono::NaiveDate>() {
                        Ok(date) => {
                            session.set_date(Some(date));
                            if session.filters().time_slot == TimeSlot::All {
                                println!(
                                    "{}",
                                    style("A date only narrows the search once a time slot is picked.")
                                        .dim()
                                );
                            }
                        }
                        Err(_) => {
                            println!("{}", style("Not a date; leaving it unchanged.").yellow())
                        }
                    }
                }
            }
            2 => {
                let zones = ["None", "Zone A", "Zone B"];
                let idx = Select::new().with_prompt("Zone").items(&zones).default(0).interact()?;
                session.set_zone(match idx {
                    1 => Some(ProximityZone::ZoneA),
                    2 => Some(ProximityZone::ZoneB),
                    _ => None,
                });
            }
            3 => {
                let categories = [
                    "All", "Music", "Arts", "Sports", "Business", "Food & Drink", "Tech", "Other",
                ];
                let idx = Select::new()
                    .with_prompt("Category")
                    .items(&categories)
                    .default(0)
                    .interact()?;
                session.set_category(match idx {
                    1 => Category::Music,
                    2 => Category::Arts,
                    3 => Category::Sports,
                    4 => Category::Business,
                    5 => Category::FoodAndDrink,
                    6 => Category::Tech,
                    7 => Category::Other,
                    _ => Category::All,
                });
            }
            4 => {
                let roles = ["Standard", "Premium"];
                let idx = Select::new().with_prompt("Role").items(&roles).default(0).interact()?;
                session.set_role(if idx == 1 { AccessTier::Premium } else { AccessTier::Standard });
            }
            _ => return Ok(()),
        }
    }
}

/// One dim line summarizing what the next search would use
fn print_summary(session: &Session) {
    let filters = session.filters();
    let mut parts: Vec<String> = Vec::new();

    if !filters.city_trimmed().is_empty() {
        parts.push(format!("city: {}", filters.city_trimmed()));
    }
    if let Some(coords) = session.coordinates() {
        parts.push(format!("location: {}", coords.display()));
    }
    if let Some(time) = filters.time_slot.param_value() {
        parts.push(format!("time: {}", time));
    }
    if let Some(date) = filters.date {
        parts.push(format!("date: {}", date));
    }
    if let Some(zone) = filters.zone {
        parts.push(format!("zone: {}", zone.param_value()));
    }
    if let Some(category) = filters.category.param_value() {
        parts.push(format!("category: {}", category));
    }
    if let Some(role) = filters.role.param_value() {
        parts.push(format!("role: {}", role));
    }

    if parts.is_empty() {
        println!("{}", style("No filters set; searching everything.").dim());
    } else {
        println!("{}", style(parts.join(", ")).dim());
    }
}
