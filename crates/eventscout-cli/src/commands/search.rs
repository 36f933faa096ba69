use anyhow::Result;

use eventscout_client::{EventSearch, EventsClient, GeoLocator, LocationProvider};
use eventscout_core::config::LayeredConfig;
use eventscout_core::session::Session;

use crate::cli::{SearchArgs, TimeSlotArg};
use crate::output::OutputWriter;
use crate::progress::create_spinner;

pub async fn execute(args: SearchArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let timeout = super::request_timeout(config);
    let mut session = Session::new();

    // One-shot mode: the city arrives fully typed, so the suggestion ticket
    // the edit mints is simply never dispatched.
    if let Some(city) = args.city {
        session.edit_city(city);
    }

    if args.date.is_some() && args.time == TimeSlotArg::All {
        output.warning("--date only accompanies a non-default --time slot; it will not be sent");
    }

    session.set_time_slot(args.time.into());
    session.set_date(args.date);
    session.set_zone(args.zone.map(Into::into));
    session.set_category(args.category.into());
    session.set_role(args.role.into());

    if args.locate {
        let locator = GeoLocator::new(config.locator_url.value.clone(), timeout);
        session.begin_locate();
        session.apply_location(locator.resolve().await);
        output.status(session.status());
    }

    let params = session.begin_search();
    tracing::debug!(?params, "composed search request");

    let spinner = if output.is_json() {
        None
    } else {
        Some(create_spinner("Searching events..."))
    };

    let client = EventsClient::new(config.service_url.value.clone(), timeout);
    let outcome = client.search(&params).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    session.apply_search(outcome);
    output.events(session.events(), session.status());

    Ok(())
}
