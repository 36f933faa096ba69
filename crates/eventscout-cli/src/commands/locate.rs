use anyhow::Result;

use eventscout_client::{GeoLocator, LocationProvider};
use eventscout_core::config::LayeredConfig;
use eventscout_core::session::Session;

use crate::output::OutputWriter;
use crate::progress::create_spinner;

pub async fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let locator = GeoLocator::new(config.locator_url.value.clone(), super::request_timeout(config));
    let mut session = Session::new();

    session.begin_locate();

    let spinner = if output.is_json() || !locator.is_supported() {
        None
    } else {
        Some(create_spinner("Locating..."))
    };

    let outcome = locator.resolve().await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    session.apply_location(outcome);
    output.location(session.coordinates(), session.status());

    Ok(())
}
