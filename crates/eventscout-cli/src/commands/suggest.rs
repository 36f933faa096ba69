use anyhow::Result;

use eventscout_client::{SuggestClient, SuggestionSource};
use eventscout_core::config::LayeredConfig;
use eventscout_core::session::Session;

use crate::cli::SuggestArgs;
use crate::output::OutputWriter;

pub async fn execute(args: SuggestArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut session = Session::new();

    // A blank query resolves to an empty list without a network call.
    let Some(ticket) = session.edit_city(args.query) else {
        output.suggestions(session.suggestions());
        return Ok(());
    };

    let client = SuggestClient::new(config.service_url.value.clone(), super::request_timeout(config));

    match client.suggest(&ticket.query).await {
        Ok(cities) => {
            session.apply_suggestions(ticket.seq, cities);
        }
        Err(error) => {
            // Non-fatal by design: the list stays as it was and the error
            // goes to the log.
            session.suggestions_failed(ticket.seq, &error);
        }
    }

    output.suggestions(session.suggestions());
    Ok(())
}
