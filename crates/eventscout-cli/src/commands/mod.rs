//! Command implementations

mod locate;
mod search;
mod suggest;

use anyhow::{Context, Result};
use std::time::Duration;

use eventscout_core::config::{CliConfigOverrides, LayeredConfig};

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    let mut config = LayeredConfig::with_defaults();
    if let Some(path) = &cli.config {
        config = config
            .load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
    }
    let mut config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        service_url: cli.service_url,
        locator_url: cli.locator_url,
        timeout_secs: cli.timeout_secs,
    });

    match cli.command {
        Commands::Interactive => crate::interactive::execute(&config, &output).await,
        Commands::Search(args) => search::execute(args, &config, &output).await,
        Commands::Suggest(args) => suggest::execute(args, &config, &output).await,
        Commands::Locate => locate::execute(&config, &output).await,
    }
}

/// Per-request timeout from the resolved configuration
pub(crate) fn request_timeout(config: &LayeredConfig) -> Duration {
    Duration::from_secs(config.timeout_secs.value)
}
