#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! databricks — manage jobs and cluster libraries from the command line.

mod api;
mod cli;
mod commands;
mod config;
mod errors;
mod library;
mod logging;
mod options;
mod types;

use clap::{CommandFactory, FromArgMatches};
use log::debug;

use api::ApiClient;
use cli::{Cli, OutputCtx, write_error};
use config::{ConfigError, DatabricksConfig};
use errors::CliError;
use options::ProvidedOptions;
use types::ErrorOutput;

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    logging::init(cli.verbose.log_level_filter());

    let provided = ProvidedOptions::from_matches(&matches);
    let ctx = OutputCtx::new(cli.output, cli.no_header);

    match run(&cli, &provided, &ctx, config::load) {
        Ok(()) => {}
        Err(err) => {
            debug!("{err:?}");
            let error_output = ErrorOutput::from_cli_error(&err);
            write_error(&error_output, ctx.format);
            std::process::exit(err.exit_code());
        }
    }
}

/// Validate input, connect, and run the command. `load` resolves the named profile.
fn run<L>(cli: &Cli, provided: &ProvidedOptions, ctx: &OutputCtx, load: L) -> Result<(), CliError>
where
    L: FnOnce(&str) -> Result<DatabricksConfig, ConfigError>,
{
    commands::check(&cli.command, provided)?;
    let config = load(&cli.profile)?;
    let api = ApiClient::new(&config)?;
    commands::dispatch(&cli.command, provided, ctx, &api)
}
